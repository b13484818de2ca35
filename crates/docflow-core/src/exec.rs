//! Protocolo de ejecución de steps.
//!
//! Ejecuta exactamente un step contra exactamente un payload, con
//! contención total de errores, y reporta el desenlace al ledger:
//! 1. Construye el nuevo `Artifact` (nombre derivado + productor + linaje)
//!    *antes* de correr el step, para que la procedencia intencional exista
//!    aunque el step falle.
//! 2. Si no hay input explícito, resuelve el contenido del artifact fuente
//!    a través del `ContentStore` (scoped por escenario). Un faltante ahí
//!    se trata igual que un fallo del step: se reporta y se contiene.
//! 3. Invoca `transform`. Éxito → `record_success` y outcome con el nuevo
//!    artifact. Fallo → `record_failure` y outcome con el artifact *fuente*
//!    (el último válido ya persistido).
//!
//! Garantía: el nuevo registro siempre llega al ledger, en éxito o fallo.
//! El protocolo nunca reintenta; todo fallo es terminal para la invocación.

use crate::ledger::ProvenanceLedger;
use crate::model::{Artifact, StepOutcome};
use crate::naming::derived_name;
use crate::scenario::ScenarioCtx;
use crate::step::TransformStep;
use crate::store::ContentStore;

pub fn execute_step<L, C>(step: &dyn TransformStep,
                          input: Option<&[u8]>,
                          source: &Artifact,
                          scenario: &ScenarioCtx,
                          ledger: &mut L,
                          store: &C)
                          -> StepOutcome
    where L: ProvenanceLedger,
          C: ContentStore
{
    let name = derived_name(&source.name, step.ordinal(), step.output_format());
    let mut artifact = Artifact::derived(name, step.label(), source, scenario.id);
    if !step.description().is_empty() {
        artifact = artifact.with_description(step.description());
    }

    let content = match input {
        Some(bytes) => bytes.to_vec(),
        None => match store.get_content(&source.name, scenario.id) {
            Ok(bytes) => bytes,
            Err(e) => {
                ledger.record_failure(&artifact, &e.to_string());
                return StepOutcome::failed(source.clone());
            }
        },
    };

    match step.transform(&content) {
        Ok(output) => {
            ledger.record_success(&artifact, &output);
            StepOutcome::succeeded(output, artifact)
        }
        Err(e) => {
            ledger.record_failure(&artifact, &e.to_string());
            StepOutcome::failed(source.clone())
        }
    }
}
