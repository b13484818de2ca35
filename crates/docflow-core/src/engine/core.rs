//! Core PipelineEngine implementation
//!
//! Orquesta N invocaciones del protocolo de ejecución según el plan de
//! ruteo fijado en la definición. Control de flujo estrictamente secuencial
//! y fail-fast: un paso a la vez, en orden de declaración (también entre
//! ramas de fan-out), y el primer fallo detiene la corrida sin invocar los
//! steps restantes. No hay rollback compensatorio: los éxitos previos
//! quedan registrados en el ledger, y el fallo también.

use std::collections::HashMap;

use crate::errors::PipelineError;
use crate::exec::execute_step;
use crate::factory::StepFactory;
use crate::ledger::{InMemoryLedger, ProvenanceLedger};
use crate::model::{Artifact, PipelineRun};
use crate::pipeline::{ContentSource, PipelineDefinition};
use crate::scenario::ScenarioCtx;
use crate::store::{ContentStore, InMemoryContentStore};

/// Motor de ejecución de pipelines de transformación de documentos.
///
/// Genérico sobre el ledger de procedencia y el store de contenido; cada
/// invocación de `run` es independiente y posee en exclusiva sus artifacts
/// y contenidos. Un sistema anfitrión que corra pipelines concurrentes debe
/// usar una instancia por corrida, no compartir una.
pub struct PipelineEngine<L, C>
    where L: ProvenanceLedger,
          C: ContentStore
{
    ledger: L,
    store: C,
}

impl PipelineEngine<InMemoryLedger, InMemoryContentStore> {
    /// Crea un engine con colaboradores en memoria (demos y tests).
    pub fn in_memory() -> Self {
        Self::new_with_stores(InMemoryLedger::new(), InMemoryContentStore::new())
    }
}

impl<L, C> PipelineEngine<L, C>
    where L: ProvenanceLedger,
          C: ContentStore
{
    /// Crea un engine con los colaboradores proporcionados.
    pub fn new_with_stores(ledger: L, store: C) -> Self {
        Self { ledger, store }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Acceso mutable al store (p. ej. para sembrar contenido fuente en la
    /// implementación en memoria).
    pub fn store_mut(&mut self) -> &mut C {
        &mut self.store
    }

    /// Ejecuta el pipeline completo contra `origin`.
    ///
    /// - `Err(_)` sólo ante errores de configuración: plan inválido,
    ///   ordinal sin step registrado, formato de salida vacío.
    /// - Fallos de ejecución se devuelven como `success == false`, con
    ///   `final_artifact` apuntando al último artifact bueno (ya
    ///   persistido), habilitando diagnóstico o reanudación.
    ///
    /// Cada step se construye vía la fábrica una única vez por corrida,
    /// inmediatamente antes de ejecutarse; los steps posteriores a un fallo
    /// nunca llegan a construirse.
    pub fn run(&mut self,
               factory: &dyn StepFactory,
               definition: &PipelineDefinition,
               origin: &Artifact,
               scenario: &ScenarioCtx)
               -> Result<PipelineRun, PipelineError> {
        definition.validate()?;

        // Outputs por ordinal: bytes + artifact. El fan-out lee de acá sin
        // re-ejecutar el upstream.
        let mut outputs: HashMap<u32, (Vec<u8>, Artifact)> = HashMap::new();
        let mut produced: Vec<Artifact> = Vec::new();
        let mut previous: Option<u32> = None;

        for route in definition.routes() {
            let step = factory.build(route.ordinal, route.params.as_ref())?;
            if step.output_format().is_empty() {
                return Err(PipelineError::EmptyOutputFormat(step.label().to_string()));
            }

            let upstream = match route.feed {
                ContentSource::Origin => None,
                ContentSource::Previous => previous,
                ContentSource::Step(n) => Some(n),
            };
            let (input, parent): (Option<&[u8]>, &Artifact) = match upstream {
                None => (None, origin),
                Some(n) => {
                    let (bytes, artifact) = outputs.get(&n)
                                                   .ok_or_else(|| {
                                                       PipelineError::Internal(format!("no output held for ordinal {n}"))
                                                   })?;
                    (Some(bytes.as_slice()), artifact)
                }
            };

            let outcome = execute_step(step.as_ref(), input, parent, scenario, &mut self.ledger, &self.store);

            if !outcome.success {
                return Ok(PipelineRun { success: false,
                                        final_artifact: outcome.artifact,
                                        artifacts: produced });
            }

            let content = match outcome.content {
                Some(content) => content,
                None => return Err(PipelineError::Internal("successful step yielded no content".into())),
            };
            produced.push(outcome.artifact.clone());
            outputs.insert(route.ordinal, (content, outcome.artifact));
            previous = Some(route.ordinal);
        }

        let terminal = definition.terminal_ordinal()
                                 .ok_or_else(|| PipelineError::Internal("validated plan has no terminal".into()))?;
        let final_artifact = outputs.get(&terminal)
                                    .map(|(_, artifact)| artifact.clone())
                                    .ok_or_else(|| {
                                        PipelineError::Internal(format!("terminal ordinal {terminal} has no output"))
                                    })?;

        Ok(PipelineRun { success: true,
                         final_artifact,
                         artifacts: produced })
    }
}
