//! Demo ejecutable del pipeline de ingesta de documentos.
//!
//! Corre dos escenarios contra colaboradores en memoria:
//! 1. Ingesta completa con fan-out (particionar → índice de títulos →
//!    indexar dos colecciones desde upstreams distintos).
//! 2. Variante con fuente binaria, para mostrar el corte fail-fast y el
//!    registro del fallo en el ledger.

use docflow_adapters::DocStepFactory;
use docflow_core::{Artifact, ContentSource, LedgerRecord, PipelineDefinition, PipelineEngine, ScenarioCtx,
                   StepRoute};
use serde_json::json;
use uuid::Uuid;

const MANUAL: &str = "# Manual de usuario\n\
Linea introductoria\n\
# Instalacion\n\
Paso uno\n\
Paso dos\n\
# Uso\n\
Ejemplo basico\n\
# Apendice\n\
Tablas de referencia";

fn ingest_definition() -> PipelineDefinition {
    PipelineDefinition::new().step_with_params(1, json!({"lines_per_chunk": 4}))
                             .step(2)
                             .step_with_params(3, json!({"collection": "outlines"}))
                             .route(StepRoute { ordinal: 4,
                                                feed: ContentSource::Step(1),
                                                params: Some(json!({"collection": "pages"})) })
                             .terminal(3)
}

fn print_ledger(engine: &PipelineEngine<docflow_core::InMemoryLedger, docflow_core::InMemoryContentStore>) {
    for entry in engine.ledger().entries() {
        match &entry.record {
            LedgerRecord::Produced { artifact, content_hash, size } => {
                println!("  [{}] OK   {} <- {} ({} bytes, hash {})",
                         entry.seq,
                         artifact.name,
                         artifact.source_name.as_deref().unwrap_or("-"),
                         size,
                         &content_hash[..12]);
            }
            LedgerRecord::Failed { artifact, message } => {
                println!("  [{}] FAIL {} <- {}: {}",
                         entry.seq,
                         artifact.name,
                         artifact.source_name.as_deref().unwrap_or("-"),
                         message);
            }
        }
    }
}

fn run_ingest_demo() {
    println!("== Ingesta con fan-out ==");
    let scenario = ScenarioCtx::new(Uuid::new_v4());
    println!("escenario: {}", scenario.id);
    let mut engine = PipelineEngine::in_memory();
    engine.store_mut().insert(scenario.id, "manual.txt", MANUAL.as_bytes().to_vec());

    let factory = DocStepFactory::standard();
    let run = match engine.run(&factory, &ingest_definition(), &Artifact::origin("manual.txt"), &scenario) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("configuracion invalida: {e}");
            return;
        }
    };

    println!("success={} final={}", run.success, run.final_artifact.name);
    print_ledger(&engine);
}

fn run_failure_demo() {
    println!("== Fuente binaria (fail-fast) ==");
    let scenario = ScenarioCtx::ephemeral();
    let mut engine = PipelineEngine::in_memory();
    engine.store_mut().insert(scenario.id, "manual.txt", vec![0xff, 0x00, 0xfe]);

    let factory = DocStepFactory::standard();
    let run = match engine.run(&factory, &ingest_definition(), &Artifact::origin("manual.txt"), &scenario) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("configuracion invalida: {e}");
            return;
        }
    };

    println!("success={} last_good={}", run.success, run.final_artifact.name);
    print_ledger(&engine);
}

fn main() {
    run_ingest_demo();
    println!();
    run_failure_demo();
}
