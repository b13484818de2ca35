//! docflow-core: motor secuencial fail-fast para pipelines de
//! transformación de documentos con linaje inspeccionable.
pub mod engine;
pub mod errors;
pub mod exec;
pub mod factory;
pub mod hashing;
pub mod ledger;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod scenario;
pub mod step;
pub mod store;

pub use engine::PipelineEngine;
pub use errors::PipelineError;
pub use exec::execute_step;
pub use factory::StepFactory;
pub use ledger::{InMemoryLedger, LedgerEntry, LedgerRecord, ProvenanceLedger};
pub use model::{Artifact, PipelineRun, StepOutcome};
pub use naming::derived_name;
pub use pipeline::{ContentSource, PipelineDefinition, StepRoute};
pub use scenario::ScenarioCtx;
pub use step::TransformStep;
pub use store::{ContentStore, InMemoryContentStore};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // Step inline mínimo para los tests de configuración del engine.
    struct EchoStep {
        ordinal: u32,
        format: &'static str,
    }

    impl TransformStep for EchoStep {
        fn label(&self) -> &'static str {
            "echo"
        }
        fn ordinal(&self) -> u32 {
            self.ordinal
        }
        fn output_format(&self) -> &str {
            self.format
        }
        fn transform(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
            Ok(input.to_vec())
        }
    }

    /// Fábrica que conoce los ordinales 1..=max; el formato del step 1 es
    /// configurable para provocar errores de construcción.
    struct EchoFactory {
        max: u32,
        first_format: &'static str,
    }

    impl StepFactory for EchoFactory {
        fn build(&self, ordinal: u32, _params: Option<&Value>) -> Result<Box<dyn TransformStep>, PipelineError> {
            if ordinal == 0 || ordinal > self.max {
                return Err(PipelineError::UnknownOrdinal(ordinal));
            }
            let format = if ordinal == 1 { self.first_format } else { "json" };
            Ok(Box::new(EchoStep { ordinal, format }))
        }
    }

    fn seeded_engine(scenario: &ScenarioCtx) -> PipelineEngine<InMemoryLedger, InMemoryContentStore> {
        let mut engine = PipelineEngine::in_memory();
        engine.store_mut().insert(scenario.id, "doc.txt", b"hola".to_vec());
        engine
    }

    #[test]
    fn linear_run_chains_names_and_ledger() {
        let scenario = ScenarioCtx::ephemeral();
        let mut engine = seeded_engine(&scenario);
        let factory = EchoFactory { max: 3, first_format: "json" };
        let def = PipelineDefinition::new().step(1).step(2).step(3);

        let run = engine.run(&factory, &def, &Artifact::origin("doc.txt"), &scenario)
                        .expect("run should succeed");

        assert!(run.success);
        assert_eq!(run.final_artifact.name, "doc_3.json");
        let names: Vec<&str> = run.artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["doc_1.json", "doc_2.json", "doc_3.json"]);
        assert_eq!(engine.ledger().successes().count(), 3);
        assert_eq!(engine.ledger().failures().count(), 0);
    }

    #[test]
    fn empty_output_format_aborts_before_anything_runs() {
        let scenario = ScenarioCtx::ephemeral();
        let mut engine = seeded_engine(&scenario);
        let factory = EchoFactory { max: 2, first_format: "" };
        let def = PipelineDefinition::new().step(1).step(2);

        let err = engine.run(&factory, &def, &Artifact::origin("doc.txt"), &scenario)
                        .expect_err("empty format must be fatal");

        assert_eq!(err, PipelineError::EmptyOutputFormat("echo".into()));
        assert!(err.is_configuration());
        assert!(engine.ledger().is_empty(), "no step may run under a config error");
    }

    #[test]
    fn unknown_ordinal_is_a_configuration_error() {
        let scenario = ScenarioCtx::ephemeral();
        let mut engine = seeded_engine(&scenario);
        let factory = EchoFactory { max: 1, first_format: "json" };
        let def = PipelineDefinition::new().step(7);

        let err = engine.run(&factory, &def, &Artifact::origin("doc.txt"), &scenario)
                        .expect_err("ordinal without step must be fatal");
        assert_eq!(err, PipelineError::UnknownOrdinal(7));
    }

    #[test]
    fn invalid_plan_is_rejected_before_building_steps() {
        let scenario = ScenarioCtx::ephemeral();
        let mut engine = seeded_engine(&scenario);
        // La fábrica fallaría en cualquier build; no debe llegar a usarse.
        let factory = EchoFactory { max: 0, first_format: "json" };
        let def = PipelineDefinition::new().step(1).step_from(2, 5);

        let err = engine.run(&factory, &def, &Artifact::origin("doc.txt"), &scenario)
                        .expect_err("forward route must be fatal");
        assert_eq!(err, PipelineError::InvalidRoute(2, 5));
        assert!(engine.ledger().is_empty());
    }

    #[test]
    fn missing_origin_content_is_contained_not_raised() {
        let scenario = ScenarioCtx::ephemeral();
        let mut engine = PipelineEngine::in_memory(); // store vacío
        let factory = EchoFactory { max: 1, first_format: "json" };
        let def = PipelineDefinition::new().step(1);
        let origin = Artifact::origin("ghost.txt");

        let run = engine.run(&factory, &def, &origin, &scenario)
                        .expect("content miss is not a configuration error");

        assert!(!run.success);
        assert_eq!(run.final_artifact.name, "ghost.txt");
        assert_eq!(engine.ledger().failures().count(), 1);
    }
}
