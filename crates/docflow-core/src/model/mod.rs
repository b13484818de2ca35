//! Modelos del pipeline (Artifact, StepOutcome, PipelineRun).

pub mod artifact;
pub mod run;

pub use artifact::Artifact;
pub use run::{PipelineRun, StepOutcome};
