//! Errores del motor de pipelines.
//!
//! Se distinguen dos familias:
//! - Errores de configuración (plan de ruteo inválido, step sin formato de
//!   salida, ordinal desconocido): fatales, el pipeline no ejecuta y
//!   `PipelineEngine::run` los devuelve como `Err`.
//! - Errores de ejecución (`StepExecution`, `ContentNotFound`): contenidos
//!   por el protocolo de ejecución, registrados en el ledger y expuestos al
//!   caller sólo como `success == false`. Nunca escapan del orquestador.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PipelineError {
    #[error("step '{0}' declares an empty output format")]
    EmptyOutputFormat(String),
    #[error("no step registered for ordinal {0}")]
    UnknownOrdinal(u32),
    #[error("pipeline definition declares no steps")]
    EmptyPipeline,
    #[error("ordinal {0} declared more than once in the routing plan")]
    DuplicateOrdinal(u32),
    #[error("route for ordinal {0} consumes ordinal {1}, which is not produced earlier")]
    InvalidRoute(u32, u32),
    #[error("terminal ordinal {0} is not part of the routing plan")]
    UnknownTerminal(u32),
    #[error("no content stored for artifact '{0}'")]
    ContentNotFound(String),
    #[error("step execution failed: {0}")]
    StepExecution(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Indica si el error pertenece a la familia de configuración (fatal
    /// antes de ejecutar) o a la de ejecución (contenida por el protocolo).
    pub fn is_configuration(&self) -> bool {
        !matches!(self,
                  PipelineError::ContentNotFound(_) | PipelineError::StepExecution(_) | PipelineError::Internal(_))
    }
}
