//! Contrato de un step de transformación.
//!
//! Un step es la unidad mínima de trabajo del pipeline: consume bytes
//! opacos y produce bytes opacos. No conoce la topología del pipeline ni a
//! sus consumidores; el ruteo de contenido es responsabilidad exclusiva del
//! orquestador. Los efectos secundarios internos (llamadas a servicios
//! externos, etc.) son asunto del step y el motor los trata como opacos.

use crate::errors::PipelineError;

pub trait TransformStep {
    /// Identidad estática del step; se usa como `producer` del artifact
    /// derivado. Constante por tipo concreto, nunca calculada por
    /// reflexión.
    fn label(&self) -> &'static str;

    /// Posición declarada en el pipeline (1..N por convención; no se exige
    /// contigüidad). Participa en la derivación del nombre del artifact.
    fn ordinal(&self) -> u32;

    /// Tag de formato del output (p. ej. "json"). Nunca vacío: un formato
    /// vacío es un error de configuración detectado al construir el step.
    fn output_format(&self) -> &str;

    /// Texto libre opcional para el artifact derivado.
    fn description(&self) -> &str {
        ""
    }

    /// Ejecuta la transformación. Falla con `PipelineError::StepExecution`
    /// (mensaje legible) ante input malformado, recursos no disponibles o
    /// lógica interna incompleta.
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError>;
}
