//! Fábrica de steps (colaborador externo).

use serde_json::Value;

use crate::errors::PipelineError;
use crate::step::TransformStep;

/// Mapea `ordinal` + parámetros opcionales a un step construido.
///
/// El orquestador la invoca exactamente una vez por ordinal por corrida,
/// inmediatamente antes de ejecutar ese step. Los parámetros son opacos
/// para el motor; cada implementación decide cómo decodificarlos.
pub trait StepFactory {
    fn build(&self, ordinal: u32, params: Option<&Value>) -> Result<Box<dyn TransformStep>, PipelineError>;
}
