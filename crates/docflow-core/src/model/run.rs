//! Resultados de ejecución: por step (`StepOutcome`) y por corrida
//! (`PipelineRun`).

use super::Artifact;

/// Resultado de una invocación del protocolo de ejecución de steps.
///
/// En éxito `artifact` es el artifact recién producido y `content` sus
/// bytes. En fallo `artifact` es el artifact *fuente* (el último válido y
/// ya persistido), de modo que el caller siempre conserva una referencia
/// usable para diagnóstico o reanudación.
#[derive(Debug)]
pub struct StepOutcome {
    pub success: bool,
    pub content: Option<Vec<u8>>,
    pub artifact: Artifact,
}

impl StepOutcome {
    pub(crate) fn succeeded(content: Vec<u8>, artifact: Artifact) -> Self {
        Self { success: true,
               content: Some(content),
               artifact }
    }

    pub(crate) fn failed(last_good: Artifact) -> Self {
        Self { success: false,
               content: None,
               artifact: last_good }
    }
}

/// Agregado de una corrida completa del orquestador.
///
/// Existe sólo durante la invocación; no se persiste. `artifacts` lista los
/// outputs exitosos en orden de ejecución. `final_artifact` es el artifact
/// del step terminal en éxito, o el último artifact bueno ante un fallo.
#[derive(Debug)]
pub struct PipelineRun {
    pub success: bool,
    pub final_artifact: Artifact,
    pub artifacts: Vec<Artifact>,
}
