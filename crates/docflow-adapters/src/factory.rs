//! Fábrica de steps de documentos.
//!
//! Mapea cada ordinal del plan a un tipo de step concreto. Los parámetros
//! llegan como JSON opaco desde la ruta; si faltan o no decodifican se usan
//! los defaults del step.

use std::collections::HashMap;

use docflow_core::{PipelineError, StepFactory, TransformStep};
use serde_json::Value;

use crate::steps::{ChunkParams, IndexParams, OutlineStep, PageChunkStep, SearchIndexStep};

/// Tipos de step que esta fábrica sabe construir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStepKind {
    PageChunk,
    Outline,
    SearchIndex,
}

pub struct DocStepFactory {
    registry: HashMap<u32, DocStepKind>,
}

impl DocStepFactory {
    pub fn new() -> Self {
        Self { registry: HashMap::new() }
    }

    /// Registra un tipo de step para un ordinal.
    pub fn register(mut self, ordinal: u32, kind: DocStepKind) -> Self {
        self.registry.insert(ordinal, kind);
        self
    }

    /// Topología clásica de ingesta: particionar, extraer índice, e indexar
    /// dos colecciones colgadas del mismo upstream.
    pub fn standard() -> Self {
        Self::new().register(1, DocStepKind::PageChunk)
                   .register(2, DocStepKind::Outline)
                   .register(3, DocStepKind::SearchIndex)
                   .register(4, DocStepKind::SearchIndex)
    }
}

impl Default for DocStepFactory {
    fn default() -> Self {
        Self::standard()
    }
}

fn params_or_default<P: serde::de::DeserializeOwned + Default>(params: Option<&Value>) -> P {
    params.and_then(|v| serde_json::from_value(v.clone()).ok()).unwrap_or_default()
}

impl StepFactory for DocStepFactory {
    fn build(&self, ordinal: u32, params: Option<&Value>) -> Result<Box<dyn TransformStep>, PipelineError> {
        let kind = self.registry.get(&ordinal).ok_or(PipelineError::UnknownOrdinal(ordinal))?;
        let step: Box<dyn TransformStep> = match kind {
            DocStepKind::PageChunk => {
                Box::new(PageChunkStep::new(ordinal, params_or_default::<ChunkParams>(params)))
            }
            DocStepKind::Outline => Box::new(OutlineStep::new(ordinal)),
            DocStepKind::SearchIndex => {
                Box::new(SearchIndexStep::new(ordinal, params_or_default::<IndexParams>(params)))
            }
        };
        Ok(step)
    }
}
