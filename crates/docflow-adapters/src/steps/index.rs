//! SearchIndexStep: empaqueta contenido como documento de índice.
//!
//! Simula el sink hacia un índice de búsqueda: no llama a ningún servicio,
//! sólo normaliza el contenido en un documento auto-descriptivo que un
//! indexador externo podría consumir. Dos instancias con colecciones
//! distintas suelen colgarse del mismo upstream (fan-out).

use docflow_core::{PipelineError, TransformStep};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Serialize, Deserialize)]
pub struct IndexParams {
    pub collection: String,
}

impl Default for IndexParams {
    fn default() -> Self {
        Self { collection: "documents".to_string() }
    }
}

pub struct SearchIndexStep {
    ordinal: u32,
    params: IndexParams,
}

impl SearchIndexStep {
    pub fn new(ordinal: u32, params: IndexParams) -> Self {
        Self { ordinal, params }
    }
}

impl TransformStep for SearchIndexStep {
    fn label(&self) -> &'static str {
        "search_index"
    }

    fn ordinal(&self) -> u32 {
        self.ordinal
    }

    fn output_format(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Content packaged as a search-index document"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let text = std::str::from_utf8(input)
            .map_err(|_| PipelineError::StepExecution("search_index: input is not valid UTF-8".into()))?;

        // Si el input ya es JSON lo embebemos tal cual; texto plano va como string.
        let document = serde_json::from_str::<serde_json::Value>(text).unwrap_or_else(|_| json!(text));

        let payload = json!({
            "collection": self.params.collection,
            "document": document,
            "size_bytes": input.len(),
        });
        serde_json::to_vec(&payload).map_err(|e| PipelineError::StepExecution(format!("search_index: {e}")))
    }
}
