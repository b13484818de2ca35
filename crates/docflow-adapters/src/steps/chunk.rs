//! PageChunkStep: particiona un documento de texto en páginas.
//!
//! - Input: texto UTF-8 crudo.
//! - Output: JSON `{"chunks": [<texto página>, ...]}` con páginas de
//!   `lines_per_chunk` líneas cada una (la última puede quedar corta).

use docflow_core::{PipelineError, TransformStep};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Serialize, Deserialize)]
pub struct ChunkParams {
    pub lines_per_chunk: usize,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self { lines_per_chunk: 10 }
    }
}

pub struct PageChunkStep {
    ordinal: u32,
    params: ChunkParams,
}

impl PageChunkStep {
    pub fn new(ordinal: u32, params: ChunkParams) -> Self {
        Self { ordinal, params }
    }
}

impl TransformStep for PageChunkStep {
    fn label(&self) -> &'static str {
        "page_chunk"
    }

    fn ordinal(&self) -> u32 {
        self.ordinal
    }

    fn output_format(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document partitioned into page chunks"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let text = std::str::from_utf8(input)
            .map_err(|_| PipelineError::StepExecution("page_chunk: input is not valid UTF-8".into()))?;
        let per_chunk = self.params.lines_per_chunk.max(1);

        let lines: Vec<&str> = text.lines().collect();
        let chunks: Vec<String> = lines.chunks(per_chunk).map(|c| c.join("\n")).collect();

        let payload = json!({ "chunks": chunks });
        serde_json::to_vec(&payload).map_err(|e| PipelineError::StepExecution(format!("page_chunk: {e}")))
    }
}
