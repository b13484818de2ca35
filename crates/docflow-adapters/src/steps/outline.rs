//! OutlineStep: extrae el índice de títulos de un documento particionado.
//!
//! - Input: el JSON de `PageChunkStep` (`{"chunks": [...]}`).
//! - Output: JSON `{"outline": [{"title": ..., "chunk": <índice>}, ...]}`
//!   con una entrada por línea de título (prefijo `#`).

use docflow_core::{PipelineError, TransformStep};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct ChunkedDocument {
    chunks: Vec<String>,
}

pub struct OutlineStep {
    ordinal: u32,
}

impl OutlineStep {
    pub fn new(ordinal: u32) -> Self {
        Self { ordinal }
    }
}

impl TransformStep for OutlineStep {
    fn label(&self) -> &'static str {
        "outline"
    }

    fn ordinal(&self) -> u32 {
        self.ordinal
    }

    fn output_format(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Heading outline extracted from chunked document"
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let doc: ChunkedDocument = serde_json::from_slice(input)
            .map_err(|e| PipelineError::StepExecution(format!("outline: input is not chunked-document JSON: {e}")))?;

        let mut outline = Vec::new();
        for (idx, chunk) in doc.chunks.iter().enumerate() {
            for line in chunk.lines() {
                let trimmed = line.trim_start();
                if let Some(title) = trimmed.strip_prefix('#') {
                    outline.push(json!({
                        "title": title.trim_start_matches('#').trim(),
                        "chunk": idx,
                    }));
                }
            }
        }

        let payload = json!({ "outline": outline });
        serde_json::to_vec(&payload).map_err(|e| PipelineError::StepExecution(format!("outline: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_heading_lines_across_chunks() {
        let step = OutlineStep::new(2);
        let input = serde_json::to_vec(&json!({
            "chunks": ["# Intro\nbody", "text\n## Details\nmore"]
        })).expect("encode input");

        let out = step.transform(&input).expect("outline ok");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json out");
        assert_eq!(value["outline"],
                   json!([{"title": "Intro", "chunk": 0}, {"title": "Details", "chunk": 1}]));
    }

    #[test]
    fn malformed_input_is_a_step_failure() {
        let step = OutlineStep::new(2);
        let err = step.transform(b"not json").expect_err("malformed");
        assert!(matches!(err, PipelineError::StepExecution(_)));
    }
}
