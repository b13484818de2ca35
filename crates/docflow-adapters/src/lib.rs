//! docflow-adapters: steps concretos de ejemplo sobre el core neutral.
//!
//! Este crate provee:
//! - Steps de demostración para documentos de texto: `PageChunkStep`
//!   (particiona en páginas), `OutlineStep` (extrae el índice de títulos) y
//!   `SearchIndexStep` (empaqueta contenido como documento de índice).
//! - `DocStepFactory`: fábrica que mapea ordinales + parámetros a estos
//!   steps.
//!
//! Nota: el core sólo conoce bytes opacos y el contrato `TransformStep`.
//! La semántica de texto/JSON vive exclusivamente acá.

pub mod factory;
pub mod steps;

pub use factory::{DocStepFactory, DocStepKind};
pub use steps::{OutlineStep, PageChunkStep, SearchIndexStep};
