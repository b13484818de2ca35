//! Steps de demostración para pipelines de documentos de texto.

pub mod chunk;
pub mod index;
pub mod outline;

pub use chunk::{ChunkParams, PageChunkStep};
pub use index::{IndexParams, SearchIndexStep};
pub use outline::OutlineStep;
