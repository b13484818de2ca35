//! Engine module: orquestador secuencial del pipeline.

pub mod core;

pub use core::PipelineEngine;
