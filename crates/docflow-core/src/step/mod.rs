//! Definiciones relacionadas a Steps.

mod definition;

pub use definition::TransformStep;
