//! Acceso a contenido persistido (colaborador externo).
//!
//! El core sólo lee: resuelve el contenido del artifact fuente cuando el
//! protocolo de ejecución no recibe input explícito. La escritura de
//! contenido es asunto del sistema anfitrión.

use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::PipelineError;

pub trait ContentStore {
    /// Devuelve el contenido persistido de un artifact dentro de un
    /// escenario, o `PipelineError::ContentNotFound`.
    fn get_content(&self, artifact_name: &str, scenario_id: Uuid) -> Result<Vec<u8>, PipelineError>;
}

/// Store de referencia en memoria, clave `(escenario, nombre)`.
#[derive(Default)]
pub struct InMemoryContentStore {
    inner: HashMap<(Uuid, String), Vec<u8>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scenario_id: Uuid, artifact_name: impl Into<String>, content: Vec<u8>) {
        self.inner.insert((scenario_id, artifact_name.into()), content);
    }
}

impl ContentStore for InMemoryContentStore {
    fn get_content(&self, artifact_name: &str, scenario_id: Uuid) -> Result<Vec<u8>, PipelineError> {
        self.inner
            .get(&(scenario_id, artifact_name.to_string()))
            .cloned()
            .ok_or_else(|| PipelineError::ContentNotFound(artifact_name.to_string()))
    }
}
