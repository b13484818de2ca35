//! Contexto de escenario.
//!
//! El id de escenario se pasa explícitamente a través del orquestador y del
//! protocolo de ejecución; nunca vive como estado ambiente del proceso. El
//! core no lo muta.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioCtx {
    pub id: Uuid,
}

impl ScenarioCtx {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    /// Escenario efímero con id aleatorio (útil en tests y demos).
    pub fn ephemeral() -> Self {
        Self { id: Uuid::new_v4() }
    }
}
