//! Registros del ledger de procedencia.
//!
//! Rol en el pipeline:
//! - Cada invocación del protocolo de ejecución reporta exactamente un
//!   registro al ledger: `Produced` en éxito, `Failed` en fallo. No hay
//!   descartes silenciosos.
//! - El registro lleva el `Artifact` completo (con su linaje), por lo que
//!   el ledger basta para reconstruir el árbol de procedencia de una
//!   corrida.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Artifact;

/// Desenlace registrado para un artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LedgerRecord {
    /// El step produjo contenido. `content_hash` es el hash del payload
    /// crudo; `size` su longitud en bytes.
    Produced { artifact: Artifact, content_hash: String, size: usize },
    /// El step falló. El artifact queda registrado igualmente, marcado con
    /// el mensaje de error.
    Failed { artifact: Artifact, message: String },
}

impl LedgerRecord {
    pub fn artifact(&self) -> &Artifact {
        match self {
            LedgerRecord::Produced { artifact, .. } => artifact,
            LedgerRecord::Failed { artifact, .. } => artifact,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LedgerRecord::Produced { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub seq: u64, // asignado por el ledger in-memory (orden append)
    pub record: LedgerRecord,
    pub ts: DateTime<Utc>, // metadato (no participa en el hash)
}
