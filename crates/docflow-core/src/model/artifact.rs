//! Artifact: unidad de contenido derivado con linaje.
//!
//! Un `Artifact` representa un documento producido (o el documento fuente
//! original) dentro de una corrida del pipeline:
//! - `name` es la clave primaria dentro de la corrida; se deriva de forma
//!   determinista (ver `naming::derived_name`), por lo que re-ejecutar el
//!   mismo paso reutiliza el mismo nombre lógico.
//! - `producer` identifica al step que lo creó (su label estático); `None`
//!   marca al artifact fuente.
//! - `source_name` / `source_scenario` son la referencia débil al artifact
//!   padre y al escenario dueño. Todo artifact no-fuente lleva exactamente
//!   un par, formando un árbol (el fan-out permite que varios artifacts
//!   compartan padre).
//! - `created_at` es metadato; no participa en la identidad.
//!
//! El protocolo de ejecución crea el artifact *antes* de correr el step,
//! para capturar la procedencia intencional aunque el step falle. Después
//! de creado no se muta; el resultado (éxito/fallo) lo registra el ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub description: Option<String>,
    pub producer: Option<String>,
    pub source_name: Option<String>,
    pub source_scenario: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    /// Crea el artifact fuente de una corrida (sin productor ni linaje).
    pub fn origin(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               description: None,
               producer: None,
               source_name: None,
               source_scenario: None,
               created_at: Utc::now() }
    }

    /// Crea un artifact derivado: productor + referencia al padre.
    pub fn derived(name: impl Into<String>, producer: &str, source: &Artifact, scenario_id: Uuid) -> Self {
        Self { name: name.into(),
               description: None,
               producer: Some(producer.to_string()),
               source_name: Some(source.name.clone()),
               source_scenario: Some(scenario_id),
               created_at: Utc::now() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `true` si este artifact es la fuente original de la corrida.
    pub fn is_origin(&self) -> bool {
        self.producer.is_none()
    }
}
