//! Plan de ruteo del pipeline.
//!
//! La topología queda fija al definir el pipeline, nunca se descubre en
//! runtime. Cada ruta declara de dónde toma su contenido:
//! - `Previous`: el output del step declarado inmediatamente antes (cadena
//!   lineal, el default). Para la primera ruta equivale a `Origin`.
//! - `Step(n)`: el output de un step anterior concreto. Varias rutas pueden
//!   nombrar el mismo upstream (fan-out); el orquestador reutiliza los
//!   bytes ya producidos, jamás re-ejecuta el upstream.
//! - `Origin`: el contenido del artifact fuente de la corrida.

use serde_json::Value;

use crate::errors::PipelineError;

/// De dónde toma el contenido una ruta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Origin,
    Previous,
    Step(u32),
}

/// Una entrada del plan: qué step corre y qué contenido consume.
#[derive(Debug, Clone)]
pub struct StepRoute {
    pub ordinal: u32,
    pub feed: ContentSource,
    /// Parámetros opacos para la fábrica de steps.
    pub params: Option<Value>,
}

/// Definición inmutable del pipeline: rutas en orden de ejecución más el
/// step terminal designado (por defecto, el último declarado; un pipeline
/// con fan-out puede designar cualquier rama).
#[derive(Debug, Clone, Default)]
pub struct PipelineDefinition {
    routes: Vec<StepRoute>,
    terminal: Option<u32>,
}

impl PipelineDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un step encadenado al anterior (feed `Previous`).
    pub fn step(self, ordinal: u32) -> Self {
        self.route(StepRoute { ordinal,
                               feed: ContentSource::Previous,
                               params: None })
    }

    /// Agrega un step encadenado al anterior, con parámetros.
    pub fn step_with_params(self, ordinal: u32, params: Value) -> Self {
        self.route(StepRoute { ordinal,
                               feed: ContentSource::Previous,
                               params: Some(params) })
    }

    /// Agrega un step que consume el output de un upstream concreto
    /// (fan-out si varios steps nombran el mismo upstream).
    pub fn step_from(self, ordinal: u32, upstream: u32) -> Self {
        self.route(StepRoute { ordinal,
                               feed: ContentSource::Step(upstream),
                               params: None })
    }

    /// Agrega una ruta arbitraria.
    pub fn route(mut self, route: StepRoute) -> Self {
        self.routes.push(route);
        self
    }

    /// Designa el step terminal (debe estar declarado en el plan).
    pub fn terminal(mut self, ordinal: u32) -> Self {
        self.terminal = Some(ordinal);
        self
    }

    pub fn routes(&self) -> &[StepRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Ordinal terminal efectivo: el designado, o el último declarado.
    pub fn terminal_ordinal(&self) -> Option<u32> {
        self.terminal.or_else(|| self.routes.last().map(|r| r.ordinal))
    }

    /// Valida el plan completo. Toda violación es un error de
    /// configuración: el pipeline no arranca.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.routes.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }

        let mut seen: Vec<u32> = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            if seen.contains(&route.ordinal) {
                return Err(PipelineError::DuplicateOrdinal(route.ordinal));
            }
            if let ContentSource::Step(upstream) = route.feed {
                if !seen.contains(&upstream) {
                    return Err(PipelineError::InvalidRoute(route.ordinal, upstream));
                }
            }
            seen.push(route.ordinal);
        }

        if let Some(t) = self.terminal {
            if !seen.contains(&t) {
                return Err(PipelineError::UnknownTerminal(t));
            }
        }

        Ok(())
    }
}
