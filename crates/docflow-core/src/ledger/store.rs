use chrono::Utc;

use super::{LedgerEntry, LedgerRecord};
use crate::hashing::hash_bytes;
use crate::model::Artifact;

/// Ledger de procedencia append-only.
///
/// Desde la perspectiva del core ambas operaciones son fire-and-forget: el
/// motor no inspecciona su resultado. Una implementación durable maneja su
/// propia resiliencia internamente.
pub trait ProvenanceLedger {
    /// Registra un artifact producido junto a su contenido.
    fn record_success(&mut self, artifact: &Artifact, content: &[u8]);
    /// Registra un artifact fallido con su mensaje de error.
    fn record_failure(&mut self, artifact: &Artifact, message: &str);
}

/// Implementación de referencia en memoria, con helpers de inspección.
#[derive(Default)]
pub struct InMemoryLedger {
    entries: Vec<LedgerEntry>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn successes(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(|e| e.record.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(|e| !e.record.is_success())
    }

    /// Último registro para un nombre de artifact, si existe.
    pub fn find(&self, artifact_name: &str) -> Option<&LedgerEntry> {
        self.entries.iter().rev().find(|e| e.record.artifact().name == artifact_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn append(&mut self, record: LedgerRecord) {
        let seq = self.entries.len() as u64;
        self.entries.push(LedgerEntry { seq,
                                        record,
                                        ts: Utc::now() });
    }
}

impl ProvenanceLedger for InMemoryLedger {
    fn record_success(&mut self, artifact: &Artifact, content: &[u8]) {
        self.append(LedgerRecord::Produced { artifact: artifact.clone(),
                                             content_hash: hash_bytes(content),
                                             size: content.len() });
    }

    fn record_failure(&mut self, artifact: &Artifact, message: &str) {
        self.append(LedgerRecord::Failed { artifact: artifact.clone(),
                                           message: message.to_string() });
    }
}
