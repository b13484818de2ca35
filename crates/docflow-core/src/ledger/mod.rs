//! Ledger de procedencia y trait `ProvenanceLedger`.

mod store;
mod types;

pub use store::{InMemoryLedger, ProvenanceLedger};
pub use types::{LedgerEntry, LedgerRecord};
