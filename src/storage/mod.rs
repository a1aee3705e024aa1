pub mod json_backend;

use crate::errors::TrackerError;
use crate::ledger::Ledger;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// What a load found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store parsed; `skipped` entries were malformed and dropped.
    Loaded { count: usize, skipped: usize },
    /// No store file yet. A normal first-run status, not a failure.
    Missing,
    /// The store file exists but is not a readable record list. The ledger
    /// starts empty; the file is left in place untouched.
    Corrupt,
}

/// Abstraction over persistence backends capable of storing the expense
/// ledger. Single-writer by design: nothing here coordinates concurrent
/// processes pointed at the same store.
pub trait ExpenseStore {
    /// Rewrites the full ledger, replacing whatever was stored before.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Reads the stored ledger, recovering to an empty one where possible.
    fn load(&self) -> Result<(Ledger, LoadOutcome)>;
}

pub use json_backend::{JsonStore, DEFAULT_STORE_FILE};
