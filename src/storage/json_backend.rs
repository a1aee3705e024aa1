use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Expense;
use crate::errors::TrackerError;
use crate::ledger::Ledger;

use super::{ExpenseStore, LoadOutcome, Result};

/// Default file name for the persisted ledger.
pub const DEFAULT_STORE_FILE: &str = "expenses.json";

/// Flat-file JSON backend.
///
/// The whole ledger is rewritten on every save. The write is a plain
/// overwrite with no atomic-rename or fsync guarantee; a crash mid-write can
/// leave a truncated file, which the next load reports as a corrupt store
/// and recovers from with an empty ledger.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<Value>> {
        let data = fs::read_to_string(&self.path)?;
        let parsed: Value = serde_json::from_str(&data)
            .map_err(|err| TrackerError::CorruptStore(err.to_string()))?;
        match parsed {
            Value::Array(entries) => Ok(entries),
            _ => Err(TrackerError::CorruptStore(
                "expected a top-level list of records".into(),
            )),
        }
    }
}

impl ExpenseStore for JsonStore {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let entries: Vec<Value> = ledger
            .expenses()
            .iter()
            .map(|expense| Value::Object(expense.to_mapping()))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        debug!(count = ledger.len(), path = %self.path.display(), "ledger saved");
        Ok(())
    }

    fn load(&self) -> Result<(Ledger, LoadOutcome)> {
        if !self.path.exists() {
            return Ok((Ledger::new(), LoadOutcome::Missing));
        }
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(TrackerError::CorruptStore(reason)) => {
                warn!(path = %self.path.display(), %reason, "expense store unreadable");
                return Ok((Ledger::new(), LoadOutcome::Corrupt));
            }
            Err(err) => return Err(err),
        };

        let mut ledger = Ledger::new();
        let mut skipped = 0usize;
        for entry in entries {
            let mapping = match entry {
                Value::Object(mapping) => mapping,
                other => {
                    warn!(%other, "skipping non-record store entry");
                    skipped += 1;
                    continue;
                }
            };
            match Expense::from_mapping(mapping) {
                Ok(expense) => ledger.push(expense),
                Err(err) => {
                    warn!(%err, "skipping malformed expense entry");
                    skipped += 1;
                }
            }
        }
        let count = ledger.len();
        debug!(count, skipped, path = %self.path.display(), "ledger loaded");
        Ok((ledger, LoadOutcome::Loaded { count, skipped }))
    }
}
