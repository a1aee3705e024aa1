use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::TrackerError;

/// Canonical textual form for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true when `text` denotes a real calendar date in `YYYY-MM-DD`
/// form. Impossible dates (Feb 30, month 13) are rejected; leap days are
/// accepted only in leap years.
pub fn is_valid_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
}

/// A single recorded expense.
///
/// The date keeps its textual form: entries loaded from hand-edited files may
/// carry dates that no longer validate, and those records still belong to the
/// ledger. Time-bucketed summaries skip them and report the skip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl Expense {
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// The `{amount, category, date}` mapping stored on disk. Built by hand
    /// so the field order in the file stays stable.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert("amount".into(), self.amount.into());
        mapping.insert("category".into(), self.category.clone().into());
        mapping.insert("date".into(), self.date.clone().into());
        mapping
    }

    /// Rebuilds a record from a stored mapping. Entries missing a required
    /// field, or carrying one with an unusable type, are malformed.
    pub fn from_mapping(mapping: Map<String, Value>) -> Result<Self, TrackerError> {
        serde_json::from_value(Value::Object(mapping))
            .map_err(|err| TrackerError::MalformedRecord(err.to_string()))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category: {}, Amount: {}, Date: {}",
            self.category, self.amount, self.date
        )
    }
}
