use chrono::Local;
use tracing::{debug, info};

use crate::domain::{is_valid_date, Expense, DATE_FORMAT};
use crate::errors::{Result, TrackerError};
use crate::ledger::Ledger;
use crate::storage::{ExpenseStore, LoadOutcome};

/// Replacement fields for an edit, as raw user text. `None` or blank text
/// keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct ExpensePatch {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl ExpensePatch {
    /// True when no field carries replacement text.
    pub fn is_empty(&self) -> bool {
        normalized(self.amount.as_deref()).is_none()
            && normalized(self.category.as_deref()).is_none()
            && normalized(self.date.as_deref()).is_none()
    }
}

/// What an edit actually did. Field-level failures do not abort the edit;
/// they are collected here while the remaining fields still apply.
#[derive(Debug, Default)]
pub struct EditOutcome {
    pub amount_updated: bool,
    pub category_updated: bool,
    pub date_updated: bool,
    pub rejections: Vec<TrackerError>,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        self.amount_updated || self.category_updated || self.date_updated
    }
}

/// Owns the in-memory ledger and the storage backend behind it.
///
/// Every mutation rewrites the persisted store before returning; there is no
/// separate save step and no batching. Single-writer by assumption: the
/// tracker is not built for concurrent processes sharing one store file.
pub struct ExpenseTracker {
    ledger: Ledger,
    store: Box<dyn ExpenseStore>,
}

impl ExpenseTracker {
    /// Opens the tracker on whatever the backend currently holds. A missing
    /// or corrupt store resolves to an empty ledger, reported via the
    /// returned outcome.
    pub fn open(store: Box<dyn ExpenseStore>) -> Result<(Self, LoadOutcome)> {
        let (ledger, outcome) = store.load()?;
        info!(count = ledger.len(), ?outcome, "expense tracker opened");
        Ok((Self { ledger, store }, outcome))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Records a new expense from raw input. The amount must parse as a
    /// number; a blank date defaults to today; a supplied date must be a
    /// real `YYYY-MM-DD` calendar date or the whole add is rejected.
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        date: Option<&str>,
    ) -> Result<Expense> {
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| TrackerError::InvalidAmount(amount.trim().to_string()))?;
        let date = match normalized(date) {
            Some(text) => {
                if !is_valid_date(&text) {
                    return Err(TrackerError::InvalidDate(text));
                }
                text
            }
            None => today(),
        };
        let expense = Expense::new(amount, category.trim(), date);
        self.ledger.push(expense.clone());
        self.persist()?;
        debug!(category = %expense.category, amount = expense.amount, "expense recorded");
        Ok(expense)
    }

    /// Deletes the expense at the 1-based position given by `token` and
    /// returns it.
    pub fn delete_expense(&mut self, token: &str) -> Result<Expense> {
        let position = parse_selection(token)?;
        let index = self.resolve_position(position)?;
        let removed = match self.ledger.remove(index) {
            Some(expense) => expense,
            None => {
                return Err(TrackerError::IndexOutOfRange {
                    position,
                    len: self.ledger.len(),
                })
            }
        };
        self.persist()?;
        debug!(position, "expense deleted");
        Ok(removed)
    }

    /// Applies `patch` to the expense at the 1-based position given by
    /// `token`. A non-parsing amount or invalid date keeps the previous
    /// value and lands in the outcome's rejections; the other fields still
    /// apply. The store is rewritten even when nothing changed.
    pub fn edit_expense(&mut self, token: &str, patch: ExpensePatch) -> Result<EditOutcome> {
        let position = parse_selection(token)?;
        let index = self.resolve_position(position)?;
        let len = self.ledger.len();
        let mut outcome = EditOutcome::default();

        {
            let expense = self
                .ledger
                .get_mut(index)
                .ok_or(TrackerError::IndexOutOfRange { position, len })?;

            if let Some(text) = normalized(patch.amount.as_deref()) {
                match text.parse::<f64>() {
                    Ok(amount) => {
                        expense.amount = amount;
                        outcome.amount_updated = true;
                    }
                    Err(_) => outcome.rejections.push(TrackerError::InvalidAmount(text)),
                }
            }
            if let Some(text) = normalized(patch.category.as_deref()) {
                expense.category = text;
                outcome.category_updated = true;
            }
            if let Some(text) = normalized(patch.date.as_deref()) {
                if is_valid_date(&text) {
                    expense.date = text;
                    outcome.date_updated = true;
                } else {
                    outcome.rejections.push(TrackerError::InvalidDate(text));
                }
            }
        }

        self.persist()?;
        debug!(position, changed = outcome.changed(), "expense edited");
        Ok(outcome)
    }

    fn resolve_position(&self, position: i64) -> Result<usize> {
        let len = self.ledger.len();
        if position < 1 || position as usize > len {
            return Err(TrackerError::IndexOutOfRange { position, len });
        }
        Ok(position as usize - 1)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.ledger)
    }
}

fn normalized(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_selection(token: &str) -> Result<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("`{}` is not a number", token.trim())))
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
