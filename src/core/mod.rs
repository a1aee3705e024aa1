pub mod tracker;

pub use tracker::{EditOutcome, ExpensePatch, ExpenseTracker};
