pub mod expense;

pub use expense::{is_valid_date, Expense, DATE_FORMAT};
