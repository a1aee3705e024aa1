use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::domain::DATE_FORMAT;
use crate::errors::TrackerError;

use super::Ledger;

/// Time resolution for spending-over-time summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Monthly,
    Weekly,
}

impl Granularity {
    /// Bucket key for a record whose stored date text parsed to `date`.
    fn bucket_key(self, raw: &str, date: NaiveDate) -> String {
        match self {
            Granularity::Daily => raw.to_string(),
            Granularity::Monthly => date.format("%Y-%m").to_string(),
            Granularity::Weekly => format!("{}-W{:02}", date.year(), date.iso_week().week()),
        }
    }
}

impl FromStr for Granularity {
    type Err = TrackerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "monthly" => Ok(Granularity::Monthly),
            "weekly" => Ok(Granularity::Weekly),
            other => Err(TrackerError::InvalidInput(format!(
                "unknown period `{other}`, expected daily, monthly or weekly"
            ))),
        }
    }
}

/// Spending grouped by time bucket.
///
/// Bucket keys sort ascending, which is also chronological for the key
/// formats in use. Records whose stored date no longer validates are skipped
/// and their date texts collected in `skipped` for reporting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimeSummary {
    pub buckets: BTreeMap<String, f64>,
    pub skipped: Vec<String>,
}

/// Per-category spending, the shape handed to chart rendering. The label
/// keeps the casing of the first record seen for that category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

impl Ledger {
    /// Groups spending into daily, monthly, or ISO-week buckets.
    pub fn summarize_over_time(&self, granularity: Granularity) -> TimeSummary {
        let mut summary = TimeSummary::default();
        for expense in self.expenses() {
            let date = match NaiveDate::parse_from_str(&expense.date, DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    summary.skipped.push(expense.date.clone());
                    continue;
                }
            };
            let key = granularity.bucket_key(&expense.date, date);
            *summary.buckets.entry(key).or_insert(0.0) += expense.amount;
        }
        summary
    }

    /// Totals per category, grouped case-insensitively in first-seen order.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in self.expenses() {
            let needle = expense.category.to_lowercase();
            match totals
                .iter_mut()
                .find(|entry| entry.label.to_lowercase() == needle)
            {
                Some(entry) => entry.total += expense.amount,
                None => totals.push(CategoryTotal {
                    label: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Expense;

    fn dated(amount: f64, date: &str) -> Expense {
        Expense::new(amount, "Misc", date)
    }

    #[test]
    fn monthly_buckets_sum_and_sort_ascending() {
        let ledger = Ledger::from_expenses(vec![
            dated(100.0, "2024-01-01"),
            dated(50.0, "2024-01-15"),
            dated(25.0, "2024-02-01"),
        ]);
        let summary = ledger.summarize_over_time(Granularity::Monthly);
        let buckets: Vec<(&str, f64)> = summary
            .buckets
            .iter()
            .map(|(key, total)| (key.as_str(), *total))
            .collect();
        assert_eq!(buckets, [("2024-01", 150.0), ("2024-02", 25.0)]);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn daily_buckets_use_the_stored_date_text() {
        let ledger = Ledger::from_expenses(vec![
            dated(10.0, "2024-01-01"),
            dated(5.0, "2024-01-01"),
            dated(1.0, "2024-01-02"),
        ]);
        let summary = ledger.summarize_over_time(Granularity::Daily);
        assert_eq!(summary.buckets.get("2024-01-01"), Some(&15.0));
        assert_eq!(summary.buckets.get("2024-01-02"), Some(&1.0));
    }

    #[test]
    fn weekly_bucket_uses_zero_padded_iso_week() {
        let ledger = Ledger::from_expenses(vec![dated(30.0, "2024-01-01")]);
        let summary = ledger.summarize_over_time(Granularity::Weekly);
        assert_eq!(summary.buckets.get("2024-W01"), Some(&30.0));
    }

    #[test]
    fn invalid_dates_are_skipped_and_reported() {
        let ledger = Ledger::from_expenses(vec![
            dated(10.0, "2024-01-01"),
            dated(99.0, "2024-02-30"),
            dated(99.0, "soon"),
        ]);
        let summary = ledger.summarize_over_time(Granularity::Daily);
        assert_eq!(summary.buckets.len(), 1);
        assert_eq!(summary.skipped, ["2024-02-30", "soon"]);
    }

    #[test]
    fn category_totals_group_case_insensitively_keeping_first_seen_casing() {
        let ledger = Ledger::from_expenses(vec![
            Expense::new(10.0, "Food", "2024-01-01"),
            Expense::new(5.0, "FOOD", "2024-01-02"),
            Expense::new(2.0, "Travel", "2024-01-03"),
        ]);
        let totals = ledger.category_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].label, "Food");
        assert_eq!(totals[0].total, 15.0);
        assert_eq!(totals[1].label, "Travel");
        assert_eq!(totals[1].total, 2.0);
    }

    #[test]
    fn granularity_parses_from_text() {
        assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert_eq!(
            " Monthly ".parse::<Granularity>().unwrap(),
            Granularity::Monthly
        );
        assert!("yearly".parse::<Granularity>().is_err());
    }
}
