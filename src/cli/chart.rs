use std::fmt::Write as _;

use colored::Colorize;

use crate::ledger::CategoryTotal;

const MAX_BAR_WIDTH: usize = 40;

/// Renders category totals as a horizontal bar chart, one row per category.
/// Bars scale against the largest total; labels and amounts stay aligned.
/// Pure string rendering so it is testable without a terminal.
pub fn render(totals: &[CategoryTotal]) -> String {
    let mut out = String::new();
    let label_width = totals
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_total = totals
        .iter()
        .map(|entry| entry.total)
        .fold(0.0_f64, f64::max);

    for entry in totals {
        let width = if max_total > 0.0 {
            ((entry.total / max_total) * MAX_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "\u{2588}".repeat(width);
        let _ = writeln!(
            out,
            "{:<label_width$}  {:>10.2}  {}",
            entry.label,
            entry.total,
            bar.green()
        );
    }
    out
}
