use std::io::{self, BufRead};

use dialoguer::theme::ColorfulTheme;
use shell_words::split;
use tracing::debug;

use crate::cli::{chart, io as cli_io, output, CliError};
use crate::config::Settings;
use crate::core::{ExpensePatch, ExpenseTracker};
use crate::errors::TrackerError;
use crate::ledger::{Granularity, TimeSummary};
use crate::storage::{JsonStore, LoadOutcome};

const MAIN_MENU: [&str; 6] = [
    "Add Expense",
    "View Summary",
    "Edit Expense",
    "Delete Expense",
    "Graphical Summary",
    "Exit",
];

const SUMMARY_MENU: [&str; 3] = [
    "Total spending for a specific category",
    "Total overall spending",
    "Spending over time",
];

const PERIOD_MENU: [&str; 3] = ["Daily", "Monthly", "Weekly"];

enum LoopControl {
    Continue,
    Exit,
}

/// Entry point for the expense tracker console. Runs interactively unless
/// script mode is requested through the environment.
pub fn run_cli() -> Result<(), CliError> {
    let settings = Settings::from_env();
    let store = JsonStore::new(&settings.store_file);
    let (mut tracker, outcome) = ExpenseTracker::open(Box::new(store))?;
    report_load(&outcome, &settings);

    if settings.script_mode {
        run_script(&mut tracker)
    } else {
        run_interactive(&mut tracker)
    }
}

fn report_load(outcome: &LoadOutcome, settings: &Settings) {
    match outcome {
        LoadOutcome::Loaded { count, skipped } => {
            output::info(format!(
                "Loaded {} expenses from {}.",
                count,
                settings.store_file.display()
            ));
            if *skipped > 0 {
                output::warning(format!("Skipped {skipped} malformed entries."));
            }
        }
        LoadOutcome::Missing => output::info("No previous data found. Starting fresh."),
        LoadOutcome::Corrupt => {
            output::warning("Data file is corrupt. Starting with an empty list.")
        }
    }
}

fn run_interactive(tracker: &mut ExpenseTracker) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    loop {
        output::section("Expense Tracker");
        match cli_io::select(&theme, "Choose an action", &MAIN_MENU)? {
            0 => add_flow(tracker, &theme)?,
            1 => summary_flow(tracker, &theme)?,
            2 => edit_flow(tracker, &theme)?,
            3 => delete_flow(tracker, &theme)?,
            4 => chart_flow(tracker),
            _ => {
                output::info("Thank you for using Expense Tracker. Goodbye!");
                break;
            }
        }
    }
    Ok(())
}

fn add_flow(tracker: &mut ExpenseTracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    let amount = cli_io::prompt_text(theme, "Amount")?;
    let category = cli_io::prompt_text(theme, "Category")?;
    let date = cli_io::prompt_text(theme, "Date (YYYY-MM-DD, empty for today)")?;

    match tracker.add_expense(&amount, &category, Some(date.as_str())) {
        Ok(expense) => output::success(format!(
            "Expense of amount {} added successfully in {} category on {}.",
            expense.amount, expense.category, expense.date
        )),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn summary_flow(tracker: &ExpenseTracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    if tracker.ledger().is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    match cli_io::select(theme, "Summary", &SUMMARY_MENU)? {
        0 => {
            let category = cli_io::prompt_text(theme, "Category")?;
            let total = tracker.ledger().total_for_category(category.trim());
            output::info(format!(
                "The total spending in '{}' is: Rs {:.2}",
                category.trim(),
                total
            ));
        }
        1 => {
            output::info(format!(
                "The total overall spending is: Rs {:.2}",
                tracker.ledger().total_overall()
            ));
        }
        _ => {
            let granularity = match cli_io::select(theme, "Period", &PERIOD_MENU)? {
                0 => Granularity::Daily,
                1 => Granularity::Monthly,
                _ => Granularity::Weekly,
            };
            print_time_summary(&tracker.ledger().summarize_over_time(granularity));
        }
    }
    Ok(())
}

fn print_time_summary(summary: &TimeSummary) {
    for date in &summary.skipped {
        output::warning(format!("Skipping invalid date format: {date}"));
    }
    output::info("Spending over time summary:");
    for (period, amount) in &summary.buckets {
        output::info(format!("{period}: Rs {amount:.2}"));
    }
}

fn edit_flow(tracker: &mut ExpenseTracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    if tracker.ledger().is_empty() {
        output::info("No expenses to edit.");
        return Ok(());
    }
    list_expenses(tracker);
    let token = cli_io::prompt_text(theme, "Number of the expense to edit")?;

    let patch = ExpensePatch {
        amount: Some(cli_io::prompt_text(
            theme,
            "New amount (empty to keep current)",
        )?),
        category: Some(cli_io::prompt_text(
            theme,
            "New category (empty to keep current)",
        )?),
        date: Some(cli_io::prompt_text(
            theme,
            "New date (YYYY-MM-DD, empty to keep current)",
        )?),
    };
    if patch.is_empty() {
        output::info("Keeping all fields as they are.");
    }

    match tracker.edit_expense(&token, patch) {
        Ok(outcome) => {
            for rejection in &outcome.rejections {
                output::warning(format!("{rejection}. Keeping previous."));
            }
            output::success("Expense updated successfully.");
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn delete_flow(tracker: &mut ExpenseTracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    if tracker.ledger().is_empty() {
        output::info("No expenses to delete.");
        return Ok(());
    }
    list_expenses(tracker);
    let token = cli_io::prompt_text(theme, "Number of the expense to delete")?;
    match tracker.delete_expense(&token) {
        Ok(removed) => output::success(format!("Deleted: {removed}")),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn chart_flow(tracker: &ExpenseTracker) {
    if tracker.ledger().is_empty() {
        output::info("No data for graphical summary.");
        return;
    }
    output::section("Expense Distribution by Category");
    print!("{}", chart::render(&tracker.ledger().category_totals()));
}

fn list_expenses(tracker: &ExpenseTracker) {
    for (index, expense) in tracker.ledger().expenses().iter().enumerate() {
        output::info(format!("{}. {}", index + 1, expense));
    }
}

fn run_script(tracker: &mut ExpenseTracker) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(tracker, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

fn handle_line(tracker: &mut ExpenseTracker, line: &str) -> Result<LoopControl, TrackerError> {
    let tokens = split(line).map_err(|err| TrackerError::InvalidInput(err.to_string()))?;
    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }
    let command = tokens[0].to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
    debug!(%command, "script command");

    match command.as_str() {
        "add" => script_add(tracker, &args)?,
        "list" => list_expenses(tracker),
        "total" => script_total(tracker, &args),
        "summary" => script_summary(tracker, &args)?,
        "chart" => chart_flow(tracker),
        "delete" => script_delete(tracker, &args)?,
        "edit" => script_edit(tracker, &args)?,
        "exit" => return Ok(LoopControl::Exit),
        other => output::warning(format!("Unknown command `{other}`.")),
    }
    Ok(LoopControl::Continue)
}

fn script_add(tracker: &mut ExpenseTracker, args: &[&str]) -> Result<(), TrackerError> {
    let (amount, category, date) = match args {
        [amount, category] => (*amount, *category, None),
        [amount, category, date] => (*amount, *category, Some(*date)),
        _ => {
            return Err(TrackerError::InvalidInput(
                "usage: add <amount> <category> [date]".into(),
            ))
        }
    };
    let expense = tracker.add_expense(amount, category, date)?;
    output::success(format!(
        "Expense of amount {} added successfully in {} category on {}.",
        expense.amount, expense.category, expense.date
    ));
    Ok(())
}

fn script_total(tracker: &ExpenseTracker, args: &[&str]) {
    match args.first() {
        Some(category) => output::info(format!(
            "The total spending in '{}' is: Rs {:.2}",
            category,
            tracker.ledger().total_for_category(category)
        )),
        None => output::info(format!(
            "The total overall spending is: Rs {:.2}",
            tracker.ledger().total_overall()
        )),
    }
}

fn script_summary(tracker: &ExpenseTracker, args: &[&str]) -> Result<(), TrackerError> {
    let period = args.first().ok_or_else(|| {
        TrackerError::InvalidInput("usage: summary <daily|monthly|weekly>".into())
    })?;
    let granularity: Granularity = period.parse()?;
    print_time_summary(&tracker.ledger().summarize_over_time(granularity));
    Ok(())
}

fn script_delete(tracker: &mut ExpenseTracker, args: &[&str]) -> Result<(), TrackerError> {
    let token = args
        .first()
        .ok_or_else(|| TrackerError::InvalidInput("usage: delete <position>".into()))?;
    let removed = tracker.delete_expense(token)?;
    output::success(format!("Deleted: {removed}"));
    Ok(())
}

fn script_edit(tracker: &mut ExpenseTracker, args: &[&str]) -> Result<(), TrackerError> {
    let (token, fields) = args.split_first().ok_or_else(|| {
        TrackerError::InvalidInput(
            "usage: edit <position> [amount=N] [category=TEXT] [date=YYYY-MM-DD]".into(),
        )
    })?;

    let mut patch = ExpensePatch::default();
    for field in fields {
        match field.split_once('=') {
            Some(("amount", value)) => patch.amount = Some(value.to_string()),
            Some(("category", value)) => patch.category = Some(value.to_string()),
            Some(("date", value)) => patch.date = Some(value.to_string()),
            _ => {
                return Err(TrackerError::InvalidInput(format!(
                    "unknown edit field `{field}`"
                )))
            }
        }
    }

    let outcome = tracker.edit_expense(token, patch)?;
    for rejection in &outcome.rejections {
        output::warning(format!("{rejection}. Keeping previous."));
    }
    output::success("Expense updated successfully.");
    Ok(())
}
