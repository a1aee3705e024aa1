use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(store_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").expect("binary builds");
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_FILE", store_file);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("expenses.json");
    let input = "add 12.50 Food 2024-01-01\n\
                 add 5 Travel 2024-01-15\n\
                 total Food\n\
                 summary monthly\n\
                 exit\n";

    script_command(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("No previous data found. Starting fresh."))
        .stdout(contains("The total spending in 'Food' is: Rs 12.50"))
        .stdout(contains("2024-01: Rs 17.50"));

    let json = std::fs::read_to_string(&file).unwrap();
    assert!(json.contains("\"Food\""));
    assert!(json.contains("\"Travel\""));
}

#[test]
fn script_mode_reports_errors_and_keeps_going() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("expenses.json");
    let input = "add lots Food\n\
                 add 3 Coffee 2024-01-01\n\
                 delete 7\n\
                 total\n\
                 exit\n";

    script_command(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Invalid amount `lots`"))
        .stdout(contains("Selection 7 is out of range"))
        .stdout(contains("The total overall spending is: Rs 3.00"));
}

#[test]
fn script_mode_edits_in_place() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("expenses.json");
    let input = "add 10 Food 2024-01-01\n\
                 edit 1 category=Groceries date=2024-02-02\n\
                 list\n\
                 exit\n";

    script_command(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense updated successfully."))
        .stdout(contains(
            "1. Category: Groceries, Amount: 10, Date: 2024-02-02",
        ));
}

#[test]
fn corrupt_store_starts_fresh_with_a_warning() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("expenses.json");
    std::fs::write(&file, "{broken").unwrap();

    script_command(&file)
        .write_stdin("total\nexit\n")
        .assert()
        .success()
        .stdout(contains("Data file is corrupt. Starting with an empty list."))
        .stdout(contains("The total overall spending is: Rs 0.00"));
}

#[test]
fn chart_renders_scaled_bars() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("expenses.json");
    let input = "add 100 Food 2024-01-01\n\
                 add 50 Travel 2024-01-02\n\
                 chart\n\
                 exit\n";

    script_command(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Expense Distribution by Category"))
        .stdout(contains("\u{2588}"));
}
