use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn daybook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env("DAYBOOK_DATA_DIR", dir.path())
        .env_remove("DAYBOOK_LOG");
    cmd
}

fn ledger_file(dir: &TempDir, stem: &str) -> std::path::PathBuf {
    dir.path()
        .join("data")
        .join("ledger")
        .join(format!("{}.txt", stem))
}

#[test]
fn add_then_show_lists_entries_and_totals() {
    let dir = TempDir::new().unwrap();

    daybook(&dir)
        .args(["add", "점심", "8000", "-d", "2024-07-30"])
        .assert()
        .success()
        .stdout(contains("Added."))
        .stdout(contains("점심 : 8,000원"));

    daybook(&dir)
        .args(["add", "커피", "4,500", "-d", "2024-07-30", "-c", "카페"])
        .assert()
        .success();

    daybook(&dir)
        .args(["show", "2024-07-30"])
        .assert()
        .success()
        .stdout(contains("커피 : 4,500원  [카페]"))
        .stdout(contains("Month total: 12,500원"))
        .stdout(contains("12,500원 / 500,000원"));

    let contents = std::fs::read_to_string(ledger_file(&dir, "2024_7_30")).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn delete_by_name_and_amount() {
    let dir = TempDir::new().unwrap();
    for (name, amount) in [("점심", "8000"), ("커피", "4500")] {
        daybook(&dir)
            .args(["add", name, amount, "-d", "2024-07-30"])
            .assert()
            .success();
    }

    daybook(&dir)
        .args(["delete", "점심", "8000", "-d", "2024-07-30"])
        .assert()
        .success()
        .stdout(contains("Deleted."))
        .stdout(contains("점심").not())
        .stdout(contains("Month total: 4,500원"));
}

#[test]
fn delete_by_line_number() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["add", "택시", "12000", "-d", "2024-07-01"])
        .assert()
        .success();

    daybook(&dir)
        .args(["delete", "--index", "1", "-d", "2024-07-01"])
        .assert()
        .success()
        .stdout(contains("No expenses for this day."));
}

#[test]
fn deleting_missing_entry_fails_and_keeps_file() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["add", "커피", "4500", "-d", "2024-07-30"])
        .assert()
        .success();
    let before = std::fs::read_to_string(ledger_file(&dir, "2024_7_30")).unwrap();

    daybook(&dir)
        .args(["delete", "점심", "8000", "-d", "2024-07-30"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    let after = std::fs::read_to_string(ledger_file(&dir, "2024_7_30")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn empty_amount_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();

    daybook(&dir)
        .args(["add", "점심", "", "-d", "2024-07-30"])
        .assert()
        .failure()
        .stderr(contains("All fields are required"));

    assert!(!ledger_file(&dir, "2024_7_30").exists());
}

#[test]
fn legacy_lines_are_counted_and_raw_lines_skipped() {
    let dir = TempDir::new().unwrap();
    let path = ledger_file(&dir, "2024_7_5");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "점심 : 8,000원\n택시 8000\n").unwrap();

    daybook(&dir)
        .args(["show", "2024-07-05"])
        .assert()
        .success()
        .stdout(contains("택시 8000  (not counted)"))
        .stdout(contains("Day total:   8,000원"));

    daybook(&dir)
        .args(["month", "2024-07"])
        .assert()
        .success()
        .stdout(contains("Month total: 8,000원 (1 entries, 1 unreadable lines skipped)"));
}

#[test]
fn budget_set_persists() {
    let dir = TempDir::new().unwrap();

    daybook(&dir)
        .args(["budget", "set", "300,000"])
        .assert()
        .success()
        .stdout(contains("Budget changed: 500,000원 -> 300,000원"));

    daybook(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("Monthly budget: 300,000원"));

    daybook(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(contains("SET_BUDGET"));
}

#[test]
fn invalid_budget_is_rejected() {
    let dir = TempDir::new().unwrap();

    daybook(&dir)
        .args(["budget", "set", "lots"])
        .assert()
        .failure();
}

#[test]
fn export_month_as_csv() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["add", "커피", "4500", "-d", "2024-07-30"])
        .assert()
        .success();
    daybook(&dir)
        .args(["add", "우유", "2000", "-d", "2024-08-01"])
        .assert()
        .success();

    daybook(&dir)
        .args(["export", "2024-07", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("date,id,name,amount,category"))
        .stdout(contains("2024-07-30"))
        .stdout(contains("우유").not());
}

#[test]
fn failed_rewrite_reports_save_failed() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["add", "커피", "4500", "-d", "2024-07-30"])
        .assert()
        .success();
    // A directory squatting on the temp file path makes the rewrite fail
    let ledger = ledger_file(&dir, "2024_7_30");
    std::fs::create_dir_all(ledger.with_extension("txt.tmp")).unwrap();

    daybook(&dir)
        .args(["delete", "커피", "4500", "-d", "2024-07-30"])
        .assert()
        .failure()
        .stderr(contains("save failed"));

    assert_eq!(
        std::fs::read_to_string(&ledger).unwrap().lines().count(),
        1
    );
}

#[test]
fn brace_named_legacy_entry_is_counted() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["config", "--line-format", "legacy"])
        .assert()
        .success();

    daybook(&dir)
        .args(["add", "{간식}", "1000", "-d", "2024-07-30"])
        .assert()
        .success()
        .stdout(contains("{간식} : 1,000원"))
        .stdout(contains("(not counted)").not())
        .stdout(contains("Month total: 1,000원"));
}

#[test]
fn history_for_one_day() {
    let dir = TempDir::new().unwrap();
    daybook(&dir)
        .args(["add", "커피", "4500", "-d", "2024-07-30"])
        .assert()
        .success();
    daybook(&dir)
        .args(["add", "점심", "8000", "-d", "2024-07-01"])
        .assert()
        .success();

    daybook(&dir)
        .args(["history", "-d", "2024-07-01"])
        .assert()
        .success()
        .stdout(contains("점심 : 8,000원"))
        .stdout(contains("커피").not());
}
