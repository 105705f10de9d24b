mod common;

use common::{chk, sample_log, temp_out, write_config, write_fixture};
use predicates::prelude::*;
use std::fs;

const WEEK: [&str; 4] = ["--start", "2025-10-06", "--end", "2025-10-12"];

#[test]
fn test_export_csv() {
    let log = write_fixture("export_csv", &sample_log());
    let cfg = write_config("export_csv");
    let out = temp_out("export_csv", "csv");

    chk()
        .args(["--config", &cfg, "export", &log, "--format", "csv", "--file", &out])
        .args(WEEK)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-10-06"));
    assert!(content.contains("+0시간 5분"));
    assert!(content.contains("주간합계"));
}

#[test]
fn test_export_json_has_detail_and_weekly() {
    let log = write_fixture("export_json", &sample_log());
    let cfg = write_config("export_json");
    let out = temp_out("export_json", "json");

    chk()
        .args(["--config", &cfg, "export", &log, "--format", "json", "--file", &out])
        .args(WEEK)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert!(parsed["detail"].as_array().is_some_and(|a| !a.is_empty()));
    assert!(parsed["weekly"].as_array().is_some_and(|a| !a.is_empty()));
    assert!(content.contains("2025-10-08"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let log = write_fixture("export_xlsx", &sample_log());
    let cfg = write_config("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    chk()
        .args(["--config", &cfg, "export", &log, "--format", "xlsx", "--file", &out])
        .args(WEEK)
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_default_format_is_csv() {
    let log = write_fixture("export_default", &sample_log());
    let cfg = write_config("export_default");
    let out = temp_out("export_default", "csv");

    chk()
        .args(["--config", &cfg, "export", &log, "--file", &out])
        .args(WEEK)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));
}

#[test]
fn test_export_refuses_relative_path() {
    let log = write_fixture("export_relative", &sample_log());
    let cfg = write_config("export_relative");

    chk()
        .args(["--config", &cfg, "export", &log, "--file", "out.csv"])
        .args(WEEK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_overwrite_needs_confirmation() {
    let log = write_fixture("export_overwrite", &sample_log());
    let cfg = write_config("export_overwrite");
    let out = temp_out("export_overwrite", "csv");

    fs::write(&out, "existing").expect("seed existing file");

    // declined confirmation leaves the file untouched
    chk()
        .args(["--config", &cfg, "export", &log, "--file", &out])
        .args(WEEK)
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");

    // --force overwrites without asking
    chk()
        .args(["--config", &cfg, "export", &log, "--file", &out, "--force"])
        .args(WEEK)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2025-10-06"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let log = write_fixture("export_empty", &sample_log());
    let cfg = write_config("export_empty");
    let out = temp_out("export_empty", "csv");

    chk()
        .args([
            "--config",
            &cfg,
            "export",
            &log,
            "--file",
            &out,
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-07",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attendance events matched"));

    assert!(!std::path::Path::new(&out).exists());
}
