//! Integration tests for datastage CLI
//!
//! These tests run the binary against temporary projects, covering the
//! cycle of: init → import → run → status


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a datastage command isolated from user config
fn datastage(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("datastage"));
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("DATASTAGE_ENV")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a file relative to `root`, creating parents
fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("datastage v"));
}

#[test]
fn test_no_args_prints_hint() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("datastage init"));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_import_requires_source() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path()).arg("import").current_dir(temp.path()).assert().failure();
}

// =============================================================================
// IMPORT
// =============================================================================

#[test]
fn test_import_stages_into_raw() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a,b\n1,2\n");

    datastage(root)
        .args(["import", "sample.csv"])
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("created"))
        .stdout(predicate::str::contains("data/01_raw/sample.csv"));

    assert_eq!(fs::read_to_string(root.join("data/01_raw/sample.csv")).unwrap(), "a,b\n1,2\n");
    assert!(root.join("sample.csv").exists());
}

#[test]
fn test_import_missing_source_fails() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    datastage(root)
        .args(["import", "missing.csv"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("source file not found"));

    assert!(!root.join("data/01_raw/missing.csv").exists());
}

#[test]
fn test_import_twice_is_unchanged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a,b\n1,2\n");

    datastage(root).args(["import", "sample.csv"]).current_dir(root).assert().success();
    datastage(root)
        .args(["import", "sample.csv"])
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn test_import_conflict_error_policy() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a\n1\n");
    write(root, "data/01_raw/sample.csv", "a\n0\n");

    datastage(root)
        .args(["import", "sample.csv", "--on-conflict", "error"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(root.join("data/01_raw/sample.csv")).unwrap(), "a\n0\n");
}

#[test]
fn test_import_glob_with_naming() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "exports/Job Offers.csv", "x\n");
    write(root, "exports/Salaries 2024.csv", "y\n");
    write(root, "exports/notes.txt", "z\n");

    datastage(root)
        .args(["import", "exports/*.csv", "--standardize", "--layer", "intermediate"])
        .current_dir(root)
        .assert()
        .success();

    assert!(root.join("data/02_intermediate/job_offers.csv").exists());
    assert!(root.join("data/02_intermediate/salaries_2024.csv").exists());
    assert!(!root.join("data/02_intermediate/notes.txt").exists());
}

#[test]
fn test_import_move() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a\n");

    datastage(root)
        .args(["import", "sample.csv", "--move", "--name", "renamed"])
        .current_dir(root)
        .assert()
        .success();

    assert!(!root.join("sample.csv").exists());
    assert!(root.join("data/01_raw/renamed.csv").exists());
}

#[test]
fn test_import_json_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a,b\n1,2\n");

    let output = datastage(root)
        .args(["--json", "import", "sample.csv"])
        .current_dir(root)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["staged"][0]["outcome"], "created");
    assert_eq!(json["staged"][0]["bytes"], 8);
}

#[test]
fn test_import_partial_failure_stages_the_rest() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "good.csv", "a\n");

    datastage(root)
        .args(["import", "good.csv", "bad.csv"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 source(s) failed"));

    assert!(root.join("data/01_raw/good.csv").exists());
}

#[test]
fn test_import_move_same_name_keeps_second_source() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a/x.csv", "from_a\n");
    write(root, "b/x.csv", "from_b\n");

    datastage(root)
        .args(["import", "--move", "a/x.csv", "b/x.csv"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already staged from"))
        .stderr(predicate::str::contains("1 of 2 source(s) failed"));

    assert_eq!(fs::read_to_string(root.join("data/01_raw/x.csv")).unwrap(), "from_a\n");
    assert!(!root.join("a/x.csv").exists());
    assert_eq!(fs::read_to_string(root.join("b/x.csv")).unwrap(), "from_b\n");
}

#[test]
fn test_import_glob_in_directory_with_brackets() {
    let temp = TempDir::new().unwrap();
    let cwd = temp.path().join("run[1]");
    write(&cwd, "exports/a.csv", "a\n");

    datastage(temp.path())
        .args(["import", "exports/*.csv"])
        .current_dir(&cwd)
        .assert()
        .success();

    assert!(cwd.join("data/01_raw/a.csv").exists());
}

#[test]
fn test_import_dataset_conflicts_with_layer() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample.csv", "a\n");

    datastage(root)
        .args(["import", "sample.csv", "--dataset", "offers", "--layer", "primary"])
        .current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// =============================================================================
// PROJECT COMMANDS
// =============================================================================

#[test]
fn test_init_scaffolds_project() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    datastage(root)
        .arg("init")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created conf/base/catalog.toml"));

    for dir in ["01_raw", "02_intermediate", "03_primary", "04_feature", "05_model_input"] {
        assert!(root.join("data").join(dir).join(".gitkeep").exists(), "missing {dir}");
    }
    assert!(root.join("conf/base/parameters.toml").exists());
    assert!(fs::read_to_string(root.join(".gitignore")).unwrap().contains("conf/local/**"));
}

#[test]
fn test_init_keeps_existing_config() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "conf/base/catalog.toml", "# mine\n");

    datastage(root)
        .arg("init")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept conf/base/catalog.toml"));

    assert_eq!(fs::read_to_string(root.join("conf/base/catalog.toml")).unwrap(), "# mine\n");
}

#[test]
fn test_pipeline_list() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path())
        .args(["pipeline", "list"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("import_data"))
        .stdout(predicate::str::contains("import_local_node"));
}

#[test]
fn test_run_unknown_pipeline() {
    let temp = TempDir::new().unwrap();
    datastage(temp.path())
        .args(["run", "--pipeline", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_profile_reports_missing_values() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "offers.csv", "Job Title,Salary\nDev,100\nOps,\n");

    datastage(root)
        .args(["profile", "offers.csv"])
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of rows: 2"))
        .stdout(predicate::str::contains("job_title"))
        .stdout(predicate::str::contains("50.0%"));
}
