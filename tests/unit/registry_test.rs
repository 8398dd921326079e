//! Tests for the pipeline runner

use std::path::PathBuf;

use datastage::core::models::{ConfigError, ImportError, ImportOutcome};
use datastage::core::services::{
    DEFAULT_PIPELINE, Importer, RunError, find_pipeline, run_pipeline,
};

use crate::common::mocks::{MockParameters, MockStagingStore};

fn default_pipeline() -> datastage::core::models::Pipeline {
    find_pipeline(DEFAULT_PIPELINE).unwrap()
}

#[test]
fn test_run_stages_configured_file() {
    let store = MockStagingStore::new().with_file("/proj/exports/offers.csv", b"a\n1\n");
    let importer = Importer::new(store, "/proj");
    let params = MockParameters::new()
        .with("import_local.source", "exports/offers.csv")
        .with("import_local.destination", "data/01_raw/offers.csv");

    let runs = run_pipeline(&default_pipeline(), &params, &importer).unwrap();

    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].node, "import_local_node");
    assert_eq!(runs[0].staged.outcome, ImportOutcome::Created);
    assert_eq!(runs[0].staged.destination, PathBuf::from("/proj/data/01_raw/offers.csv"));
}

#[test]
fn test_run_missing_source_parameter() {
    let importer = Importer::new(MockStagingStore::new(), "/proj");
    let params = MockParameters::new().with("import_local.destination", "data/01_raw/x.csv");

    let err = run_pipeline(&default_pipeline(), &params, &importer).unwrap_err();

    match err {
        RunError::Config {
            node,
            source: ConfigError::MissingParameter(key),
        } => {
            assert_eq!(node, "import_local_node");
            assert_eq!(key, "import_local.source");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_run_invalid_conflict_policy() {
    let store = MockStagingStore::new().with_file("/proj/a.csv", b"a\n");
    let importer = Importer::new(store, "/proj");
    let params = MockParameters::new()
        .with("import_local.source", "a.csv")
        .with("import_local.destination", "data/01_raw/a.csv")
        .with("import_local.on_conflict", "merge");

    let err = run_pipeline(&default_pipeline(), &params, &importer).unwrap_err();

    assert!(matches!(
        err,
        RunError::Config {
            source: ConfigError::InvalidParameter { .. },
            ..
        }
    ));
}

#[test]
fn test_run_respects_error_policy() {
    let store = MockStagingStore::new()
        .with_file("/proj/a.csv", b"new\n")
        .with_file("/proj/data/01_raw/a.csv", b"old\n");
    let importer = Importer::new(store, "/proj");
    let params = MockParameters::new()
        .with("import_local.source", "a.csv")
        .with("import_local.destination", "data/01_raw/a.csv")
        .with("import_local.on_conflict", "error");

    let err = run_pipeline(&default_pipeline(), &params, &importer).unwrap_err();

    assert!(matches!(
        err,
        RunError::Import {
            source: ImportError::AlreadyExists(_),
            ..
        }
    ));
}
