//! Tests for the importer's staging decisions (in-memory store)

use std::path::{Path, PathBuf};

use datastage::core::models::{
    ConflictPolicy, Dataset, Destination, ImportError, ImportOutcome, ImportRequest, Layer,
    NamingOptions, TransferMode,
};
use datastage::core::services::Importer;

use crate::common::mocks::MockStagingStore;

const ROOT: &str = "/proj";
const SOURCE: &str = "/downloads/sample.csv";
const STAGED: &str = "/proj/data/01_raw/sample.csv";

fn importer(store: MockStagingStore) -> Importer<MockStagingStore> {
    Importer::new(store, ROOT)
}

// =============================================================================
// BASIC STAGING
// =============================================================================

#[test]
fn test_import_creates_staged_copy() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"a,b\n1,2\n"));

    let staged = importer.import(&ImportRequest::raw(SOURCE)).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Created);
    assert_eq!(staged.destination, PathBuf::from(STAGED));
    assert_eq!(staged.bytes, 8);
}

#[test]
fn test_import_missing_source_writes_nothing() {
    let store = MockStagingStore::new();
    let importer = importer(store);

    let err = importer.import(&ImportRequest::raw("/nowhere/x.csv")).unwrap_err();

    assert!(matches!(err, ImportError::SourceNotFound(p) if p == Path::new("/nowhere/x.csv")));
}

#[test]
fn test_import_twice_is_unchanged() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"a,b\n1,2\n"));

    let first = importer.import(&ImportRequest::raw(SOURCE)).unwrap();
    let second = importer.import(&ImportRequest::raw(SOURCE)).unwrap();

    assert_eq!(first.outcome, ImportOutcome::Created);
    assert_eq!(second.outcome, ImportOutcome::Unchanged);
    assert_eq!(second.bytes, 8);
    assert_eq!(importer.store().transfers(), 1);
}

#[test]
fn test_import_onto_itself_is_unchanged() {
    let importer = importer(MockStagingStore::new().with_file(STAGED, b"a\n"));

    let staged = importer.import(&ImportRequest::raw(STAGED)).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Unchanged);
}

// =============================================================================
// CONFLICT POLICIES
// =============================================================================

fn conflicting_store() -> MockStagingStore {
    MockStagingStore::new().with_file(SOURCE, b"new\n").with_file(STAGED, b"old\n")
}

#[test]
fn test_overwrite_replaces_different_bytes() {
    let importer = importer(conflicting_store());

    let staged = importer.import(&ImportRequest::raw(SOURCE)).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Overwritten);
    assert_eq!(importer.store().content(Path::new(STAGED)).unwrap(), b"new\n");
}

#[test]
fn test_skip_leaves_destination() {
    let importer = importer(conflicting_store());

    let request = ImportRequest::raw(SOURCE).on_conflict(ConflictPolicy::Skip);
    let staged = importer.import(&request).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Skipped);
    assert_eq!(importer.store().content(Path::new(STAGED)).unwrap(), b"old\n");
    assert_eq!(importer.store().transfers(), 0);
}

#[test]
fn test_error_policy_fails_on_existing() {
    let importer = importer(conflicting_store());

    let request = ImportRequest::raw(SOURCE).on_conflict(ConflictPolicy::Error);
    let err = importer.import(&request).unwrap_err();

    assert!(matches!(err, ImportError::AlreadyExists(p) if p == Path::new(STAGED)));
    assert_eq!(importer.store().content(Path::new(STAGED)).unwrap(), b"old\n");
}

#[test]
fn test_error_policy_allows_fresh_destination() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"x\n"));

    let request = ImportRequest::raw(SOURCE).on_conflict(ConflictPolicy::Error);

    assert_eq!(importer.import(&request).unwrap().outcome, ImportOutcome::Created);
}

// =============================================================================
// DESTINATIONS
// =============================================================================

#[test]
fn test_layer_destination_with_naming() {
    let importer = importer(MockStagingStore::new().with_file("/in/Job Offers.csv", b"x\n"));

    let request = ImportRequest::raw("/in/Job Offers.csv").to(Destination::Layer {
        layer: Layer::Primary,
        naming: NamingOptions {
            standardize: true,
            ..NamingOptions::default()
        },
    });

    let staged = importer.import(&request).unwrap();
    assert_eq!(staged.destination, PathBuf::from("/proj/data/03_primary/job_offers.csv"));
}

#[test]
fn test_dataset_destination() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"x\n"));
    let dataset = Dataset::new("offers", Layer::Raw, Some(PathBuf::from("data/01_raw/o.csv")));

    let request = ImportRequest::raw(SOURCE).to(Destination::Dataset(dataset));
    let staged = importer.import(&request).unwrap();

    assert_eq!(staged.destination, PathBuf::from("/proj/data/01_raw/o.csv"));
}

#[test]
fn test_invalid_rename_is_rejected_before_write() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"x\n"));

    let request = ImportRequest::raw(SOURCE).to(Destination::Layer {
        layer: Layer::Raw,
        naming: NamingOptions {
            rename: Some("a/b.csv".to_string()),
            ..NamingOptions::default()
        },
    });

    assert!(matches!(importer.import(&request), Err(ImportError::InvalidName(_))));
}

// =============================================================================
// FAILURES AND MODES
// =============================================================================

#[test]
fn test_unwritable_destination() {
    let store = MockStagingStore::read_only().with_file(SOURCE, b"x\n");
    let importer = importer(store);

    let err = importer.import(&ImportRequest::raw(SOURCE)).unwrap_err();

    assert!(matches!(err, ImportError::DestinationNotWritable { .. }));
}

#[test]
fn test_move_mode_transfers_once() {
    let importer = importer(MockStagingStore::new().with_file(SOURCE, b"x\n"));

    let staged = importer.import(&ImportRequest::raw(SOURCE).mode(TransferMode::Move)).unwrap();

    assert_eq!(staged.mode, TransferMode::Move);
    assert_eq!(staged.outcome, ImportOutcome::Created);
    assert_eq!(importer.store().transfers(), 1);
    assert!(importer.store().content(Path::new(SOURCE)).is_none());
    assert_eq!(importer.store().content(Path::new(STAGED)).unwrap(), b"x\n");
}

#[test]
fn test_move_skipped_keeps_source() {
    let importer = importer(conflicting_store());

    let request = ImportRequest::raw(SOURCE)
        .mode(TransferMode::Move)
        .on_conflict(ConflictPolicy::Skip);
    let staged = importer.import(&request).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Skipped);
    assert_eq!(importer.store().content(Path::new(SOURCE)).unwrap(), b"new\n");
    assert_eq!(importer.store().transfers(), 0);
}

#[test]
fn test_move_unchanged_keeps_source() {
    let store = MockStagingStore::new().with_file(SOURCE, b"same\n").with_file(STAGED, b"same\n");
    let importer = importer(store);

    let staged = importer.import(&ImportRequest::raw(SOURCE).mode(TransferMode::Move)).unwrap();

    assert_eq!(staged.outcome, ImportOutcome::Unchanged);
    assert_eq!(importer.store().content(Path::new(SOURCE)).unwrap(), b"same\n");
    assert_eq!(importer.store().transfers(), 0);
}

// =============================================================================
// BATCHES
// =============================================================================

#[test]
fn test_batch_rejects_second_source_for_same_destination() {
    let store = MockStagingStore::new()
        .with_file("/a/x.csv", b"from_a\n")
        .with_file("/b/x.csv", b"from_b\n");
    let importer = importer(store);

    let requests = [
        ImportRequest::raw("/a/x.csv").mode(TransferMode::Move),
        ImportRequest::raw("/b/x.csv").mode(TransferMode::Move),
    ];
    let results = importer.import_all(&requests);

    assert_eq!(results[0].as_ref().unwrap().outcome, ImportOutcome::Created);
    assert!(matches!(
        &results[1],
        Err(ImportError::DestinationClaimed { first, .. }) if first == Path::new("/a/x.csv")
    ));
    let store = importer.store();
    assert_eq!(store.content(Path::new("/proj/data/01_raw/x.csv")).unwrap(), b"from_a\n");
    assert_eq!(store.content(Path::new("/b/x.csv")).unwrap(), b"from_b\n");
    assert_eq!(store.transfers(), 1);
}

#[test]
fn test_batch_distinct_destinations_all_staged() {
    let store =
        MockStagingStore::new().with_file("/in/a.csv", b"a\n").with_file("/in/b.csv", b"b\n");
    let importer = importer(store);

    let results =
        importer.import_all(&[ImportRequest::raw("/in/a.csv"), ImportRequest::raw("/in/b.csv")]);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(importer.store().transfers(), 2);
}

#[test]
fn test_batch_failed_source_does_not_claim() {
    let store = MockStagingStore::new().with_file("/b/x.csv", b"b\n");
    let importer = importer(store);

    let results =
        importer.import_all(&[ImportRequest::raw("/a/x.csv"), ImportRequest::raw("/b/x.csv")]);

    assert!(matches!(results[0], Err(ImportError::SourceNotFound(_))));
    assert_eq!(results[1].as_ref().unwrap().outcome, ImportOutcome::Created);
}
