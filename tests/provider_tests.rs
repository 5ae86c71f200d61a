//! Tests for the file provider
//!
//! These tests verify:
//! - Discovery and hint-based classification of dictionary files
//! - Store variant selection per data kind
//! - Direct-access self-validation and the binary-search fallback
//! - Aggregate version determination
//! - Open/close lifecycle errors

use std::fs;
use std::path::Path;

use lexfile::{Config, DataKind, FileProvider, LexError, LineStore, Version, POS};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Offset-self-referential data file: each record begins with its own
/// zero-padded byte offset, computed for \n line endings
fn data_file_text(header: &str) -> String {
    let mut text = format!("  {} data file\n", header);
    for word in ["apple", "banana", "cherry", "durian"] {
        let offset = text.len();
        text.push_str(&format!("{:08} {}\n", offset, word));
    }
    text
}

fn index_file_text(header: &str) -> String {
    format!(
        "  {} index file\napple n 1\nbanana n 2\ncherry n 1\n",
        header
    )
}

fn write_file(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

fn setup_dict() -> (TempDir, FileProvider) {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.noun", &index_file_text("WordNet 3.0"));
    write_file(temp.path(), "data.noun", &data_file_text("WordNet 3.0"));
    write_file(temp.path(), "noun.exc", "geese goose\nmice mouse\n");
    let provider = FileProvider::new(temp.path());
    (temp, provider)
}

// =============================================================================
// Discovery and Classification
// =============================================================================

#[test]
fn test_open_classifies_by_name_hints() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();

    let index = provider.source(Some(POS::Noun), DataKind::Index).unwrap();
    assert_eq!(index.name(), "index.noun");

    let data = provider.source(Some(POS::Noun), DataKind::Data).unwrap();
    assert_eq!(data.name(), "data.noun");

    let exc = provider
        .source(Some(POS::Noun), DataKind::Exception)
        .unwrap();
    assert_eq!(exc.name(), "noun.exc");
}

#[test]
fn test_open_empty_directory_fails() {
    let temp = TempDir::new().unwrap();
    let mut provider = FileProvider::new(temp.path());
    assert!(matches!(provider.open(), Err(LexError::Provider(_))));
}

#[test]
fn test_open_missing_directory_fails() {
    let mut provider = FileProvider::new("/definitely/not/a/dict/dir");
    assert!(matches!(provider.open(), Err(LexError::Io(_))));
}

#[test]
fn test_unmatched_content_type_is_absent() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.noun", &index_file_text("WordNet 3.0"));
    let mut provider = FileProvider::new(temp.path());
    provider.open().unwrap();

    assert!(provider.source(Some(POS::Noun), DataKind::Index).is_ok());
    assert!(matches!(
        provider.source(Some(POS::Verb), DataKind::Index),
        Err(LexError::Provider(_))
    ));
}

// =============================================================================
// Variant Selection and Self-Validation
// =============================================================================

#[test]
fn test_index_files_use_binary_search() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();

    let index = provider.source(Some(POS::Noun), DataKind::Index).unwrap();
    assert!(matches!(index, LineStore::BinarySearch(_)));
    assert_eq!(index.lookup("banana"), Some("banana n 2".to_string()));
}

#[test]
fn test_data_files_use_direct_access() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();

    let data = provider.source(Some(POS::Noun), DataKind::Data).unwrap();
    assert!(matches!(data, LineStore::DirectAccess(_)));

    // Every record resolves under its own offset key
    let keys: Vec<String> = data
        .iter()
        .map(|line| line.split_whitespace().next().unwrap().to_string())
        .collect();
    assert_eq!(keys.len(), 4);
    for key in keys {
        assert!(data.lookup(&key).is_some(), "key {}", key);
    }
}

#[test]
fn test_corrupted_data_file_falls_back_to_binary_search() {
    // CRLF translation shifts every byte offset, so the recorded offsets no
    // longer address record starts; validation must catch this and rebuild
    // the source as binary search over the same bytes.
    let temp = TempDir::new().unwrap();
    let corrupted = data_file_text("WordNet 3.0").replace('\n', "\r\n");
    write_file(temp.path(), "data.noun", &corrupted);

    let mut provider = FileProvider::new(temp.path());
    provider.open().unwrap();

    let data = provider.source(Some(POS::Noun), DataKind::Data).unwrap();
    assert!(matches!(data, LineStore::BinarySearch(_)));

    // Lookups still succeed through the comparator path
    let second_key = data.iter().nth(1).unwrap();
    let key = second_key.split_whitespace().next().unwrap().to_string();
    assert_eq!(data.lookup(&key), Some(second_key));
}

#[test]
fn test_validation_can_be_disabled() {
    let temp = TempDir::new().unwrap();
    let corrupted = data_file_text("WordNet 3.0").replace('\n', "\r\n");
    write_file(temp.path(), "data.noun", &corrupted);

    let config = Config::builder()
        .dict_dir(temp.path())
        .verify_direct_access(false)
        .build();
    let mut provider = FileProvider::with_config(config);
    provider.open().unwrap();

    let data = provider.source(Some(POS::Noun), DataKind::Data).unwrap();
    assert!(matches!(data, LineStore::DirectAccess(_)));
}

#[test]
fn test_empty_data_file_passes_validation() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "data.noun", "");

    let mut provider = FileProvider::new(temp.path());
    provider.open().unwrap();

    let data = provider.source(Some(POS::Noun), DataKind::Data).unwrap();
    assert!(matches!(data, LineStore::DirectAccess(_)));
    assert_eq!(data.lookup("0"), None);
}

// =============================================================================
// Version Aggregation
// =============================================================================

#[test]
fn test_version_agreement_across_sources() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();
    assert_eq!(provider.version(), Some(Version::new(3, 0, 0)));
}

#[test]
fn test_version_disagreement_yields_none() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.noun", &index_file_text("WordNet 3.0"));
    write_file(temp.path(), "index.verb", &index_file_text("WordNet 2.1"));
    let mut provider = FileProvider::new(temp.path());
    provider.open().unwrap();
    assert_eq!(provider.version(), None);
}

#[test]
fn test_sources_without_version_are_ignored() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "index.noun", &index_file_text("WordNet 3.0"));
    // Exception lists have no comment header and report no version
    write_file(temp.path(), "noun.exc", "geese goose\n");
    let mut provider = FileProvider::new(temp.path());
    provider.open().unwrap();
    assert_eq!(provider.version(), Some(Version::new(3, 0, 0)));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_source_access_before_open_fails() {
    let temp = TempDir::new().unwrap();
    let provider = FileProvider::new(temp.path());
    assert!(!provider.is_open());
    assert!(matches!(
        provider.source(Some(POS::Noun), DataKind::Index),
        Err(LexError::NotOpen)
    ));
    assert!(matches!(provider.sources(), Err(LexError::NotOpen)));
}

#[test]
fn test_close_releases_sources() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();
    assert!(provider.is_open());

    provider.close();
    assert!(!provider.is_open());
    assert!(matches!(
        provider.source(Some(POS::Noun), DataKind::Index),
        Err(LexError::NotOpen)
    ));
}

#[test]
fn test_reopen_after_close() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();
    provider.close();
    provider.open().unwrap();

    let index = provider.source(Some(POS::Noun), DataKind::Index).unwrap();
    assert_eq!(index.lookup("apple"), Some("apple n 1".to_string()));
}

#[test]
fn test_sources_iterates_all_loaded_stores() {
    let (_temp, mut provider) = setup_dict();
    provider.open().unwrap();
    assert_eq!(provider.sources().unwrap().count(), 3);
}
