//! Source factory
//!
//! Discovers dictionary files in a directory, classifies them by content
//! type from file-name hints, and builds one line store per matched type.
//!
//! ## Responsibilities
//! - Scan the dictionary directory for candidate files
//! - Match candidates against kind and part-of-speech hint patterns
//! - Select direct-access construction for offset-keyed kinds, binary
//!   search otherwise
//! - Self-validate direct-access stores and fall back to binary search
//!   when direct access proves unreliable
//! - Aggregate the version reported across all sources

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::config::Config;
use crate::content::{zero_fill_offset, ContentType, DataKind, POS};
use crate::error::{LexError, Result};
use crate::store::{BinarySearchStore, DirectAccessStore, LineStore};
use crate::version::Version;

/// Key a source is registered under
type SourceKey = (Option<POS>, DataKind);

/// Builds and owns the line stores backing a dictionary.
///
/// Stores live from `open` until `close`; accessing them outside that window
/// fails with [`LexError::NotOpen`].
pub struct FileProvider {
    config: Config,
    search_types: Vec<Arc<ContentType>>,
    sources: Option<HashMap<SourceKey, LineStore>>,
    version: Option<Version>,
}

impl FileProvider {
    /// Create a provider over a dictionary directory, loading the standard
    /// content type set
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(Config::builder().dict_dir(dict_dir).build())
    }

    /// Create a provider with explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            search_types: ContentType::standard(),
            sources: None,
            version: None,
        }
    }

    /// Replace the content types this provider loads
    pub fn with_types(mut self, types: Vec<Arc<ContentType>>) -> Self {
        self.search_types = types;
        self
    }

    /// Discover files and build a store for every content type that has a
    /// matching file.
    ///
    /// Fails if the directory cannot be read or contains no files at all; a
    /// content type with no matching file is simply absent afterwards.
    pub fn open(&mut self) -> Result<()> {
        let mut candidates: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.config.dict_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                candidates.push((name, path));
            }
        }

        if candidates.is_empty() {
            return Err(LexError::Provider(format!(
                "no files found in {}",
                self.config.dict_dir.display()
            )));
        }

        // Deterministic classification when several names match a type
        candidates.sort();

        let mut sources = HashMap::new();
        for content in &self.search_types {
            let kind_hints = content.kind().resource_name_hints();
            let pos_hints = content
                .pos()
                .map(|pos| pos.resource_name_hints())
                .unwrap_or(&[]);

            for (name, path) in &candidates {
                if contains_one_of(name, kind_hints) && contains_one_of(name, pos_hints) {
                    let file = fs::File::open(path)?;
                    let buffer = Buffer::from_reader(file)?;
                    let source = self.create_source(name.clone(), content.clone(), buffer);
                    tracing::debug!("{} backed by {}", content, name);
                    sources.insert(content.key(), source);
                    break;
                }
            }
        }

        self.version = determine_version(&sources);
        self.sources = Some(sources);
        Ok(())
    }

    /// Select and build the store variant for one content type.
    ///
    /// Offset-keyed kinds get a direct-access store, self-validated by
    /// looking up the first record under its own zero-padded offset key.
    /// Files whose line endings were damaged in transit fail that check and
    /// are rebuilt as binary-search stores over the same bytes.
    fn create_source(&self, name: String, content: Arc<ContentType>, buffer: Buffer) -> LineStore {
        if content.kind().is_offset_keyed() {
            let store = LineStore::DirectAccess(DirectAccessStore::new(
                name.clone(),
                content.clone(),
                buffer.clone(),
            ));
            if !self.config.verify_direct_access || verify_direct_access(&store) {
                return store;
            }
            tracing::warn!(
                "direct access failed in {} file {}: check CR/LF endings",
                content,
                name
            );
        }
        LineStore::BinarySearch(BinarySearchStore::new(name, content, buffer))
    }

    /// Get the store backing a content type
    pub fn source(&self, pos: Option<POS>, kind: DataKind) -> Result<&LineStore> {
        let sources = self.sources.as_ref().ok_or(LexError::NotOpen)?;
        sources.get(&(pos, kind)).ok_or_else(|| {
            LexError::Provider(format!("no source loaded for {:?}/{}", pos, kind))
        })
    }

    /// All loaded stores, in no particular order
    pub fn sources(&self) -> Result<impl Iterator<Item = &LineStore>> {
        let sources = self.sources.as_ref().ok_or(LexError::NotOpen)?;
        Ok(sources.values())
    }

    /// The version shared by all sources, or `None` if any disagree or none
    /// report one
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    pub fn is_open(&self) -> bool {
        self.sources.is_some()
    }

    /// Release all stores; the provider can be re-opened
    pub fn close(&mut self) {
        self.sources = None;
    }

    /// The dictionary directory this provider scans
    pub fn dict_dir(&self) -> &std::path::Path {
        &self.config.dict_dir
    }
}

/// Check that the first record of a direct-access store resolves under its
/// own offset key. An empty store passes trivially.
fn verify_direct_access(store: &LineStore) -> bool {
    let first = match store.iter().next() {
        Some(line) => line,
        None => return true,
    };

    let offset: u64 = match first.split_whitespace().next().and_then(|t| t.parse().ok()) {
        Some(offset) => offset,
        None => return false,
    };

    store.lookup(&zero_fill_offset(offset)).is_some()
}

/// The version common to every source that reports one, or `None` on any
/// disagreement
fn determine_version(sources: &HashMap<SourceKey, LineStore>) -> Option<Version> {
    let mut version: Option<Version> = None;
    for source in sources.values() {
        let v = match source.version() {
            Some(v) => v,
            None => continue,
        };
        match version {
            None => version = Some(*v),
            Some(current) if current != *v => return None,
            _ => {}
        }
    }
    version
}

/// True when `target` contains any pattern in the set, or the set is empty
fn contains_one_of(target: &str, patterns: &[&str]) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| target.contains(p))
}
