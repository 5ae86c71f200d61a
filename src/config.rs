//! Configuration for lexfile
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Configuration for a [`FileProvider`](crate::provider::FileProvider)
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Discovery Configuration
    // -------------------------------------------------------------------------
    /// Directory containing the dictionary line files
    pub dict_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Validation Configuration
    // -------------------------------------------------------------------------
    /// Verify direct-access stores after construction by re-looking-up the
    /// first record's offset key, falling back to binary search on failure.
    /// Catches data files whose line endings were damaged in transit.
    pub verify_direct_access: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from("./dict"),
            verify_direct_access: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the dictionary directory
    pub fn dict_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dict_dir = path.into();
        self
    }

    /// Enable or disable direct-access self-validation
    pub fn verify_direct_access(mut self, verify: bool) -> Self {
        self.config.verify_direct_access = verify;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
