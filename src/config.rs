//! Runtime configuration loaded from environment variables.

use opshub_core::{CatalogError, PageCatalog, PageEntry};
use std::env;
use std::path::{Path, PathBuf};

/// Access-service configuration.
///
/// # Environment Variables
///
/// - `OPSHUB_POLICY_STORE_URL`: base URL of the policy store
///   (default: `http://127.0.0.1:8000/api`)
/// - `OPSHUB_CATALOG_PATH`: optional JSON file overriding the built-in
///   page catalog
#[derive(Clone, Debug)]
pub struct AccessConfig {
    /// Base URL of the policy store.
    pub policy_store_url: String,

    /// Path to a catalog file, when the deployment's page set differs
    /// from the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl AccessConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            policy_store_url: env::var("OPSHUB_POLICY_STORE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".into()),
            catalog_path: env::var("OPSHUB_CATALOG_PATH").ok().map(PathBuf::from),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Catalog loading failures. Any of these means the process must not
/// start with a half-formed catalog.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the page catalog: from a JSON file when a path is configured,
/// otherwise the built-in console catalog. The file form is a JSON array
/// of `{key, api_name, display_name, route}` entries.
pub fn load_catalog(path: Option<&Path>) -> Result<PageCatalog, ConfigError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let entries: Vec<PageEntry> = serde_json::from_str(&raw)?;
            Ok(PageCatalog::new(entries)?)
        }
        None => Ok(PageCatalog::builtin()),
    }
}
