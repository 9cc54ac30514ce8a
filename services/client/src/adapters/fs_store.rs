//! services/client/src/adapters/fs_store.rs
//!
//! This module contains the filesystem storage adapter, the concrete
//! implementation of the `KeyValueStore` port from the `core` crate. Each
//! key is kept as one pretty-printed JSON file inside a data directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bookhaven_core::ports::{KeyValueStore, PortError, PortResult};
use serde_json::Value;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A storage adapter that implements the `KeyValueStore` port on top of a
/// directory of JSON files.
#[derive(Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a new `JsonFileStore` rooted at `root`, creating the
    /// directory if it does not exist yet.
    pub async fn new(root: impl Into<PathBuf>) -> PortResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers like "bookhaven-books"; keep anything
        // path-hostile out of the filename regardless.
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", file))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

//=========================================================================================
// `KeyValueStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn load(&self, key: &str) -> PortResult<Option<Value>> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortError::Unexpected(e.to_string())),
        };
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| PortError::Unexpected(format!("{} is not valid JSON: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    async fn save(&self, key: &str, value: Value) -> PortResult<()> {
        let path = self.path_for(key);
        let encoded = serde_json::to_vec_pretty(&value)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&path, encoded)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(())
    }
}
