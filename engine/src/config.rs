//! Configuration types for the engine

use crate::file_ref::ResolveError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Configuration for asset paths
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root directory for all assets
    pub asset_root: PathBuf,
}

impl AssetConfig {
    /// Create a new AssetConfig rooted at `asset_root`
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        let asset_root = asset_root.into();
        debug!(asset_root = ?asset_root, "Creating new AssetConfig");
        Self { asset_root }
    }

    /// Join a relative asset path onto the asset root
    ///
    /// Absolute paths and paths that climb out of the root are rejected.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ResolveError> {
        if relative.trim().is_empty() {
            return Err(ResolveError::Empty);
        }
        let escapes = Path::new(relative).components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || relative.contains('\\') {
            return Err(ResolveError::PathTraversal(relative.to_string()));
        }

        let path = self.asset_root.join(relative);
        debug!(relative = relative, path = ?path, "Resolved asset path");
        Ok(path)
    }

    /// Check that the asset root is an existing directory
    pub fn validate(&self) -> Result<(), std::io::Error> {
        if !self.asset_root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Asset directory not found: {:?}", self.asset_root),
            ));
        }
        Ok(())
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
        }
    }
}
