//! File references and their resolution against the asset tree

use crate::config::AssetConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A reference to an asset file, stored as a path relative to the asset root
///
/// The inspector edits the reference as plain text; resolving it to an actual
/// file happens later through a [`FileResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Failure to resolve a [`FileRef`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("file reference is empty")]
    Empty,

    #[error("file reference `{0}` leaves the asset root")]
    PathTraversal(String),

    #[error("asset not found: {0:?}")]
    NotFound(PathBuf),
}

/// Resolves file references into loadable handles
pub trait FileResolver {
    type Handle;

    fn resolve(&self, file: &FileRef) -> Result<Self::Handle, ResolveError>;
}

/// Resolves file references to existing paths under an asset root
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    config: AssetConfig,
}

impl AssetResolver {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }
}

impl FileResolver for AssetResolver {
    type Handle = PathBuf;

    fn resolve(&self, file: &FileRef) -> Result<PathBuf, ResolveError> {
        let path = self.config.resolve(file.as_str())?;
        if !path.is_file() {
            warn!(file = %file, path = ?path, "Referenced asset does not exist");
            return Err(ResolveError::NotFound(path));
        }
        debug!(file = %file, "Resolved file reference");
        Ok(path)
    }
}
