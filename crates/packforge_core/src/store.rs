use std::fmt;
use std::path::{Path, PathBuf};

/// Where generated artifacts live, as seen by the transition guard.
///
/// The guard only ever asks two questions: what absolute path a user-entered
/// name resolves to, and whether something already sits there. Everything
/// else about storage stays behind this seam.
pub trait ArtifactStore {
    /// Resolves a user-entered file name into the absolute artifact path.
    fn resolve(&self, file_name: &str) -> Result<PathBuf, ResolveError>;

    /// Whether an artifact already exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// A name that could not be resolved into an absolute file path. Treated by
/// the guard as a validation failure, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not resolve artifact path: {}", self.message)
    }
}

impl std::error::Error for ResolveError {}
