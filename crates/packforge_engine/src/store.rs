//! Filesystem-backed artifact store.

use std::path::{Path, PathBuf};

use pack_logging::pack_warn;
use packforge_core::{ArtifactStore, ResolveError};

use crate::types::BuildSettings;

/// Resolves artifact names against the configured output directory.
pub struct DirArtifactStore {
    output_dir: PathBuf,
}

impl DirArtifactStore {
    pub fn new(settings: &BuildSettings) -> Self {
        Self {
            output_dir: settings.output_dir.clone(),
        }
    }
}

impl ArtifactStore for DirArtifactStore {
    fn resolve(&self, file_name: &str) -> Result<PathBuf, ResolveError> {
        let joined = self.output_dir.join(file_name);
        // Absolute resolution fails when the working directory the output
        // directory hangs off has gone away; the guard treats that as a
        // validation failure.
        match std::path::absolute(&joined) {
            Ok(path) => Ok(path),
            Err(err) => {
                pack_warn!("Noncritical: could not resolve {:?}: {}", joined, err);
                Err(ResolveError::new(err.to_string()))
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
