//! The artifact-generation boundary.
//!
//! The wizard treats generation as a black box: a source manifest and a
//! target path go in, a file or an error comes out.

use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::Path;

use crate::persist::AtomicFileWriter;
use crate::project;
use crate::types::JobError;

/// Black-box artifact generation invoked by the build job.
pub trait PackageGenerator: Send + Sync {
    /// Builds the package at `target` from the project manifest at `source`.
    fn generate(&self, source: &Path, target: &Path) -> Result<(), JobError>;
}

/// Default generator: packs the manifest's source entries into a single
/// artifact written atomically to the target path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestPackageGenerator;

impl PackageGenerator for ManifestPackageGenerator {
    fn generate(&self, source: &Path, target: &Path) -> Result<(), JobError> {
        let project = project::load_project(source)?;

        let dir = target.parent().ok_or_else(|| {
            JobError::Generation(format!("target has no parent directory: {}", target.display()))
        })?;
        let file_name = target
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| {
                JobError::Generation(format!("target has no file name: {}", target.display()))
            })?;

        let mut payload = String::new();
        let _ = writeln!(payload, "package: {}", project.metadata.package_name);
        let _ = writeln!(payload, "version: {}", project.metadata.version);
        if !project.metadata.author.is_empty() {
            let _ = writeln!(payload, "author: {}", project.metadata.author);
        }
        for entry in &project.sources {
            let _ = writeln!(payload, "--- {}", entry.name);
            let _ = writeln!(payload, "{}", entry.content);
        }

        let writer = AtomicFileWriter::new(dir.to_path_buf());
        writer.write(file_name, payload.as_bytes())?;
        Ok(())
    }
}
