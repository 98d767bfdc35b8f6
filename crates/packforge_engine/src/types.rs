use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;
use crate::project::ProjectError;

/// The work a job performs, exactly once, on its worker thread.
pub type JobFn = Box<dyn FnOnce() -> Result<(), JobError> + Send + 'static>;

/// `(category, name)` identity a running job is recorded under.
pub type JobKey = (String, String);

/// Immutable description of one unit of background work.
///
/// Built when a transition triggers a job start and handed to the monitor,
/// which owns it until the job terminates. The descriptor captures
/// everything the worker needs; nothing mutable is shared with the wizard
/// thread.
pub struct JobDescriptor {
    pub category: String,
    pub name: String,
    pub work: JobFn,
}

impl JobDescriptor {
    pub fn new(category: impl Into<String>, name: impl Into<String>, work: JobFn) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            work,
        }
    }

    pub fn key(&self) -> JobKey {
        (self.category.clone(), self.name.clone())
    }
}

impl fmt::Debug for JobDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobDescriptor")
            .field("category", &self.category)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Failure of the package-generation work.
///
/// `Display` is the short text a `job:failed` message carries; the debug
/// form with the full chain is what gets logged server-side.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("{0}")]
    Generation(String),
    #[error("{0}")]
    Project(#[from] ProjectError),
    #[error("{0}")]
    Persist(#[from] PersistError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Build-layer configuration.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Directory generated artifacts are written to and resolved against.
    pub output_dir: PathBuf,
}

impl BuildSettings {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self::with_output_dir("packages")
    }
}
