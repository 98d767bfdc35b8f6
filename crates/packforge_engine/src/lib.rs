//! Packforge engine: job execution, monitoring, and artifact persistence.
mod context;
mod generator;
mod monitor;
mod persist;
mod project;
mod runner;
mod store;
mod types;

pub use context::{language_fallback_enabled, proxy_cache_enabled, SuppressionScope};
pub use generator::{ManifestPackageGenerator, PackageGenerator};
pub use monitor::{JobMonitor, JobNotice, StartError};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use project::{
    load_project, parse_project, PackageProject, ProjectError, ProjectMetadata, SourceEntry,
};
pub use runner::run_job;
pub use store::DirArtifactStore;
pub use types::{BuildSettings, JobDescriptor, JobError, JobFn, JobKey};
