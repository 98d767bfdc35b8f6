//! Round-trip-driven observation of one background job.

use std::thread;

use pack_logging::{pack_debug, pack_info, pack_warn};
use packforge_core::MessageChannel;
use thiserror::Error;

use crate::runner;
use crate::types::{JobDescriptor, JobError, JobKey};

/// Raised by [`JobMonitor::start`] when a job is already in flight.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartError {
    #[error("job already running: {0}/{1}")]
    AlreadyRunning(String, String),
    #[error("could not spawn worker thread: {0}")]
    Spawn(String),
}

/// Terminal observation for a started job. Exactly one is produced per
/// job, and only after its worker thread has terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobNotice {
    /// Worker terminated cleanly.
    Finished,
    /// Worker terminated faulted, or its thread went away without a clean
    /// termination signal.
    Disappeared,
}

struct ActiveJob {
    key: JobKey,
    handle: thread::JoinHandle<Result<(), JobError>>,
}

/// Owns the lifecycle of a single background job.
///
/// Observation is driven by the platform's round-trip cycle: `poll` runs
/// once per round-trip and never blocks on a live worker. The monitor holds
/// no reference to the session; outcomes travel over the message channel.
#[derive(Default)]
pub struct JobMonitor {
    active: Option<ActiveJob>,
}

impl JobMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the worker thread for `descriptor` and records the job as in
    /// flight under its `(category, name)` key. At most one job may run;
    /// the state machine keeps navigation disabled while one does.
    pub fn start(
        &mut self,
        descriptor: JobDescriptor,
        channel: MessageChannel,
    ) -> Result<(), StartError> {
        if let Some(active) = &self.active {
            return Err(StartError::AlreadyRunning(
                active.key.0.clone(),
                active.key.1.clone(),
            ));
        }
        let key = descriptor.key();
        pack_info!("starting job {}/{}", key.0, key.1);
        let handle = thread::Builder::new()
            .name(format!("{}-{}", key.0, key.1))
            .spawn(move || runner::run_job(descriptor, channel))
            .map_err(|err| StartError::Spawn(err.to_string()))?;
        self.active = Some(ActiveJob { key, handle });
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Checks the worker thread without blocking. On the first poll after
    /// termination the job record is removed and the terminal notice
    /// returned; every later poll returns `None`.
    pub fn poll(&mut self) -> Option<JobNotice> {
        if !self.active.as_ref()?.handle.is_finished() {
            return None;
        }
        let active = self.active.take()?;
        let (category, name) = active.key;
        let notice = match active.handle.join() {
            Ok(Ok(())) => {
                pack_info!("job {category}/{name} finished");
                JobNotice::Finished
            }
            Ok(Err(err)) => {
                pack_debug!("job {category}/{name} terminated faulted: {err}");
                JobNotice::Disappeared
            }
            Err(_) => {
                pack_warn!("worker thread for job {category}/{name} panicked");
                JobNotice::Disappeared
            }
        };
        Some(notice)
    }
}
