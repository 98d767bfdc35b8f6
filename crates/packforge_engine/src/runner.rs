//! Worker-thread body for a build job.

use pack_logging::pack_error;
use packforge_core::{keys, names, Message, MessageChannel};

use crate::context::SuppressionScope;
use crate::types::{JobDescriptor, JobError};

/// Runs the descriptor's work on the current (worker) thread.
///
/// The work executes under a [`SuppressionScope`], restored on every exit
/// path. A failure is logged in full, reported as a `job:failed` message,
/// flushed so delivery happens-before thread termination, and only then
/// propagated; the faulted thread is observed by the monitor as
/// disappeared rather than finished.
pub fn run_job(descriptor: JobDescriptor, channel: MessageChannel) -> Result<(), JobError> {
    let JobDescriptor {
        category,
        name,
        work,
    } = descriptor;

    let result = {
        let _scope = SuppressionScope::enter();
        work()
    };

    result.map_err(|err| {
        pack_error!("package generation failed for {category}/{name}: {err:?}");
        channel.send(Message::new(names::JOB_FAILED).with(keys::MESSAGE, err.to_string()));
        channel.flush();
        err
    })
}
