//! Round-trip driver: one console command per cycle, messages dispatched
//! through the core state machine, effects executed by the platform.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use pack_logging::pack_warn;
use packforge_core::{
    default_package_file_name, keys, names, update, Message, MessageChannel, Page, WizardSession,
};
use packforge_engine::{load_project, BuildSettings, DirArtifactStore, JobNotice};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::session_store;
use super::ui::{constants, render};

/// Poll cadence while a job runs and navigation is disabled.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let settings = BuildSettings::default();
    let store = DirArtifactStore::new(&settings);
    let channel = MessageChannel::new();
    let mut runner = EffectRunner::new(settings, channel.clone());

    // The source argument is read once, on first load only; a restored
    // session keeps whatever it already carries.
    let source = std::env::args().nth(1);
    let mut session = session_store::load_session(Path::new("."))
        .unwrap_or_else(|| first_load(source.as_deref()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut round_trip = 0_u64;

    render::page(&session.view());

    loop {
        round_trip += 1;
        pack_logging::set_round_trip(round_trip);

        // A terminal job notice enters the wizard like any other message.
        if let Some(notice) = runner.poll() {
            let name = match notice {
                JobNotice::Finished => names::JOB_FINISHED,
                JobNotice::Disappeared => names::JOB_DISAPPEARED,
            };
            channel.send(Message::new(name));
        }

        // Dispatch until the channel settles; posted messages re-enter it.
        loop {
            let pending = channel.drain();
            if pending.is_empty() {
                break;
            }
            for message in pending {
                let (next, effects) = update(std::mem::take(&mut session), &message, &store);
                session = next;
                runner.run(effects);
            }
        }

        if session.consume_dirty() {
            render::page(&session.view());
        }
        session_store::save_session(Path::new("."), &session);

        // While the job runs the wizard only ticks.
        if runner.job_running() {
            thread::sleep(TICK);
            continue;
        }

        print!("{}", constants::PROMPT);
        io::stdout().flush().ok();
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();
        if command == constants::CMD_QUIT {
            break;
        }
        if let Some(message) = command_message(command, &session) {
            channel.send(message);
        }
    }

    // A finished wizard does not resume on the next launch.
    if session.page() == Page::LastPage {
        session_store::clear_session(Path::new("."));
    }
    Ok(())
}

/// First page load: seed the session from the source argument and prefill
/// the name field from the project manifest.
fn first_load(source: Option<&str>) -> WizardSession {
    let mut session = WizardSession::new();
    let Some(source) = source else {
        return session;
    };
    session.set_file_name(source);
    match load_project(Path::new(source)) {
        Ok(project) => {
            session.set_package_name(default_package_file_name(
                &project.metadata.package_name,
                &project.metadata.version,
            ));
        }
        Err(err) => pack_warn!("could not load project {source}: {err}"),
    }
    session
}

/// Maps one line of console input to a wizard message. Unknown input is fed
/// through as a raw message; the registry drops unregistered names.
fn command_message(command: &str, session: &WizardSession) -> Option<Message> {
    if command.is_empty() {
        return None;
    }
    if session.view().pending_question.is_some() && (command == "yes" || command == "no") {
        return Some(Message::new(names::CONFIRM_OVERWRITE).with(keys::RESULT, command));
    }
    if let Some(value) = command.strip_prefix(constants::CMD_NAME_PREFIX) {
        return Some(Message::new(names::WIZARD_SET_NAME).with(keys::VALUE, value));
    }
    match command {
        constants::CMD_NEXT => Some(Message::new(names::WIZARD_NEXT)),
        constants::CMD_DOWNLOAD => Some(Message::new(names::DOWNLOAD)),
        other => Some(Message::parse(other)),
    }
}
