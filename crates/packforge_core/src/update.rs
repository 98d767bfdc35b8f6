//! Wizard transition logic: the guard into the working page, per-page side
//! effects, and the handlers behind each message name.

use std::sync::OnceLock;

use crate::effect::{Effect, PACKAGE_NAME_CONTROL};
use crate::filename;
use crate::gate::{ConfirmationGate, GateOutcome};
use crate::msg::{keys, names, Message};
use crate::registry::HandlerRegistry;
use crate::session::{Page, WizardSession};
use crate::store::ArtifactStore;

/// Category every build job is filed under.
pub const JOB_CATEGORY: &str = "build";

const ENTER_VALID_NAME: &str = "Enter a valid name for the package.";
const UNRESOLVABLE_NAME: &str =
    "Entered name could not be resolved into an absolute file path.";
const OVERWRITE_QUESTION: &str = "File exists. Do you wish to overwrite?";
const DOWNLOAD_MISSING: &str = "Could not download package";

/// Applies one message to the session and returns the effects the platform
/// must execute. Messages with no registered handler leave the session
/// untouched.
pub fn update(
    mut session: WizardSession,
    message: &Message,
    store: &dyn ArtifactStore,
) -> (WizardSession, Vec<Effect>) {
    let effects = registry().dispatch(&mut session, message, store);
    (session, effects)
}

fn registry() -> &'static HandlerRegistry {
    static REGISTRY: OnceLock<HandlerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = HandlerRegistry::new();
        registry.register(names::WIZARD_NEXT, on_next);
        registry.register(names::WIZARD_SET_NAME, on_set_name);
        registry.register(names::CONFIRM_OVERWRITE, on_confirm_overwrite);
        registry.register(names::GENERATE, on_generate);
        registry.register(names::DOWNLOAD, on_download);
        registry.register(names::JOB_FINISHED, on_job_terminated);
        registry.register(names::JOB_DISAPPEARED, on_job_terminated);
        registry.register(names::JOB_FAILED, on_job_failed);
        registry
    })
}

fn on_set_name(session: &mut WizardSession, message: &Message, _store: &dyn ArtifactStore) -> Vec<Effect> {
    session.set_package_name(message.get(keys::VALUE).unwrap_or(""));
    Vec::new()
}

fn on_next(session: &mut WizardSession, _message: &Message, store: &dyn ArtifactStore) -> Vec<Effect> {
    match session.page() {
        Page::SetName => try_enter_building(session, store),
        // Navigation is disabled while the job runs and on the final page.
        Page::Building | Page::LastPage => Vec::new(),
    }
}

/// The `SetName -> Building` guard. Denies on an invalid name, suspends on
/// a collision, and otherwise performs the page change.
fn try_enter_building(session: &mut WizardSession, store: &dyn ArtifactStore) -> Vec<Effect> {
    let name = session.package_name().trim().to_string();
    if name.is_empty() || filename::has_forbidden_chars(&name) {
        return deny_name_entry(ENTER_VALID_NAME.to_string());
    }
    let target = match store.resolve(&name) {
        Ok(path) => path,
        Err(_) => {
            return deny_name_entry(format!("{UNRESOLVABLE_NAME}\n{ENTER_VALID_NAME}"));
        }
    };
    if store.exists(&target) && !session.name_confirmed() {
        return vec![ConfirmationGate::ask(session, OVERWRITE_QUESTION)];
    }
    // Confirmation is single-use: the transition it unblocked consumes it.
    session.take_name_confirmed();
    enter_page(session, Page::Building)
}

fn deny_name_entry(text: String) -> Vec<Effect> {
    vec![
        Effect::Alert { text },
        Effect::Focus {
            control: PACKAGE_NAME_CONTROL,
        },
    ]
}

/// Side effects of entering `page`, after the transition has been allowed.
fn enter_page(session: &mut WizardSession, page: Page) -> Vec<Effect> {
    session.set_page(page);
    match page {
        // Navigation is disabled here (the view derives that from the
        // page); the job itself starts via the generate round-trip.
        Page::Building => vec![Effect::Post {
            message: Message::new(names::GENERATE),
        }],
        Page::SetName | Page::LastPage => Vec::new(),
    }
}

fn on_confirm_overwrite(
    session: &mut WizardSession,
    message: &Message,
    store: &dyn ArtifactStore,
) -> Vec<Effect> {
    match ConfirmationGate::resume(session, message) {
        GateOutcome::Affirmed => {
            session.take_gate();
            session.confirm_name();
            // Re-invoke the suspended transition; the guard now sees the
            // confirmed flag and proceeds.
            try_enter_building(session, store)
        }
        GateOutcome::Declined | GateOutcome::NotPending => {
            session.take_gate();
            Vec::new()
        }
    }
}

fn on_generate(session: &mut WizardSession, _message: &Message, _store: &dyn ArtifactStore) -> Vec<Effect> {
    let result_file = filename::ensure_package_extension(session.package_name().trim());
    session.set_result_file(result_file.clone());
    vec![Effect::StartJob {
        category: JOB_CATEGORY.to_string(),
        name: result_file.clone(),
        source_file: session.file_name().to_string(),
        result_file,
    }]
}

fn on_download(session: &mut WizardSession, _message: &Message, _store: &dyn ArtifactStore) -> Vec<Effect> {
    if session.result_file().is_empty() {
        vec![Effect::Alert {
            text: DOWNLOAD_MISSING.to_string(),
        }]
    } else {
        vec![Effect::Download {
            file: session.result_file().to_string(),
        }]
    }
}

/// Both terminal notices advance the wizard exactly as a Next click would,
/// unless a failure has been reported: a faulted worker still terminates
/// and yields its one notice, which must not move the wizard off the
/// failure panel.
fn on_job_terminated(session: &mut WizardSession, _message: &Message, _store: &dyn ArtifactStore) -> Vec<Effect> {
    if session.failure_message().is_some() {
        return Vec::new();
    }
    if session.page() == Page::Building {
        enter_page(session, Page::LastPage)
    } else {
        Vec::new()
    }
}

fn on_job_failed(session: &mut WizardSession, message: &Message, _store: &dyn ArtifactStore) -> Vec<Effect> {
    let short = message.get(keys::MESSAGE).unwrap_or("");
    session.record_failure(format!("Package generation failed: {short}."));
    Vec::new()
}
