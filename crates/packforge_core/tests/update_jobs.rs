use std::path::{Path, PathBuf};
use std::sync::Once;

use packforge_core::{
    keys, names, update, ArtifactStore, Effect, Message, Page, ResolveError, WizardSession,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pack_logging::initialize_for_tests);
}

struct FakeStore;

impl ArtifactStore for FakeStore {
    fn resolve(&self, file_name: &str) -> Result<PathBuf, ResolveError> {
        Ok(PathBuf::from("/packages").join(file_name))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

fn building_session(store: &dyn ArtifactStore) -> WizardSession {
    let mut session = WizardSession::new();
    session.set_package_name("My Package");
    let (session, _) = update(session, &Message::new(names::WIZARD_NEXT), store);
    let (session, _) = update(session, &Message::new(names::GENERATE), store);
    session
}

#[test]
fn finished_advances_like_a_next_click() {
    init_logging();
    let store = FakeStore;
    let session = building_session(&store);

    let (session, effects) = update(session, &Message::new(names::JOB_FINISHED), &store);
    assert_eq!(session.page(), Page::LastPage);
    assert!(effects.is_empty());

    let view = session.view();
    assert!(view.success_visible);
    assert!(!view.back_enabled);
    assert_eq!(view.failure_text, None);
}

#[test]
fn disappeared_advances_like_a_next_click() {
    init_logging();
    let store = FakeStore;
    let session = building_session(&store);

    let (session, effects) = update(session, &Message::new(names::JOB_DISAPPEARED), &store);
    assert_eq!(session.page(), Page::LastPage);
    assert!(effects.is_empty());
}

#[test]
fn failure_shows_the_panel_and_keeps_the_page() {
    init_logging();
    let store = FakeStore;
    let session = building_session(&store);

    let failed = Message::new(names::JOB_FAILED).with(keys::MESSAGE, "disk full");
    let (session, effects) = update(session, &failed, &store);

    assert_eq!(session.page(), Page::Building);
    assert!(effects.is_empty());

    let view = session.view();
    assert_eq!(
        view.failure_text.as_deref(),
        Some("Package generation failed: disk full.")
    );
    assert!(!view.success_visible);
}

#[test]
fn terminal_notice_after_a_failure_does_not_advance() {
    init_logging();
    let store = FakeStore;
    let session = building_session(&store);

    let failed = Message::new(names::JOB_FAILED).with(keys::MESSAGE, "disk full");
    let (session, _) = update(session, &failed, &store);
    // The faulted worker still terminates and yields its one notice.
    let (session, effects) = update(session, &Message::new(names::JOB_DISAPPEARED), &store);

    assert_eq!(session.page(), Page::Building);
    assert!(effects.is_empty());
    assert_eq!(
        session.view().failure_text.as_deref(),
        Some("Package generation failed: disk full.")
    );
}

#[test]
fn job_messages_off_the_working_page_are_ignored() {
    init_logging();
    let store = FakeStore;
    let session = WizardSession::new();

    let (session, effects) = update(session, &Message::new(names::JOB_FINISHED), &store);
    assert_eq!(session.page(), Page::SetName);
    assert!(effects.is_empty());
}

#[test]
fn download_hands_out_the_result_file() {
    init_logging();
    let store = FakeStore;
    let session = building_session(&store);

    let (_, effects) = update(session, &Message::new(names::DOWNLOAD), &store);
    assert_eq!(
        effects,
        vec![Effect::Download {
            file: "My Package.zip".to_string(),
        }]
    );
}

#[test]
fn download_without_a_result_alerts() {
    init_logging();
    let store = FakeStore;
    let session = WizardSession::new();

    let (_, effects) = update(session, &Message::new(names::DOWNLOAD), &store);
    assert_eq!(
        effects,
        vec![Effect::Alert {
            text: "Could not download package".to_string(),
        }]
    );
}
