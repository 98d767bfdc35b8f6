//! Session persistence between round-trips.
//!
//! The wizard session survives process restarts the way server properties
//! survive postbacks: as a snapshot written to the working directory.

use std::fs;
use std::path::Path;

use pack_logging::{pack_info, pack_warn};
use packforge_core::{SessionSnapshot, WizardSession};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".packforge_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    page: String,
    package_name: String,
    file_name: String,
    result_file: String,
    name_confirmed: bool,
    pending_question: Option<String>,
    failure_message: Option<String>,
}

impl From<SessionSnapshot> for PersistedSession {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            page: snapshot.page,
            package_name: snapshot.package_name,
            file_name: snapshot.file_name,
            result_file: snapshot.result_file,
            name_confirmed: snapshot.name_confirmed,
            pending_question: snapshot.pending_question,
            failure_message: snapshot.failure_message,
        }
    }
}

impl From<PersistedSession> for SessionSnapshot {
    fn from(persisted: PersistedSession) -> Self {
        Self {
            page: persisted.page,
            package_name: persisted.package_name,
            file_name: persisted.file_name,
            result_file: persisted.result_file,
            name_confirmed: persisted.name_confirmed,
            pending_question: persisted.pending_question,
            failure_message: persisted.failure_message,
        }
    }
}

pub(crate) fn load_session(dir: &Path) -> Option<WizardSession> {
    let path = dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            pack_warn!("Failed to read persisted session from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedSession = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            pack_warn!("Failed to parse persisted session from {:?}: {}", path, err);
            return None;
        }
    };

    pack_info!("Restored wizard session from {:?}", path);
    Some(WizardSession::from_snapshot(persisted.into()))
}

pub(crate) fn save_session(dir: &Path, session: &WizardSession) {
    let persisted: PersistedSession = session.snapshot().into();
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            pack_warn!("Failed to serialize wizard session: {}", err);
            return;
        }
    };
    if let Err(err) = fs::write(dir.join(SESSION_FILENAME), content) {
        pack_warn!("Failed to persist wizard session: {}", err);
    }
}

pub(crate) fn clear_session(dir: &Path) {
    let path = dir.join(SESSION_FILENAME);
    if let Err(err) = fs::remove_file(&path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            pack_warn!("Failed to remove persisted session {:?}: {}", path, err);
        }
    }
}
