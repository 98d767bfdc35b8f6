use crate::gate::GateState;
use crate::view::WizardViewModel;

/// Ordered wizard pages. `as_str` yields the fixed external names the
/// transition tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    SetName,
    Building,
    LastPage,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::SetName => "SetName",
            Page::Building => "Building",
            Page::LastPage => "LastPage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SetName" => Some(Page::SetName),
            "Building" => Some(Page::Building),
            "LastPage" => Some(Page::LastPage),
            _ => None,
        }
    }
}

/// State scoped to one wizard instance.
///
/// Exactly one session exists per active wizard. It is mutated only by the
/// dispatch thread between round-trips; the worker thread never touches it
/// and reports through the message channel instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardSession {
    page: Page,
    package_name: String,
    file_name: String,
    result_file: String,
    name_confirmed: bool,
    gate: Option<GateState>,
    failure_message: Option<String>,
    dirty: bool,
}

/// Round-trip snapshot of a session, exchanged with the platform's
/// persistence layer. Only the `Pending` phase of a confirmation survives a
/// round-trip, so the gate is carried as its question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub page: String,
    pub package_name: String,
    pub file_name: String,
    pub result_file: String,
    pub name_confirmed: bool,
    pub pending_question: Option<String>,
    pub failure_message: Option<String>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        self.page = page;
        self.mark_dirty();
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn set_package_name(&mut self, value: impl Into<String>) {
        self.package_name = value.into();
        self.mark_dirty();
    }

    /// Source path, read once on first load and never rewritten.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, value: impl Into<String>) {
        self.file_name = value.into();
    }

    /// Output artifact name, set when the job starts and consumed by the
    /// download handler.
    pub fn result_file(&self) -> &str {
        &self.result_file
    }

    pub(crate) fn set_result_file(&mut self, value: impl Into<String>) {
        self.result_file = value.into();
        self.mark_dirty();
    }

    pub fn name_confirmed(&self) -> bool {
        self.name_confirmed
    }

    pub(crate) fn confirm_name(&mut self) {
        self.name_confirmed = true;
    }

    /// Consumes the single-use confirmation flag.
    pub(crate) fn take_name_confirmed(&mut self) -> bool {
        std::mem::take(&mut self.name_confirmed)
    }

    pub fn gate(&self) -> Option<&GateState> {
        self.gate.as_ref()
    }

    pub(crate) fn set_gate(&mut self, state: GateState) {
        self.gate = Some(state);
        self.mark_dirty();
    }

    pub(crate) fn take_gate(&mut self) -> Option<GateState> {
        self.gate.take()
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    pub(crate) fn record_failure(&mut self, text: String) {
        self.failure_message = Some(text);
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and clears the re-render flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> WizardViewModel {
        let pending_question = match &self.gate {
            Some(GateState::Pending { question }) => Some(question.clone()),
            _ => None,
        };
        WizardViewModel {
            page: self.page.as_str(),
            package_name: self.package_name.clone(),
            result_file: self.result_file.clone(),
            // There is no page behind SetName, and both later pages pin the
            // user: nothing may interrupt a running job, and a finished
            // wizard is not re-entered.
            back_enabled: false,
            next_enabled: self.page != Page::Building,
            cancel_enabled: self.page != Page::Building,
            pending_question,
            failure_text: self.failure_message.clone(),
            success_visible: self.page == Page::LastPage && self.failure_message.is_none(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let pending_question = match &self.gate {
            Some(GateState::Pending { question }) => Some(question.clone()),
            _ => None,
        };
        SessionSnapshot {
            page: self.page.as_str().to_string(),
            package_name: self.package_name.clone(),
            file_name: self.file_name.clone(),
            result_file: self.result_file.clone(),
            name_confirmed: self.name_confirmed,
            pending_question,
            failure_message: self.failure_message.clone(),
        }
    }

    /// Restores a session from a persisted snapshot. An unknown page name
    /// falls back to the first page.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            page: Page::from_name(&snapshot.page).unwrap_or_default(),
            package_name: snapshot.package_name,
            file_name: snapshot.file_name,
            result_file: snapshot.result_file,
            name_confirmed: snapshot.name_confirmed,
            gate: snapshot
                .pending_question
                .map(|question| GateState::Pending { question }),
            failure_message: snapshot.failure_message,
            dirty: false,
        }
    }
}
