/// What the platform renders for the current round-trip. Derived from the
/// session, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardViewModel {
    /// External name of the current page.
    pub page: &'static str,
    pub package_name: String,
    pub result_file: String,
    pub back_enabled: bool,
    pub next_enabled: bool,
    pub cancel_enabled: bool,
    /// Question of a suspended transition, shown until answered.
    pub pending_question: Option<String>,
    /// Failure panel text; the panel is visible exactly when this is set.
    pub failure_text: Option<String>,
    /// Success panel, shown on the final page when nothing failed.
    pub success_visible: bool,
}
