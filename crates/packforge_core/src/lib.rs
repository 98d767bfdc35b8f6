//! Packforge core: pure wizard state machine, messaging, and naming rules.
mod channel;
mod effect;
mod filename;
mod gate;
mod msg;
mod registry;
mod session;
mod store;
mod update;
mod view;

pub use channel::MessageChannel;
pub use effect::{Effect, PACKAGE_NAME_CONTROL};
pub use filename::{
    cleanup_file_name, default_package_file_name, ensure_package_extension, has_forbidden_chars,
    PACKAGE_EXTENSION, UNNAMED_PACKAGE,
};
pub use gate::{ConfirmationGate, GateOutcome, GateState, ANSWER_YES};
pub use msg::{keys, names, Message};
pub use registry::{Handler, HandlerRegistry};
pub use session::{Page, SessionSnapshot, WizardSession};
pub use store::{ArtifactStore, ResolveError};
pub use update::{update, JOB_CATEGORY};
pub use view::WizardViewModel;
