use crate::msg::Message;

/// Control id of the package-name input, the target of validation focus.
pub const PACKAGE_NAME_CONTROL: &str = "PackageName";

/// Imperative actions the platform executes on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a user-facing alert.
    Alert { text: String },
    /// Move input focus to a named control.
    Focus { control: &'static str },
    /// Present the suspended transition's yes/no question.
    AskConfirm { question: String },
    /// Start the background build job described by these fields.
    StartJob {
        category: String,
        name: String,
        source_file: String,
        result_file: String,
    },
    /// Hand the finished artifact to the user.
    Download { file: String },
    /// Feed a message back into the wizard's channel.
    Post { message: Message },
}
