//! One-shot suspend/resume confirmation embedded in a transition guard.

use crate::effect::Effect;
use crate::msg::{keys, Message};
use crate::session::WizardSession;

/// The one answer that counts as affirmative.
pub const ANSWER_YES: &str = "yes";

/// Two-phase confirmation state, persisted in the session between
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// Question posed; the suspended transition waits for the answering
    /// round-trip.
    Pending { question: String },
    /// Answer received; cleared once the caller has acted on it.
    Resolved { answer: String },
}

/// Suspends a transition on a yes/no question and resumes it one round-trip
/// later. The recorded confirmation is single-use: the transition it
/// unblocks consumes it, so the next collision asks again.
pub struct ConfirmationGate;

impl ConfirmationGate {
    /// Poses `question` and marks the guard as awaiting the answering
    /// round-trip. The caller denies the transition for now.
    pub fn ask(session: &mut WizardSession, question: impl Into<String>) -> Effect {
        let question = question.into();
        session.set_gate(GateState::Pending {
            question: question.clone(),
        });
        Effect::AskConfirm { question }
    }

    /// Consumes the pending question with the answer carried by `message`
    /// (payload key `result`).
    pub fn resume(session: &mut WizardSession, message: &Message) -> GateOutcome {
        if !matches!(session.gate(), Some(GateState::Pending { .. })) {
            return GateOutcome::NotPending;
        }
        let answer = message.get(keys::RESULT).unwrap_or("").to_string();
        let outcome = if answer == ANSWER_YES {
            GateOutcome::Affirmed
        } else {
            GateOutcome::Declined
        };
        session.set_gate(GateState::Resolved { answer });
        outcome
    }
}

/// What the resuming round-trip decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Affirmative answer; the caller re-invokes the suspended transition.
    Affirmed,
    /// Any other answer; the wizard stays on the current page.
    Declined,
    /// No confirmation was pending.
    NotPending,
}
