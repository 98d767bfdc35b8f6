use std::collections::BTreeMap;

use crate::effect::Effect;
use crate::msg::Message;
use crate::session::WizardSession;
use crate::store::ArtifactStore;

/// A registered message handler.
pub type Handler = fn(&mut WizardSession, &Message, &dyn ArtifactStore) -> Vec<Effect>;

/// Exact-name handler lookup for the wizard's dispatch loop.
///
/// A message whose name has no registered handler is dropped silently;
/// that is the contract, not an error.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<&'static str, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for exact matches of `name`. The last
    /// registration for a name wins.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Dispatches one message: the effects of its handler, or nothing when
    /// no handler matches.
    pub fn dispatch(
        &self,
        session: &mut WizardSession,
        message: &Message,
        store: &dyn ArtifactStore,
    ) -> Vec<Effect> {
        match self.handlers.get(message.name()) {
            Some(handler) => handler(session, message, store),
            None => Vec::new(),
        }
    }
}
