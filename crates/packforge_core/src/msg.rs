use std::collections::BTreeMap;
use std::fmt;

/// Message names the wizard's handler registry understands.
pub mod names {
    /// User clicked Next.
    pub const WIZARD_NEXT: &str = "wizard:next";
    /// User edited the package-name field (payload key `value`).
    pub const WIZARD_SET_NAME: &str = "wizard:set-name";
    /// Resuming round-trip of the overwrite confirmation (payload key `result`).
    pub const CONFIRM_OVERWRITE: &str = "confirm:overwrite";
    /// Entering the working page requests a job start.
    pub const GENERATE: &str = "generate";
    /// User requested the finished artifact.
    pub const DOWNLOAD: &str = "download";
    /// Worker thread terminated cleanly.
    pub const JOB_FINISHED: &str = "job:finished";
    /// Worker thread terminated faulted, or its record went away.
    pub const JOB_DISAPPEARED: &str = "job:disappeared";
    /// Worker reported a failure before terminating (payload key `message`).
    pub const JOB_FAILED: &str = "job:failed";
}

/// Well-known payload keys.
pub mod keys {
    /// New value of an edited field.
    pub const VALUE: &str = "value";
    /// Answer carried by a confirmation round-trip.
    pub const RESULT: &str = "result";
    /// Short failure text carried by `job:failed`.
    pub const MESSAGE: &str = "message";
}

/// A named, keyed-payload message.
///
/// Wire form is `name` or `name(key=value, key=value)`, the shape both the
/// dispatch loop and the worker thread exchange. Delivery is at-least-once
/// within a session and FIFO per sender; a name with no registered handler
/// is dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    name: String,
    payload: BTreeMap<String, String>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: BTreeMap::new(),
        }
    }

    /// Adds one payload entry; later entries win on key collision.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.payload.get(key).map(String::as_str)
    }

    /// Parses the wire form. Anything that is not `name(pairs)` is taken as
    /// a bare name; a pair without `=` becomes a key with an empty value.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let Some(open) = text.find('(') else {
            return Message::new(text);
        };
        if !text.ends_with(')') {
            return Message::new(text);
        }
        let mut message = Message::new(&text[..open]);
        for pair in text[open + 1..text.len() - 1].split(',') {
            let pair = pair.trim_start();
            if pair.is_empty() {
                continue;
            }
            message = match pair.split_once('=') {
                Some((key, value)) => message.with(key.trim(), value),
                None => message.with(pair.trim_end(), ""),
            };
        }
        message
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.payload.is_empty() {
            return write!(f, "{}", self.name);
        }
        let pairs: Vec<String> = self
            .payload
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        write!(f, "{}({})", self.name, pairs.join(", "))
    }
}
