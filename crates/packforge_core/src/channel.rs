use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

use crate::msg::Message;

/// The sole cross-thread path between background workers and the wizard's
/// dispatch loop.
///
/// `send` may be called from any thread; the dispatch side calls `drain`
/// once per round-trip. `flush` blocks its caller until everything sent so
/// far has been drained, which gives a failure message a happens-before
/// edge over the sending thread's termination.
#[derive(Clone)]
pub struct MessageChannel {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    state: Mutex<QueueState>,
    drained: Condvar,
}

#[derive(Default)]
struct QueueState {
    queue: VecDeque<Message>,
    sent: u64,
    taken: u64,
}

impl MessageChannel {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner::default()),
        }
    }

    /// Enqueues a message for the dispatch side. Messages from one sender
    /// arrive in send order.
    pub fn send(&self, message: Message) {
        let mut state = self.inner.state.lock().expect("lock message queue");
        state.queue.push_back(message);
        state.sent += 1;
    }

    /// Takes every queued message, in arrival order, and wakes any flusher
    /// whose watermark has been reached.
    pub fn drain(&self) -> Vec<Message> {
        let mut state = self.inner.state.lock().expect("lock message queue");
        let messages: Vec<Message> = state.queue.drain(..).collect();
        state.taken = state.sent;
        drop(state);
        self.inner.drained.notify_all();
        messages
    }

    /// Blocks until every message sent before this call has been handed to
    /// the dispatch side.
    pub fn flush(&self) {
        let mut state = self.inner.state.lock().expect("lock message queue");
        let watermark = state.sent;
        while state.taken < watermark {
            state = self.inner.drained.wait(state).expect("lock message queue");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .state
            .lock()
            .expect("lock message queue")
            .queue
            .is_empty()
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new()
    }
}
