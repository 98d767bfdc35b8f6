use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use packforge_core::{Message, MessageChannel};

#[test]
fn messages_arrive_in_send_order() {
    let channel = MessageChannel::new();
    channel.send(Message::new("first"));
    channel.send(Message::new("second"));
    channel.send(Message::new("third"));

    let names: Vec<String> = channel
        .drain()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn drain_takes_everything() {
    let channel = MessageChannel::new();
    channel.send(Message::new("only"));

    assert_eq!(channel.drain().len(), 1);
    assert!(channel.drain().is_empty());
    assert!(channel.is_empty());
}

#[test]
fn send_is_cross_thread_safe() {
    let channel = MessageChannel::new();
    let sender = channel.clone();
    let worker = thread::spawn(move || {
        sender.send(Message::new("from-worker").with("message", "hi"));
    });
    worker.join().unwrap();

    let messages = channel.drain();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name(), "from-worker");
    assert_eq!(messages[0].get("message"), Some("hi"));
}

#[test]
fn flush_blocks_until_the_dispatch_side_drains() {
    let channel = MessageChannel::new();
    let flushed = Arc::new(AtomicBool::new(false));

    let sender = channel.clone();
    let flag = Arc::clone(&flushed);
    let worker = thread::spawn(move || {
        sender.send(Message::new("job:failed").with("message", "disk full"));
        sender.flush();
        flag.store(true, Ordering::SeqCst);
    });

    // Undrained, the flusher must still be parked.
    thread::sleep(Duration::from_millis(50));
    assert!(!flushed.load(Ordering::SeqCst));

    let messages = channel.drain();
    assert_eq!(messages.len(), 1);

    worker.join().unwrap();
    assert!(flushed.load(Ordering::SeqCst));
}

#[test]
fn flush_with_nothing_pending_returns_immediately() {
    let channel = MessageChannel::new();
    channel.flush();

    channel.send(Message::new("late"));
    channel.drain();
    channel.flush();
}
