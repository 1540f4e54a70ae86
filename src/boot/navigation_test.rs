use super::*;

#[test]
fn new_queue_is_empty() {
    let queue = NavQueue::new();
    assert_eq!(queue.pending(), None);
    assert_eq!(queue.take(), None);
}

#[test]
fn take_returns_request_once() {
    let queue = NavQueue::new();
    queue.request("/dashboard");
    assert_eq!(queue.pending().as_deref(), Some("/dashboard"));
    assert_eq!(queue.take().as_deref(), Some("/dashboard"));
    assert_eq!(queue.take(), None);
}

#[test]
fn queue_accepts_new_request_after_take() {
    let queue = NavQueue::new();
    queue.request("/dashboard");
    assert_eq!(queue.take().as_deref(), Some("/dashboard"));
    assert_eq!(queue.pending(), None);
    queue.request("/");
    assert_eq!(queue.take().as_deref(), Some("/"));
}

#[test]
fn newer_request_replaces_older() {
    let queue = NavQueue::new();
    queue.request("/dashboard");
    queue.request("/");
    assert_eq!(queue.take().as_deref(), Some("/"));
}
