use super::*;
use futures::StreamExt;
use futures::executor::block_on;

#[test]
fn signed_in_maps_to_login_action() {
    let event = AuthEvent::SignedIn(UserId::new("u1"));
    assert_eq!(event.action(), AuthAction::Login(UserId::new("u1")));
}

#[test]
fn signed_out_maps_to_logout_action() {
    assert_eq!(AuthEvent::SignedOut.action(), AuthAction::Logout);
}

#[test]
fn events_arrive_in_publish_order() {
    let (feed, events) = channel();
    assert!(feed.signed_in(UserId::new("a")));
    assert!(feed.signed_out());
    drop(feed);

    let received: Vec<AuthEvent> = block_on(events.collect());
    assert_eq!(received, vec![AuthEvent::SignedIn(UserId::new("a")), AuthEvent::SignedOut]);
}

#[test]
fn cloned_feeds_share_one_stream() {
    let (feed, events) = channel();
    let other = feed.clone();
    feed.signed_out();
    other.signed_in(UserId::new("b"));
    drop((feed, other));

    let received: Vec<AuthEvent> = block_on(events.collect());
    assert_eq!(received.len(), 2);
}

#[test]
fn publish_fails_after_receiver_dropped() {
    let (feed, events) = channel();
    drop(events);
    assert!(!feed.signed_out());
}
