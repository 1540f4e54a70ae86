use super::*;
use crate::auth::channel;
use crate::state::auth::{AuthState, Session, UserId, is_authenticated};
use futures::executor::block_on;
use futures::stream;

#[derive(Default)]
struct FakeStore {
    state: AuthState,
    dispatched: Vec<AuthAction>,
}

impl StateContainer for FakeStore {
    fn dispatch(&mut self, action: AuthAction) {
        self.dispatched.push(action.clone());
        self.state.reduce(action);
    }

    fn snapshot(&self) -> AuthState {
        self.state.clone()
    }
}

struct FakeNavigator {
    path: String,
    visits: Vec<String>,
}

impl FakeNavigator {
    fn at(path: &str) -> Self {
        Self { path: path.to_owned(), visits: Vec::new() }
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, path: &str) {
        self.path = path.to_owned();
        self.visits.push(path.to_owned());
    }
}

struct FakeTarget {
    screen: Screen,
    renders: usize,
}

impl FakeTarget {
    fn loading() -> Self {
        Self { screen: Screen::Loading, renders: 0 }
    }
}

impl RenderTarget for FakeTarget {
    fn render(&mut self, screen: Screen) {
        self.screen = screen;
        self.renders += 1;
    }
}

fn signed_in(id: &str) -> AuthEvent {
    AuthEvent::SignedIn(UserId::new(id))
}

fn sequencer_at(path: &str) -> Sequencer<FakeStore, FakeNavigator, FakeTarget> {
    Sequencer::new(FakeStore::default(), FakeNavigator::at(path), FakeTarget::loading())
}

// =============================================================
// BootState::step
// =============================================================

#[test]
fn first_sign_in_at_root_dispatches_renders_and_navigates_in_order() {
    let transition = BootState::new().step(&signed_in("u1"), "/");
    assert_eq!(
        transition.effects,
        vec![
            Effect::Dispatch(AuthAction::Login(UserId::new("u1"))),
            Effect::RenderApp,
            Effect::Navigate("/dashboard"),
        ]
    );
}

#[test]
fn sign_in_on_deep_link_does_not_navigate() {
    let transition = BootState::new().step(&signed_in("u1"), "/settings");
    assert_eq!(
        transition.effects,
        vec![Effect::Dispatch(AuthAction::Login(UserId::new("u1"))), Effect::RenderApp]
    );
}

#[test]
fn sign_out_always_navigates_to_root() {
    for path in ["/", "/dashboard", "/settings", "/post/7"] {
        let transition = BootState::new().step(&AuthEvent::SignedOut, path);
        assert_eq!(transition.effects.last(), Some(&Effect::Navigate("/")), "from {path}");
    }
}

#[test]
fn render_is_only_requested_before_the_first_render() {
    let after_first = BootState::new().step(&AuthEvent::SignedOut, "/").state;
    let second = after_first.step(&signed_in("u1"), "/");
    assert!(!second.effects.contains(&Effect::RenderApp));
    assert_eq!(second.state, after_first);
}

#[test]
fn any_event_order_renders_exactly_once() {
    let sequences: Vec<Vec<AuthEvent>> = vec![
        vec![signed_in("a")],
        vec![AuthEvent::SignedOut],
        vec![AuthEvent::SignedOut, signed_in("a"), AuthEvent::SignedOut],
        vec![signed_in("a"), signed_in("b"), signed_in("c")],
        vec![AuthEvent::SignedOut, AuthEvent::SignedOut],
    ];
    for events in sequences {
        let mut state = BootState::new();
        let mut renders = Vec::new();
        for (i, event) in events.iter().enumerate() {
            let transition = state.step(event, "/");
            if transition.effects.contains(&Effect::RenderApp) {
                renders.push(i);
            }
            state = transition.state;
        }
        assert_eq!(renders, vec![0], "events: {events:?}");
    }
}

// =============================================================
// Sequencer::handle
// =============================================================

#[test]
fn handle_sign_in_at_root_updates_store_renders_and_goes_to_dashboard() {
    let mut seq = sequencer_at("/");
    seq.handle(&signed_in("u1"));

    assert!(is_authenticated(&seq.store().snapshot()));
    assert_eq!(seq.target().screen, Screen::App);
    assert_eq!(seq.target().renders, 1);
    assert_eq!(seq.navigator().visits, vec!["/dashboard".to_owned()]);
}

#[test]
fn handle_sign_in_on_settings_keeps_the_deep_link() {
    let mut seq = sequencer_at("/settings");
    seq.handle(&signed_in("u1"));

    assert!(seq.navigator().visits.is_empty());
    assert_eq!(seq.navigator().current_path(), "/settings");
}

#[test]
fn handle_sign_out_from_dashboard_goes_to_root() {
    let mut seq = sequencer_at("/dashboard");
    seq.handle(&AuthEvent::SignedOut);

    assert_eq!(seq.store().snapshot().session, Session::Unauthenticated);
    assert_eq!(seq.store().dispatched, vec![AuthAction::Logout]);
    assert_eq!(seq.navigator().visits, vec!["/".to_owned()]);
}

#[test]
fn handle_reads_path_after_earlier_navigation() {
    let mut seq = sequencer_at("/settings");
    seq.handle(&AuthEvent::SignedOut);
    seq.handle(&signed_in("u1"));

    assert_eq!(seq.navigator().visits, vec!["/".to_owned(), "/dashboard".to_owned()]);
}

// =============================================================
// Sequencer::run
// =============================================================

#[test]
fn no_events_leaves_loading_screen_up() {
    let seq = block_on(sequencer_at("/").run(stream::empty::<AuthEvent>()));

    assert_eq!(seq.target().screen, Screen::Loading);
    assert_eq!(seq.target().renders, 0);
    assert!(seq.store().dispatched.is_empty());
    assert!(seq.navigator().visits.is_empty());
}

#[test]
fn many_events_render_once() {
    let events = vec![signed_in("a"), AuthEvent::SignedOut, signed_in("b"), AuthEvent::SignedOut];
    let seq = block_on(sequencer_at("/").run(stream::iter(events)));

    assert_eq!(seq.target().renders, 1);
    assert_eq!(seq.store().dispatched.len(), 4);
}

#[test]
fn sign_in_then_sign_out_end_to_end() {
    let (feed, events) = channel();
    let seq = sequencer_at("/");
    assert_eq!(seq.target().screen, Screen::Loading);

    feed.signed_in(UserId::new("abc"));
    feed.signed_out();
    drop(feed);

    let seq = block_on(seq.run(events));

    assert_eq!(
        seq.store().dispatched,
        vec![AuthAction::Login(UserId::new("abc")), AuthAction::Logout]
    );
    assert_eq!(seq.store().snapshot().session, Session::Unauthenticated);
    assert_eq!(seq.target().screen, Screen::App);
    assert_eq!(seq.target().renders, 1);
    assert_eq!(seq.navigator().visits, vec!["/dashboard".to_owned(), "/".to_owned()]);
}

#[test]
fn session_is_authenticated_between_the_two_events() {
    let mut seq = sequencer_at("/");
    seq.handle(&signed_in("abc"));
    assert_eq!(
        seq.store().snapshot().session,
        Session::Authenticated { user_id: UserId::new("abc") }
    );
    seq.handle(&AuthEvent::SignedOut);
    assert!(!is_authenticated(&seq.store().snapshot()));
    assert_eq!(seq.target().renders, 1);
}
