use super::*;

use std::sync::Arc;

use crate::session::TOKEN_KEY;
use crate::storage::{MemoryStore, SessionStore};

fn session() -> (Arc<MemoryStore>, Session) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), Session::new(store))
}

// =============================================================
// mount
// =============================================================

#[test]
fn new_guard_is_initializing_and_not_ready() {
    let guard = AuthGuard::new();
    assert_eq!(guard.state(), GuardState::Initializing);
    assert_eq!(guard.route(), ProtectedRoute { is_ready: false, is_authenticated: false });
    assert!(!guard.route().can_render());
}

#[test]
fn mount_with_token_is_ready_authenticated() {
    let (store, session) = session();
    store.set(TOKEN_KEY, "abc");
    let mut guard = AuthGuard::new();

    assert_eq!(guard.mount(&session), GuardAction::Stay);
    assert_eq!(guard.state(), GuardState::Ready { authenticated: true });
    assert!(guard.route().can_render());
}

#[test]
fn mount_without_token_redirects_once() {
    let (_, session) = session();
    let mut guard = AuthGuard::new();

    assert_eq!(guard.mount(&session), GuardAction::RedirectToLogin);
    assert_eq!(guard.route(), ProtectedRoute { is_ready: true, is_authenticated: false });
    assert_eq!(guard.mount(&session), GuardAction::Stay);
}

#[test]
fn mount_ignores_session_changes_after_first_read() {
    let (store, session) = session();
    let mut guard = AuthGuard::new();
    guard.mount(&session);

    store.set(TOKEN_KEY, "abc");
    guard.mount(&session);

    assert!(!guard.is_authenticated());
}

// =============================================================
// reevaluate
// =============================================================

#[test]
fn reevaluate_picks_up_login_from_elsewhere() {
    let (store, session) = session();
    let mut guard = AuthGuard::new();
    guard.mount(&session);

    store.set(TOKEN_KEY, "abc");
    assert_eq!(guard.reevaluate(&session), GuardAction::Stay);
    assert!(guard.is_authenticated());
}

#[test]
fn reevaluate_redirects_after_external_logout() {
    let (store, session) = session();
    store.set(TOKEN_KEY, "abc");
    let mut guard = AuthGuard::new();
    guard.mount(&session);

    store.remove(TOKEN_KEY);
    assert_eq!(guard.reevaluate(&session), GuardAction::RedirectToLogin);
    assert!(!guard.is_authenticated());
}

#[test]
fn reevaluate_does_not_repeat_redirect_while_unauthenticated() {
    let (_, session) = session();
    let mut guard = AuthGuard::new();
    assert_eq!(guard.mount(&session), GuardAction::RedirectToLogin);
    assert_eq!(guard.reevaluate(&session), GuardAction::Stay);
    assert_eq!(guard.reevaluate(&session), GuardAction::Stay);
}

#[test]
fn reevaluate_before_mount_acts_as_mount() {
    let (_, session) = session();
    let mut guard = AuthGuard::new();
    assert_eq!(guard.reevaluate(&session), GuardAction::RedirectToLogin);
    assert!(guard.is_ready());
}

#[test]
fn login_route_is_login_page() {
    assert_eq!(LOGIN_ROUTE, "/login");
}
