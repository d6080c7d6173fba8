//! Protected-route guard as an explicit state machine.
//!
//! ```text
//! Initializing --mount--> Ready { authenticated: true }
//!              \--mount--> Ready { authenticated: false }  => redirect to login (once)
//! ```
//!
//! `mount` reads the session exactly once. Nothing is polled: a token written
//! or removed after mount is only seen when the owner calls
//! [`AuthGuard::reevaluate`] (e.g. from a storage-change subscription) or
//! mounts a fresh guard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;

/// Route the guard sends unauthenticated visitors to.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Initializing,
    Ready {
        authenticated: bool,
    },
}

/// Side effect the owner must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Stay,
    RedirectToLogin,
}

/// What a protected page needs to choose between placeholder and content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProtectedRoute {
    pub is_ready: bool,
    pub is_authenticated: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthGuard {
    state: GuardState,
    redirected: bool,
}

impl AuthGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Leave `Initializing`. Later calls are ignored.
    pub fn mount(&mut self, session: &Session) -> GuardAction {
        if self.state != GuardState::Initializing {
            return GuardAction::Stay;
        }
        self.settle(session.is_authenticated())
    }

    /// Re-read the session. Redirects again only after the session was seen
    /// authenticated in between, so a steady unauthenticated state redirects once.
    pub fn reevaluate(&mut self, session: &Session) -> GuardAction {
        if self.state == GuardState::Initializing {
            return self.mount(session);
        }
        self.settle(session.is_authenticated())
    }

    fn settle(&mut self, authenticated: bool) -> GuardAction {
        self.state = GuardState::Ready { authenticated };
        if authenticated {
            self.redirected = false;
            return GuardAction::Stay;
        }
        if self.redirected {
            return GuardAction::Stay;
        }
        self.redirected = true;
        GuardAction::RedirectToLogin
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, GuardState::Ready { .. })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GuardState::Ready { authenticated: true })
    }

    /// `{ is_ready, is_authenticated }`; both false while initializing.
    #[must_use]
    pub fn route(&self) -> ProtectedRoute {
        ProtectedRoute { is_ready: self.is_ready(), is_authenticated: self.is_authenticated() }
    }
}

impl ProtectedRoute {
    /// Content may render.
    #[must_use]
    pub fn can_render(self) -> bool {
        self.is_ready && self.is_authenticated
    }
}
