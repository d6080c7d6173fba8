//! Render-facing view of the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never read storage while rendering: the app refreshes this
//! snapshot after hydration and after every login or logout, and the header,
//! sidebar and dashboard read it from context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use kasuwa::config::ApiConfig;
use kasuwa::net::transport::default_transport;
use kasuwa::storage::default_store;
use kasuwa::{AuthService, Session};

/// Session snapshot used for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub email_verified: bool,
    pub email: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            email_verified: session.is_email_verified(),
            email: session.user_email(),
        }
    }

    /// Name shown in the sidebar footer.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or("Merchant")
    }
}

/// Auth service for this build: browser storage and `fetch` when hydrated,
/// no-op storage and an offline transport during server render.
#[must_use]
pub fn build_service() -> Arc<AuthService> {
    Arc::new(AuthService::new(ApiConfig::from_build_env(), default_transport(), default_store()))
}
