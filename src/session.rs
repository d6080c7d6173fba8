//! The persisted session: token, opaque user record, email-verified flag.
//!
//! The three values occupy three independent storage slots. Only
//! [`crate::AuthService`] writes them; everything else reads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::storage::{self, SessionStore};

pub const TOKEN_KEY: &str = "kg_auth_token";
pub const USER_KEY: &str = "kg_auth_user";
pub const EMAIL_VERIFIED_KEY: &str = "kg_email_verified";

/// Typed view over the session slots of a [`SessionStore`].
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("email_verified", &self.is_email_verified())
            .finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Underlying store, shared with anything else persisted by the client.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Last profile/account payload returned by signup or login.
    #[must_use]
    pub fn user(&self) -> Option<Value> {
        storage::load_json(self.store.as_ref(), USER_KEY)
    }

    /// Email address from the stored user record, if it has one.
    #[must_use]
    pub fn user_email(&self) -> Option<String> {
        self.user()?
            .get("email")
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
            .map(ToOwned::to_owned)
    }

    #[must_use]
    pub fn is_email_verified(&self) -> bool {
        storage::load_json(self.store.as_ref(), EMAIL_VERIFIED_KEY).unwrap_or(false)
    }

    /// A token is present. No expiry or server-side revalidation.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    pub(crate) fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub(crate) fn set_user(&self, user: &Value) {
        storage::save_json(self.store.as_ref(), USER_KEY, user);
    }

    pub(crate) fn set_email_verified(&self, verified: bool) {
        storage::save_json(self.store.as_ref(), EMAIL_VERIFIED_KEY, &verified);
    }

    /// Remove all three slots. Safe to call on an empty session.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.store.remove(EMAIL_VERIFIED_KEY);
    }
}
