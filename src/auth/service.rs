//! Auth service: signup, login, email verification and logout against the
//! marketplace API, with the session updated from the responses.
//!
//! DESIGN
//! ======
//! One instance is built at application start and handed to consumers
//! (Leptos context in the browser, a local in the CLI). It holds no state of
//! its own beyond the session it writes, so clones of the `Arc` are
//! interchangeable.
//!
//! INVARIANTS
//! ==========
//! - Signup never authenticates: it stores the returned user record only.
//! - Login checks verification before touching the session. An unverified
//!   account fails with [`AuthError::EmailNotVerified`] and nothing is stored.
//! - Whenever a token is written, `emailVerified = true` is written with it.
//! - Verification alone never writes a token.
//! - No operation retries.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::Arc;

use serde_json::Value;

use super::error::{AuthError, AuthStage};
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::net::types::{AuthResponse, LoginCredentials, SignupData, VerifyEmailResponse};
use crate::session::Session;
use crate::storage::SessionStore;

pub struct AuthService {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    session: Session,
}

impl AuthService {
    #[must_use]
    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>, store: Arc<dyn SessionStore>) -> Self {
        Self { config, transport, session: Session::new(store) }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Create an account. Stores the returned payload as the user record.
    ///
    /// # Errors
    ///
    /// [`AuthError::Api`] with the server's message (or `"Signup failed"`) on a
    /// non-2xx response, [`AuthError::Network`] if no response arrived.
    pub async fn signup(&self, data: &SignupData) -> Result<AuthResponse, AuthError> {
        let request = api::signup_request(&self.config, data)?;
        let resp = self.exchange(request, AuthStage::Signup).await?;
        let result = decode_account(&resp)?;

        self.session.set_user(result.raw());
        log::debug!("signup stored user record for {:?}", result.email());
        Ok(result)
    }

    /// Authenticate. Persists token, user and the verified flag only when the
    /// API reports the email as verified.
    ///
    /// # Errors
    ///
    /// [`AuthError::Api`] (default `"Login failed"`) on a non-2xx response,
    /// [`AuthError::EmailNotVerified`] for an unverified account,
    /// [`AuthError::InvalidResponse`] for a verified response without a token,
    /// [`AuthError::Network`] if no response arrived.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        let request = api::login_request(&self.config, credentials)?;
        let resp = self.exchange(request, AuthStage::Login).await?;
        let result = decode_account(&resp)?;

        if !result.email_verified() {
            return Err(AuthError::EmailNotVerified);
        }
        let Some(token) = result.issued_token() else {
            return Err(AuthError::InvalidResponse("login response carried no token".to_owned()));
        };

        self.session.set_token(token);
        self.session.set_user(result.raw());
        self.session.set_email_verified(true);
        log::debug!("login stored session for {:?}", result.email());
        Ok(result)
    }

    /// Confirm an email address. Marks the session verified; token and user
    /// are left as they were.
    ///
    /// # Errors
    ///
    /// [`AuthError::Api`] (default `"Email verification failed"`) on a non-2xx
    /// response, [`AuthError::Network`] if no response arrived.
    pub async fn verify_email(&self, user_id: &str, token: &str) -> Result<VerifyEmailResponse, AuthError> {
        let request = api::verify_email_request(&self.config, user_id, token);
        let resp = self.exchange(request, AuthStage::VerifyEmail).await?;
        let result = resp
            .json::<Value>()
            .map(VerifyEmailResponse::new)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        self.session.set_email_verified(true);
        Ok(result)
    }

    /// Drop token, user and verified flag. Idempotent.
    pub fn logout(&self) {
        self.session.clear();
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    #[must_use]
    pub fn user(&self) -> Option<Value> {
        self.session.user()
    }

    #[must_use]
    pub fn is_email_verified(&self) -> bool {
        self.session.is_email_verified()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    async fn exchange(&self, request: ApiRequest, stage: AuthStage) -> Result<ApiResponse, AuthError> {
        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            return Ok(resp);
        }
        let message = api::failure_message(&resp, stage);
        log::warn!("{stage:?} rejected with status {}: {message}", resp.status);
        Err(AuthError::Api { stage, status: resp.status, message })
    }
}

/// Parse an account payload. Only non-JSON bodies are rejected; the shape
/// is the server's business.
fn decode_account(resp: &ApiResponse) -> Result<AuthResponse, AuthError> {
    resp.json::<Value>()
        .map(AuthResponse::new)
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))
}
