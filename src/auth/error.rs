//! Auth failure taxonomy.

use crate::net::transport::TransportError;

/// Which API call produced a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStage {
    Signup,
    Login,
    VerifyEmail,
}

impl AuthStage {
    /// Message used when the server gives none.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed",
            Self::Login => "Login failed",
            Self::VerifyEmail => "Email verification failed",
        }
    }
}

/// Every failure an auth operation can surface. `Display` is the
/// human-readable message the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No response was obtained.
    #[error("{0}")]
    Network(#[from] TransportError),

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api { stage: AuthStage, status: u16, message: String },

    /// Login succeeded at the API but the account's email is unverified.
    #[error("Email not verified. Please check your email for verification link.")]
    EmailNotVerified,

    /// A 2xx response the client could not use.
    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Stage of an API rejection, if this is one.
    #[must_use]
    pub fn stage(&self) -> Option<AuthStage> {
        match self {
            Self::Api { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// HTTP status of an API rejection, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
