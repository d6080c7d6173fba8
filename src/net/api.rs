//! Request builders and failure-body interpretation for the auth endpoints.
//!
//! | Operation    | Request                                             |
//! |--------------|-----------------------------------------------------|
//! | signup       | `POST /api/v1/{tenant}/auth/signup`                 |
//! | login        | `POST /api/v1/{tenant}/auth/login`                  |
//! | verify email | `GET /api/v1/{tenant}/auth/verify-email?userId=&token=` |

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::transport::{ApiRequest, ApiResponse, TransportError};
use super::types::{ErrorBody, LoginCredentials, SignupData};
use crate::auth::error::AuthStage;
use crate::config::ApiConfig;

/// # Errors
///
/// Returns [`TransportError::Encode`] if the form cannot be serialized.
pub fn signup_request(config: &ApiConfig, data: &SignupData) -> Result<ApiRequest, TransportError> {
    let body = serde_json::to_value(data).map_err(|e| TransportError::Encode(e.to_string()))?;
    Ok(ApiRequest::post(config.auth_url("signup"), body))
}

/// # Errors
///
/// Returns [`TransportError::Encode`] if the credentials cannot be serialized.
pub fn login_request(config: &ApiConfig, credentials: &LoginCredentials) -> Result<ApiRequest, TransportError> {
    let body = serde_json::to_value(credentials).map_err(|e| TransportError::Encode(e.to_string()))?;
    Ok(ApiRequest::post(config.auth_url("login"), body))
}

/// Both identifiers travel as query parameters.
#[must_use]
pub fn verify_email_request(config: &ApiConfig, user_id: &str, token: &str) -> ApiRequest {
    let url = format!(
        "{}?userId={}&token={}",
        config.auth_url("verify-email"),
        urlencoding::encode(user_id),
        urlencoding::encode(token),
    );
    ApiRequest::get(url)
}

/// Message for a non-2xx response: the server's `message` when the body
/// carries one, otherwise the stage's generic fallback.
#[must_use]
pub fn failure_message(resp: &ApiResponse, stage: AuthStage) -> String {
    resp.json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| stage.default_message().to_owned())
}
