//! Wire DTOs for the marketplace auth endpoints.
//!
//! DESIGN
//! ======
//! Request types follow the API's camelCase JSON. Response types wrap the raw
//! body so the payload persisted as the session's user record is exactly what
//! the server sent, whatever its field types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields submitted when a merchant creates an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub business_name: String,
    pub contact_person_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub business_type: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Email + password pair for `POST .../auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Account payload returned by signup and login.
///
/// The server owns the shape, so the body is kept as raw JSON and only read
/// through lenient accessors. A field of an unexpected type reads as absent
/// instead of failing the call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthResponse {
    raw: Value,
}

impl AuthResponse {
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Body exactly as the server sent it; persisted as the user record.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// `emailVerified` by truthiness: absent, `null`, `false`, `0` and `""`
    /// all mean unverified.
    #[must_use]
    pub fn email_verified(&self) -> bool {
        self.raw.get("emailVerified").is_some_and(is_truthy)
    }

    /// Non-empty string token, if the server issued one.
    #[must_use]
    pub fn issued_token(&self) -> Option<&str> {
        str_field(&self.raw, "token").filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        str_field(&self.raw, "email")
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        str_field(&self.raw, "message")
    }
}

/// Result of `GET .../auth/verify-email`, kept as raw JSON like
/// [`AuthResponse`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerifyEmailResponse {
    raw: Value,
}

impl VerifyEmailResponse {
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.raw.get("success").is_some_and(is_truthy)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        str_field(&self.raw, "message")
    }
}

fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

/// JSON truthiness as the API's other clients read it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Error body returned with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
