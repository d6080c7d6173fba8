use super::*;
use crate::net::mock::MockTransport;
use crate::net::transport::{HttpMethod, TransportError};
use crate::session::{EMAIL_VERIFIED_KEY, TOKEN_KEY, USER_KEY};
use crate::storage::MemoryStore;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn service_with(mock: MockTransport) -> (Arc<MockTransport>, Arc<MemoryStore>, AuthService) {
    let mock = Arc::new(mock);
    let store = Arc::new(MemoryStore::new());
    let service = AuthService::new(ApiConfig::new("http://api.test", "kasuwan-gizo"), mock.clone(), store.clone());
    (mock, store, service)
}

fn creds() -> LoginCredentials {
    LoginCredentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn signup_form() -> SignupData {
    SignupData {
        business_name: "Mama Put".to_owned(),
        contact_person_name: "Amina".to_owned(),
        email: "amina@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone_number: "08012345678".to_owned(),
        business_type: "Retail".to_owned(),
        location: "Kano".to_owned(),
        ..SignupData::default()
    }
}

// =============================================================
// signup
// =============================================================

#[tokio::test]
async fn signup_success_stores_user_but_never_authenticates() {
    let payload = json!({"userId": "u1", "email": "amina@example.com", "message": "Check your email"});
    let (mock, store, service) = service_with(MockTransport::replying(201, payload.clone()));

    let result = service.signup(&signup_form()).await.unwrap();

    assert_eq!(result.raw()["userId"], "u1");
    assert_eq!(service.user(), Some(payload));
    assert!(!service.is_authenticated());
    assert!(!service.is_email_verified());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(EMAIL_VERIFIED_KEY), None);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert!(requests[0].url.ends_with("/api/v1/kasuwan-gizo/auth/signup"));
}

#[tokio::test]
async fn signup_success_with_token_in_payload_still_stores_no_token() {
    let payload = json!({"userId": "u1", "token": "early", "emailVerified": true});
    let (_, store, service) = service_with(MockTransport::replying(200, payload));

    service.signup(&signup_form()).await.unwrap();

    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!service.is_authenticated());
}

#[tokio::test]
async fn signup_numeric_user_id_stores_user_as_sent() {
    let payload = json!({"userId": 7, "email": "amina@example.com", "message": null});
    let (_, store, service) = service_with(MockTransport::replying(201, payload.clone()));

    let result = service.signup(&signup_form()).await.unwrap();

    assert_eq!(result.raw()["userId"], 7);
    assert_eq!(service.user(), Some(payload));
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn signup_failure_uses_server_message() {
    let (_, store, service) = service_with(MockTransport::replying(409, json!({"message": "Email already registered"})));

    let err = service.signup(&signup_form()).await.unwrap_err();

    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(err.stage(), Some(AuthStage::Signup));
    assert_eq!(err.status(), Some(409));
    assert!(store.is_empty());
}

#[tokio::test]
async fn signup_failure_without_message_uses_default() {
    let (_, _, service) = service_with(MockTransport::replying(500, json!({})));
    let err = service.signup(&signup_form()).await.unwrap_err();
    assert_eq!(err.to_string(), "Signup failed");
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_verified_persists_token_user_and_flag() {
    let payload = json!({"userId": "u1", "email": "a@b.com", "token": "abc", "emailVerified": true});
    let (mock, store, service) = service_with(MockTransport::replying(200, payload.clone()));

    let result = service.login(&creds()).await.unwrap();

    assert_eq!(result.issued_token(), Some("abc"));
    assert_eq!(service.token(), Some("abc".to_owned()));
    assert!(service.is_authenticated());
    assert!(service.is_email_verified());
    assert_eq!(service.user(), Some(payload));
    assert_eq!(store.get(EMAIL_VERIFIED_KEY), Some("true".to_owned()));

    let requests = mock.requests();
    assert_eq!(requests[0].body, Some(json!({"email": "a@b.com", "password": "x"})));
}

#[tokio::test]
async fn login_scenario_token_abc() {
    let (_, _, service) = service_with(MockTransport::replying(200, json!({"token": "abc", "emailVerified": true})));
    service.login(&creds()).await.unwrap();
    assert_eq!(service.token().as_deref(), Some("abc"));
    assert!(service.is_authenticated());
}

#[tokio::test]
async fn login_unverified_fails_closed() {
    let payload = json!({"userId": "u1", "token": "abc", "emailVerified": false});
    let (_, store, service) = service_with(MockTransport::replying(200, payload));

    let err = service.login(&creds()).await.unwrap_err();

    assert_eq!(err, AuthError::EmailNotVerified);
    assert_eq!(err.to_string(), "Email not verified. Please check your email for verification link.");
    assert!(store.is_empty());
    assert!(!service.is_authenticated());
}

#[tokio::test]
async fn login_missing_verified_field_fails_closed() {
    let (_, store, service) = service_with(MockTransport::replying(200, json!({"token": "abc"})));
    let err = service.login(&creds()).await.unwrap_err();
    assert_eq!(err, AuthError::EmailNotVerified);
    assert!(store.is_empty());
}

#[tokio::test]
async fn login_unverified_leaves_existing_token_unchanged() {
    let (_, store, service) = service_with(MockTransport::replying(200, json!({"token": "new", "emailVerified": false})));
    store.set(TOKEN_KEY, "old");

    service.login(&creds()).await.unwrap_err();

    assert_eq!(service.token(), Some("old".to_owned()));
}

#[tokio::test]
async fn login_unauthorized_reports_server_message() {
    let (_, _, service) = service_with(MockTransport::replying(401, json!({"message": "Invalid credentials"})));

    let err = service.login(&creds()).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.stage(), Some(AuthStage::Login));
    assert!(!service.is_authenticated());
}

#[tokio::test]
async fn login_non_json_error_body_uses_default() {
    let (mock, _, service) = service_with(MockTransport::default());
    mock.push(Ok(ApiResponse::new(502, "Bad Gateway")));
    let err = service.login(&creds()).await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn login_verified_without_token_is_invalid_response() {
    let (_, store, service) = service_with(MockTransport::replying(200, json!({"emailVerified": true})));
    let err = service.login(&creds()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn login_network_failure_surfaces_transport_error() {
    let (_, store, service) = service_with(MockTransport::failing(TransportError::Network("offline".to_owned())));
    let err = service.login(&creds()).await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn login_garbled_success_body_is_invalid_response() {
    let (mock, store, service) = service_with(MockTransport::default());
    mock.push(Ok(ApiResponse::new(200, "not json")));
    let err = service.login(&creds()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn login_numeric_user_id_authenticates() {
    let payload = json!({"token": "abc", "emailVerified": true, "userId": 42});
    let (_, _, service) = service_with(MockTransport::replying(200, payload.clone()));

    service.login(&creds()).await.unwrap();

    assert!(service.is_authenticated());
    assert_eq!(service.token(), Some("abc".to_owned()));
    assert_eq!(service.user(), Some(payload));
}

#[tokio::test]
async fn login_null_verified_flag_fails_closed() {
    let payload = json!({"token": "abc", "emailVerified": null, "userId": 42});
    let (_, store, service) = service_with(MockTransport::replying(200, payload));

    let err = service.login(&creds()).await.unwrap_err();

    assert_eq!(err, AuthError::EmailNotVerified);
    assert!(store.is_empty());
}

#[tokio::test]
async fn login_non_string_token_is_invalid_response() {
    let (_, store, service) = service_with(MockTransport::replying(200, json!({"token": 5, "emailVerified": true})));
    let err = service.login(&creds()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse(_)));
    assert!(store.is_empty());
}

// =============================================================
// verify_email
// =============================================================

#[tokio::test]
async fn verify_email_sets_flag_without_touching_token() {
    let reply = json!({"success": true, "message": "Email verified", "userId": "u1"});
    let (mock, store, service) = service_with(MockTransport::replying(200, reply));

    let result = service.verify_email("u1", "tok").await.unwrap();

    assert!(result.success());
    assert_eq!(result.message(), Some("Email verified"));
    assert!(service.is_email_verified());
    assert_eq!(service.token(), None);
    assert!(!service.is_authenticated());
    assert_eq!(store.get(USER_KEY), None);

    let requests = mock.requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert!(requests[0].url.ends_with("/auth/verify-email?userId=u1&token=tok"));
}

#[tokio::test]
async fn verify_email_keeps_existing_token() {
    let (_, store, service) = service_with(MockTransport::replying(200, json!({"success": true, "message": "ok"})));
    store.set(TOKEN_KEY, "abc");

    service.verify_email("u1", "tok").await.unwrap();

    assert_eq!(service.token(), Some("abc".to_owned()));
}

#[tokio::test]
async fn verify_email_numeric_user_id_sets_flag() {
    let reply = json!({"success": true, "message": "ok", "userId": 7});
    let (_, _, service) = service_with(MockTransport::replying(200, reply));

    let result = service.verify_email("7", "tok").await.unwrap();

    assert_eq!(result.raw()["userId"], 7);
    assert!(service.is_email_verified());
}

#[tokio::test]
async fn verify_email_null_message_sets_flag() {
    let (_, _, service) = service_with(MockTransport::replying(200, json!({"success": true, "message": null})));

    let result = service.verify_email("u1", "tok").await.unwrap();

    assert_eq!(result.message(), None);
    assert!(service.is_email_verified());
}

#[tokio::test]
async fn verify_email_failure_reports_message_and_leaves_flag() {
    let (_, _, service) = service_with(MockTransport::replying(400, json!({"message": "Token expired"})));

    let err = service.verify_email("u1", "tok").await.unwrap_err();

    assert_eq!(err.to_string(), "Token expired");
    assert_eq!(err.stage(), Some(AuthStage::VerifyEmail));
    assert!(!service.is_email_verified());
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_after_login_clears_everything() {
    let (_, store, service) =
        service_with(MockTransport::replying(200, json!({"token": "abc", "emailVerified": true})));
    service.login(&creds()).await.unwrap();

    service.logout();

    assert!(!service.is_authenticated());
    assert!(!service.is_email_verified());
    assert_eq!(service.user(), None);
    assert!(store.is_empty());
}

#[test]
fn logout_on_empty_session_is_idempotent() {
    let (_, _, service) = service_with(MockTransport::default());
    service.logout();
    service.logout();
    assert!(!service.is_authenticated());
}
