//! Email verification.
//!
//! Arriving from the emailed link (`?userId=..&token=..`) verifies right away.
//! Otherwise the page tells the merchant to check their inbox and offers a
//! manual form for pasting the two values.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use std::sync::Arc;
use std::time::Duration;

use kasuwa::AuthService;
use kasuwa::auth::guard::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

pub const VERIFY_ROUTE: &str = "/auth/verify";

/// Pause before moving on to login after a successful verification.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifyStatus {
    #[default]
    Waiting,
    Verifying,
    Success,
    Error,
}

/// Both verification values, trimmed and non-empty.
pub fn verification_params(user_id: Option<&str>, token: Option<&str>) -> Option<(String, String)> {
    let user_id = user_id.map(str::trim).filter(|v| !v.is_empty())?;
    let token = token.map(str::trim).filter(|v| !v.is_empty())?;
    Some((user_id.to_owned(), token.to_owned()))
}

/// Manual form submission: both fields required.
pub fn validate_manual_input(user_id: &str, token: &str) -> Result<(String, String), &'static str> {
    verification_params(Some(user_id), Some(token)).ok_or("Please provide both User ID and verification token")
}

/// Inbox hint for the waiting state.
pub fn check_email_message(email: Option<&str>) -> String {
    match email {
        Some(email) => format!("We sent a verification link to {email}. Click the link to verify your email."),
        None => "We sent a verification link to your email address. Click the link to verify your email.".to_owned(),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let service = expect_context::<Arc<AuthService>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let status = RwSignal::new(VerifyStatus::Waiting);
    let message = RwSignal::new(String::new());
    let email = RwSignal::new(None::<String>);
    let user_id_input = RwSignal::new(String::new());
    let token_input = RwSignal::new(String::new());

    // Set from the emailed link or the manual form; each write runs one attempt.
    let request = RwSignal::new(None::<(String, String)>);

    let session = service.session().clone();
    Effect::new(move || {
        let params = query.get();
        match verification_params(params.get("userId").as_deref(), params.get("token").as_deref()) {
            Some(pair) => request.set(Some(pair)),
            None => email.set(session.user_email()),
        }
    });

    Effect::new(move || {
        let Some((user_id, token)) = request.get() else {
            return;
        };
        status.set(VerifyStatus::Verifying);
        message.set("Verifying your email...".to_owned());
        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match service.verify_email(&user_id, &token).await {
                Ok(_) => {
                    status.set(VerifyStatus::Success);
                    message.set("Email verified successfully! Redirecting to login...".to_owned());
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    status.set(VerifyStatus::Error);
                    message.set(e.to_string());
                }
            }
        });
    });

    let on_manual = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_manual_input(&user_id_input.get(), &token_input.get()) {
            Ok(pair) => request.set(Some(pair)),
            Err(msg) => message.set(msg.to_owned()),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--verify">
                <h1>"Verify Your Email"</h1>
                <p class="auth-card__subtitle">"Complete your account setup"</p>
                <Show when=move || status.get() == VerifyStatus::Waiting>
                    <div class="verify-notice">
                        <h3>"Check your email"</h3>
                        <p>{move || check_email_message(email.get().as_deref())}</p>
                    </div>
                    <h2>"Or verify manually"</h2>
                    <p>"If you didn't receive the email, you can paste the verification details here:"</p>
                    <form class="auth-form" on:submit=on_manual>
                        <label class="auth-label">"User ID"</label>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Your user ID"
                            prop:value=move || user_id_input.get()
                            on:input=move |ev| user_id_input.set(event_target_value(&ev))
                        />
                        <label class="auth-label">"Verification Token"</label>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Your verification token"
                            prop:value=move || token_input.get()
                            on:input=move |ev| token_input.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit">"Verify Email"</button>
                    </form>
                    <Show when=move || !message.get().is_empty()>
                        <p class="auth-error">{move || message.get()}</p>
                    </Show>
                </Show>
                <Show when=move || status.get() == VerifyStatus::Verifying>
                    <div class="verify-spinner"></div>
                    <p>{move || message.get()}</p>
                </Show>
                <Show when=move || status.get() == VerifyStatus::Success>
                    <p class="verify-success">{move || message.get()}</p>
                </Show>
                <Show when=move || status.get() == VerifyStatus::Error>
                    <p class="auth-error">{move || message.get()}</p>
                    <button class="auth-button" on:click=move |_| {
                        message.set(String::new());
                        status.set(VerifyStatus::Waiting);
                    }>
                        "Try again"
                    </button>
                    <a href="/signup">"Back to signup"</a>
                </Show>
            </div>
        </div>
    }
}
