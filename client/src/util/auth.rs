//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same guard: read the session once after
//! mount, redirect to `/login` once if it holds no token, and render a
//! placeholder until the guard is ready and authenticated.

use std::sync::Arc;

use kasuwa::auth::guard::LOGIN_ROUTE;
use kasuwa::{AuthGuard, AuthService, GuardAction, ProtectedRoute};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Mount an [`AuthGuard`] for the current page and expose its route state.
pub fn use_protected_route() -> Signal<ProtectedRoute> {
    let service = expect_context::<Arc<AuthService>>();
    let navigate = use_navigate();
    let guard = RwSignal::new(AuthGuard::new());

    // Effects only run in the browser, so the session is read after mount.
    let session = service.session().clone();
    let navigate_mount = navigate.clone();
    Effect::new(move || {
        let mut next = guard.get_untracked();
        let action = next.mount(&session);
        guard.set(next);
        if action == GuardAction::RedirectToLogin {
            navigate_mount(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    install_storage_reevaluation(guard, service.session().clone(), navigate);

    Signal::derive(move || guard.get().route())
}

/// Re-run the guard when another tab changes the session.
#[cfg(feature = "hydrate")]
fn install_storage_reevaluation<F>(guard: RwSignal<AuthGuard>, session: kasuwa::Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    use kasuwa::session::{EMAIL_VERIFIED_KEY, TOKEN_KEY, USER_KEY};

    let handle = window_event_listener(leptos::ev::storage, move |ev| {
        // A `None` key means the whole storage area was cleared.
        let relevant = ev.key().is_none_or(|key| [TOKEN_KEY, USER_KEY, EMAIL_VERIFIED_KEY].contains(&key.as_str()));
        if !relevant {
            return;
        }
        let mut next = guard.get_untracked();
        let action = next.reevaluate(&session);
        guard.set(next);
        if action == GuardAction::RedirectToLogin {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
    on_cleanup(move || handle.remove());
}
