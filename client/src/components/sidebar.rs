//! Merchant sidebar: section links plus sign-out.

use std::sync::Arc;

use kasuwa::AuthService;
use kasuwa::auth::guard::LOGIN_ROUTE;
use kasuwa::nav::{NavHealth, force_full_nav};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const SECTIONS: [(&str, &str); 5] = [
    ("Dashboard", "/dashboard"),
    ("Products", "/orders"),
    ("Campaign", "/campaign"),
    ("Marketplace", "/marketplace"),
    ("Settings", "/settings"),
];

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let service = expect_context::<Arc<AuthService>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let health = expect_context::<RwSignal<NavHealth>>();
    let navigate = use_navigate();

    let full_page_nav = RwSignal::new(false);
    let store = service.session().store().clone();
    Effect::new(move || full_page_nav.set(force_full_nav(health.get(), store.as_ref())));

    let on_logout = move |_| {
        service.logout();
        auth.set(AuthState::from_session(service.session()));
        leptos::logging::log!("signed out");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__brand">"Kasuwan Gizo"</div>
            <nav class="sidebar__nav">
                {SECTIONS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a
                                class="sidebar__link"
                                href=href
                                rel=move || full_page_nav.get().then_some("external")
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || auth.get().display_name().to_owned()}</span>
                <button class="sidebar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
