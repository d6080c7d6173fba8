//! App shell: header or sidebar chrome around the routed page.
//!
//! The shell owns the navigation probe. It runs once per mount and its result
//! is discarded if the shell is gone before the probe settles.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use std::sync::Arc;

use kasuwa::AuthService;
use kasuwa::nav::NavHealth;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::util::nav::install_nav_probe;

/// Public routes render the header instead of the merchant sidebar.
const HEADER_ROUTES: [&str; 5] = ["/", "/login", "/signup", "/marketplace", "/campaign"];

/// Whether `path` shows the public header (and no sidebar).
#[must_use]
pub fn shows_header(path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    HEADER_ROUTES.contains(&path)
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let service = expect_context::<Arc<AuthService>>();
    let health = expect_context::<RwSignal<NavHealth>>();
    install_nav_probe(health, service.session().store().clone());

    let location = use_location();
    let with_header = Memo::new(move |_| shows_header(&location.pathname.get()));
    let sidebar_open = RwSignal::new(false);

    // Close the mobile sidebar on every route change.
    Effect::new(move || {
        location.pathname.track();
        sidebar_open.set(false);
    });

    view! {
        <div class="app-layout">
            <Show when=move || !with_header.get()>
                <Sidebar open=sidebar_open/>
            </Show>
            <div class="app-layout__body" class:app-layout__body--with-sidebar=move || !with_header.get()>
                <Show
                    when=move || with_header.get()
                    fallback=move || {
                        view! {
                            <div class="mobile-bar">
                                <button
                                    class="mobile-bar__toggle"
                                    aria-label="Toggle menu"
                                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                                >
                                    "☰"
                                </button>
                                <span class="mobile-bar__name">"Kasuwan Gizo"</span>
                            </div>
                        }
                    }
                >
                    <Header/>
                </Show>
                <main class="app-layout__main">{children()}</main>
            </div>
        </div>
    }
}
