//! Public header with Login / Get Started links.
//!
//! When the navigation probe has failed (in this session or an earlier one)
//! the links are rendered as external so the browser performs a full page
//! load instead of a client-side route change.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::sync::Arc;

use kasuwa::AuthService;
use kasuwa::nav::{NavHealth, force_full_nav};
use leptos::prelude::*;

/// One header call-to-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    /// Full page load instead of router navigation.
    pub external: bool,
}

/// Header links for the current navigation mode.
#[must_use]
pub fn header_links(full_page_nav: bool) -> [HeaderLink; 2] {
    [
        HeaderLink {
            label: "Login",
            href: "/login",
            class: if full_page_nav { "header-link header-link--solid" } else { "header-link header-link--outline" },
            external: full_page_nav,
        },
        HeaderLink {
            label: "Get Started",
            href: "/signup",
            class: "header-link header-link--primary",
            external: full_page_nav,
        },
    ]
}

#[component]
pub fn Header() -> impl IntoView {
    let service = expect_context::<Arc<AuthService>>();
    let health = expect_context::<RwSignal<NavHealth>>();
    let full_page_nav = RwSignal::new(false);

    // Reads the persisted flag, so only after hydration.
    let store = service.session().store().clone();
    Effect::new(move || full_page_nav.set(force_full_nav(health.get(), store.as_ref())));

    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <img class="site-header__logo" src="/images/logos.png" alt="Logo"/>
                <span class="site-header__name">"Kasuwan Gizo"</span>
            </div>
            <nav class="site-header__actions">
                {move || {
                    header_links(full_page_nav.get())
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class=link.class
                                    rel=link.external.then_some("external")
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}
