//! Root application component with routing and context providers.

use std::sync::Arc;

use kasuwa::AuthService;
use kasuwa::nav::NavHealth;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::pages::{
    campaign::CampaignPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    marketplace::MarketplacePage, orders::OrdersPage, settings::SettingsPage, signup::SignupPage,
    verify::VerifyEmailPage,
};
use crate::state::auth::{AuthState, build_service};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth service, a reactive session snapshot and the navigation
/// health indicator, then sets up client-side routing inside the app layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let service: Arc<AuthService> = build_service();
    let auth = RwSignal::new(AuthState::default());
    let nav_health = RwSignal::new(NavHealth::default());

    // Storage is only readable after hydration; SSR renders the signed-out view.
    let session = service.session().clone();
    Effect::new(move || auth.set(AuthState::from_session(&session)));

    provide_context(service);
    provide_context(auth);
    provide_context(nav_health);

    view! {
        <Stylesheet id="leptos" href="/pkg/kasuwa.css"/>
        <Title text="Kasuwan Gizo"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("verify")) view=VerifyEmailPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("campaign") view=CampaignPage/>
                    <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
