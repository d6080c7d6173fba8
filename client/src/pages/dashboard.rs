//! Merchant dashboard: the landing page after login.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Protected>
            <section class="page">
                <h1 class="page__title">"Dashboard"</h1>
                <p class="page__subtitle">
                    {move || format!("Welcome back, {}", auth.get().display_name())}
                </p>
                <Show when=move || !auth.get().email_verified>
                    <p class="page__notice">
                        "Your email is not verified yet. " <a href="/auth/verify">"Verify now"</a>
                    </p>
                </Show>
            </section>
        </Protected>
    }
}
