//! Account settings.

use leptos::prelude::*;

use crate::components::protected::Protected;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <Protected>
            <section class="page">
                <h1 class="page__title">"Settings & Preferences"</h1>
                <p class="page__subtitle">"Manage your business profile and account."</p>
            </section>
        </Protected>
    }
}
