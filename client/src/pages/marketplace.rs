//! Marketplace browse page.

use leptos::prelude::*;

use crate::components::protected::Protected;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <Protected>
            <section class="page page--hero">
                <h1 class="page__title">"Discover Amazing Products"</h1>
                <p class="page__subtitle">"Browse goods and services from merchants near you."</p>
            </section>
        </Protected>
    }
}
