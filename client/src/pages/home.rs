//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="landing">
            <h1 class="landing__title">"Sell more with Kasuwan Gizo"</h1>
            <p class="landing__subtitle">
                "Create your merchant account, list your products and reach buyers across the marketplace."
            </p>
            <a class="landing__cta" href="/signup">"Get Started"</a>
        </section>
    }
}
