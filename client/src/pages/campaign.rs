use leptos::prelude::*;

use crate::components::protected::Protected;

#[component]
pub fn CampaignPage() -> impl IntoView {
    view! {
        <Protected>
            <section class="page">
                <h1 class="page__title">"Campaigns"</h1>
                <p class="page__subtitle">"Promote your products to marketplace shoppers."</p>
            </section>
        </Protected>
    }
}
