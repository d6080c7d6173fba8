//! Products management overview.

use leptos::prelude::*;

use crate::components::protected::Protected;

/// Headline counters shown above the product list.
const KPIS: [(&str, &str); 3] = [("Total Products", "0"), ("Pending", "0"), ("Completed", "0")];

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <Protected>
            <section class="page">
                <h1 class="page__title">"Products Management"</h1>
                <p class="page__subtitle">"Track and manage your Products"</p>
                <div class="kpi-grid">
                    {KPIS
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <div class="kpi-card">
                                    <span class="kpi-card__title">{title}</span>
                                    <span class="kpi-card__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="page__empty">"No products yet."</p>
            </section>
        </Protected>
    }
}
