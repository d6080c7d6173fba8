//! Wrapper for pages that require a session.

use leptos::prelude::*;

use crate::util::auth::use_protected_route;

/// Renders `children` only once the guard is ready and authenticated; a
/// loading placeholder otherwise (including the moment before a redirect).
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let route = use_protected_route();

    view! {
        <Show
            when=move || route.get().can_render()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
