//! Route guard for pages that need a session

use crate::state::use_app_state;
use leptos::*;
use leptos_router::*;

/// Renders `children` only for a logged-in user; everyone else goes to `/login`
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = use_app_state();
    let user = state.user;

    view! {
        <Show
            when=move || user.get().is_some()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
