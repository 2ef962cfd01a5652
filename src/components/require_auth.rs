//! Route guard gating protected views on a signed-in session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;

/// Wrap a protected view: render the children while a user is signed in,
/// redirect to the login page otherwise.
///
/// The decision tracks the session signal, so signing out flips every
/// mounted guarded view to the redirect on the next render; nothing of
/// the protected subtree survives.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show
            when=move || session.get().signed_in()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
