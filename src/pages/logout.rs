//! Public page confirming a completed sign-out.

use leptos::prelude::*;
use leptos_router::components::A;

/// Shown after the navbar's sign-out action has already cleared the
/// session; this page itself does nothing.
#[component]
pub fn LogoutPage() -> impl IntoView {
    view! {
        <main class="logout-page">
            <h1>"Signed out"</h1>
            <p>"Your session is closed on this device."</p>
            <A href="/login">"Log back in"</A>
        </main>
    }
}
