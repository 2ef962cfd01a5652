//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing page — greets the signed-in user by name, or invites sign-in.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || match session.get().user {
        Some(user) => format!("hello, {}", user.name),
        None => "hello".to_owned(),
    };

    view! {
        <main class="landing-page">
            <h1>{greeting}</h1>
            <p>"A quiet place to write loudly."</p>
        </main>
    }
}
