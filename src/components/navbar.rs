//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Navigation bar.
///
/// Signed out it offers Log In / Sign Up; signed in it links the protected
/// pages and carries the sign-out action. Signing out is an identity
/// transition, not a page: it clears the stored credential and the session
/// slot, then lands on the public logout page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::net::auth::logout();
        session.update(SessionState::sign_out);
        navigate("/logout", NavigateOptions::default());
    };

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome, {}", u.name))
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <A href="/">
                <span class="navbar__brand">"Quillpad"</span>
            </A>
            <Show
                when=move || session.get().signed_in()
                fallback=|| {
                    view! {
                        <A href="/login">"Log In"</A>
                        <A href="/signup">"Sign Up"</A>
                    }
                }
            >
                <span class="navbar__greeting">{greeting}</span>
                <A href="/blogs">"Blogs"</A>
                <A href="/blogs/new">"New Blog"</A>
                <A href="/profiles">"Profiles"</A>
                <A href="/changePassword">"Change Password"</A>
                <button class="navbar__logout" on:click=on_logout.clone()>
                    "Log Out"
                </button>
            </Show>
        </nav>
    }
}
