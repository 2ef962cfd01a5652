//! Login page with the email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Login page.
///
/// Success stores the credential, flips the session to the returned
/// identity (which triggers the shell's list fetch), and moves on to the
/// blog list. Failure shows the service's message and changes nothing.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::auth::login(&email_value, &password_value).await {
                Ok(user) => {
                    session.update(|s| s.sign_in(user));
                    navigate("/blogs", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <h1>"Log In"</h1>
            <form class="auth-page__form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="text"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary">
                    "Log In"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
