//! Protected form for rotating the account password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Change-password page.
///
/// Success rotates the stored credential, refreshes the session identity
/// from the new one, and returns to the blog list. A wrong old password
/// comes back as the service's rejection message; nothing local changes.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let old_value = old_password.get();
        let new_value = new_password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::auth::change_password(&old_value, &new_value).await {
                Ok(user) => {
                    session.update(|s| s.sign_in(user));
                    navigate("/blogs", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("password change failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <h1>"Change Password"</h1>
            <form class="auth-page__form" on:submit=submit>
                <label>
                    "Current Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary">
                    "Change Password"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
