//! Protected read-only list of user profiles.

use leptos::prelude::*;

/// Profiles page — everyone with an account, fetched on mount.
#[component]
pub fn ProfilesPage() -> impl IntoView {
    let profiles = LocalResource::new(|| crate::net::profiles::list());

    view! {
        <main class="profiles-page">
            <h1>"Profiles"</h1>
            <Suspense fallback=move || view! { <p>"Loading profiles..."</p> }>
                {move || {
                    profiles
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="profiles-page__list">
                                        {list
                                            .into_iter()
                                            .map(|p| view! { <li>{p.name}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="form-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
