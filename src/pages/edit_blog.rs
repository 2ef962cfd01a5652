//! Protected form for editing an existing post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Blog;
use crate::pages::new_blog::CATEGORIES;
use crate::state::blogs::BlogListState;

/// Edit-blog page.
///
/// Loads the post by the route id and seeds the form from it once. Submit
/// sends the full record back (edited fields plus every server-assigned
/// field the fetch carried) and swaps the service's confirmed copy into
/// the mirrored list, leaving the rest of the list untouched.
#[component]
pub fn EditBlogPage() -> impl IntoView {
    let blogs = expect_context::<RwSignal<BlogListState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let blog_id = move || params.read().get("id").unwrap_or_default();

    let original = LocalResource::new(move || {
        let id = blog_id();
        async move { crate::net::blogs::get(&id).await }
    });

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let loaded = RwSignal::new(None::<Blog>);
    let error = RwSignal::new(None::<String>);

    // Seed the form from the fetch exactly once; later keystrokes win.
    Effect::new(move || {
        if loaded.with(Option::is_some) {
            return;
        }
        if let Some(Ok(blog)) = original.get() {
            title.set(blog.title.clone());
            category.set(blog.category.clone());
            text.set(blog.text.clone());
            loaded.set(Some(blog));
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let Some(mut updated) = loaded.get() else {
            return;
        };
        updated.title = title.get();
        updated.category = category.get();
        updated.text = text.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::blogs::update(&updated).await {
                Ok(confirmed) => {
                    blogs.update(|b| b.apply_update(confirmed));
                    navigate("/blogs", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("update failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <main class="blog-form-page">
            <h1>"Edit Blog"</h1>
            {move || {
                let submit = submit.clone();
                if loaded.with(Option::is_some) {
                    view! {
                        <form class="blog-form" on:submit=submit>
                            <label>
                                "Title"
                                <input
                                    type="text"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Category"
                                <select
                                    prop:value=move || category.get()
                                    on:change=move |ev| category.set(event_target_value(&ev))
                                >
                                    {CATEGORIES
                                        .iter()
                                        .map(|c| view! { <option value=*c>{*c}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label>
                                "Text"
                                <textarea
                                    prop:value=move || text.get()
                                    on:input=move |ev| text.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <button type="submit" class="btn btn--primary">
                                "Save"
                            </button>
                        </form>
                    }
                        .into_any()
                } else if let Some(Err(e)) = original.get() {
                    view! { <p class="form-error">{e.to_string()}</p> }.into_any()
                } else {
                    view! { <p>"Loading..."</p> }.into_any()
                }
            }}
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
