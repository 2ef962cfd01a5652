//! Protected form for creating a post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::BlogFields;
use crate::state::blogs::BlogListState;

/// Fixed category options offered by the service.
pub const CATEGORIES: &[&str] = &["News", "Games", "Music", "Movies", "Sports", "Television"];

/// New-blog page.
///
/// A confirmed create prepends the server's copy, minted id and author
/// included, to the mirrored list and returns to the list view. A failure
/// leaves the list untouched and shows the message.
#[component]
pub fn NewBlogPage() -> impl IntoView {
    let blogs = expect_context::<RwSignal<BlogListState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(CATEGORIES[0].to_owned());
    let text = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let fields = BlogFields {
            title: title.get(),
            category: category.get(),
            text: text.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::blogs::create(&fields).await {
                Ok(created) => {
                    blogs.update(|b| b.insert_new(created));
                    navigate("/blogs", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("create failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <main class="blog-form-page">
            <h1>"New Blog"</h1>
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
                    "Publish"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
