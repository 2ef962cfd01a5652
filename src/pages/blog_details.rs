//! Protected detail view for a single post, with delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::blogs::BlogListState;

/// Blog detail page.
///
/// Fetches the post by the route id so a direct link works before the
/// list has loaded. Delete evicts the server-confirmed id from the
/// mirrored list and returns to the list view; a failed delete leaves the
/// list alone and shows the message.
#[component]
pub fn BlogDetailsPage() -> impl IntoView {
    let blogs = expect_context::<RwSignal<BlogListState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let blog_id = move || params.read().get("id").unwrap_or_default();

    let blog = LocalResource::new(move || {
        let id = blog_id();
        async move { crate::net::blogs::get(&id).await }
    });

    let error = RwSignal::new(None::<String>);

    let on_delete = move |_| {
        error.set(None);
        let id = blog_id();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::blogs::remove(&id).await {
                Ok(deleted) => {
                    blogs.update(|b| b.apply_remove(&deleted.id));
                    navigate("/blogs", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("delete failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <main class="blog-details-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    let on_delete = on_delete.clone();
                    blog.get()
                        .map(|result| match result {
                            Ok(blog) => {
                                let edit_href = format!("/blogs/{}/edit", blog.id);
                                view! {
                                    <article class="blog-details">
                                        <span class="blog-details__category">
                                            {blog.category.clone()}
                                        </span>
                                        <h1>{blog.title.clone()}</h1>
                                        <p class="blog-details__text">{blog.text.clone()}</p>
                                        <div class="blog-details__actions">
                                            <A href=edit_href>"Edit"</A>
                                            <button class="btn btn--danger" on:click=on_delete>
                                                "Delete"
                                            </button>
                                        </div>
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="form-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </main>
    }
}
