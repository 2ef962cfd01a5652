//! Card summarizing one blog post in the list view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Blog;

/// Compact list entry linking to the post's detail page.
#[component]
pub fn BlogCard(blog: Blog) -> impl IntoView {
    let href = format!("/blogs/{}", blog.id);

    view! {
        <article class="blog-card">
            <A href=href>
                <h2 class="blog-card__title">{blog.title}</h2>
            </A>
            <span class="blog-card__category">{blog.category}</span>
        </article>
    }
}
