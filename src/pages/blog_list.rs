//! Protected list of all blog posts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::blog_card::BlogCard;
use crate::state::blogs::BlogListState;

/// Blog list page, rendered straight from the shell's mirrored list. The
/// shell refreshes that list on sign-in; mutations elsewhere reconcile it
/// in place, so this page never fetches anything itself.
#[component]
pub fn BlogListPage() -> impl IntoView {
    let blogs = expect_context::<RwSignal<BlogListState>>();

    view! {
        <main class="blog-list-page">
            <header class="blog-list-page__header">
                <h1>"Blogs"</h1>
                <A href="/blogs/new">"+ New Blog"</A>
            </header>
            <Show when=move || blogs.get().loading>
                <p>"Loading blogs..."</p>
            </Show>
            <Show when=move || !blogs.get().loading && blogs.get().items.is_empty()>
                <p class="blog-list-page__empty">"Nothing here yet. Write the first one."</p>
            </Show>
            <div class="blog-list-page__cards">
                <For
                    each=move || blogs.get().items
                    key=|blog| blog.id.clone()
                    children=|blog| view! { <BlogCard blog=blog/> }
                />
            </div>
        </main>
    }
}
