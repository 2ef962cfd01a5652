//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::pages::blog_details::BlogDetailsPage;
use crate::pages::blog_list::BlogListPage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::edit_blog::EditBlogPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::logout::LogoutPage;
use crate::pages::new_blog::NewBlogPage;
use crate::pages::profiles::ProfilesPage;
use crate::pages::signup::SignupPage;
use crate::state::blogs::BlogListState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Owns the two state slots (session identity, mirrored blog list) and
/// provides them via context. The session is restored from the
/// stored credential before the first render, so a reload keeps you
/// signed in. Everything below the router reads and writes through the
/// context signals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let blogs = RwSignal::new(BlogListState::default());
    provide_context(session);
    provide_context(blogs);

    // One full list fetch per sign-in, including a session restored at
    // startup. Tracks the previous signed-in flag so re-renders and
    // same-identity updates (a password change) do not refetch; signing
    // out leaves the stale list unreachable behind the guard.
    Effect::new(move |prev: Option<bool>| {
        let signed_in = session.get().signed_in();
        if signed_in && prev != Some(true) {
            blogs.update(|b| b.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::blogs::list().await {
                    Ok(items) => blogs.update(|b| b.replace_all(items)),
                    Err(e) => {
                        leptos::logging::warn!("blog list fetch failed: {e}");
                        blogs.update(|b| b.loading = false);
                    }
                }
            });
        }
        signed_in
    });

    view! {
        <Title text="Quillpad"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route
                    path=StaticSegment("blogs")
                    view=|| view! { <RequireAuth><BlogListPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("blogs"), StaticSegment("new"))
                    view=|| view! { <RequireAuth><NewBlogPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("blogs"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><BlogDetailsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("blogs"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! { <RequireAuth><EditBlogPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profiles")
                    view=|| view! { <RequireAuth><ProfilesPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("changePassword")
                    view=|| view! { <RequireAuth><ChangePasswordPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
