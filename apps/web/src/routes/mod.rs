mod auth;
mod not_found;
mod profile;

pub(crate) use auth::AuthPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=ProfilePage />
            <Route path=path!("/auth") view=AuthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
