use crate::components::AppShell;
use crate::features::backend::BackendProvider;
use crate::features::session::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <BackendProvider>
            <SessionProvider>
                <Router>
                    <AppShell>
                        <AppRoutes />
                    </AppShell>
                </Router>
            </SessionProvider>
        </BackendProvider>
    }
}
