//! Shared layout wrapper with the header and content container. Routes focus
//! on content; the header owns the brand link and the sign-out control.

use crate::app_lib::build_info;
use crate::features::backend::use_backend;
use crate::features::session::use_session;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

/// Wraps routes with a header, main content container, and build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let backend = StoredValue::new_local(use_backend());
    let session = use_session();
    let navigate = StoredValue::new_local(use_navigate());

    let on_sign_out = move |_| {
        let backend = backend.get_value();
        spawn_local(async move {
            backend.identity.sign_out().await;
            session.clear();
            navigate.with_value(|nav| nav("/auth", Default::default()));
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="text-xl" aria-hidden="true">"🌊"</span>
                        <span class="font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Tidepool"
                        </span>
                    </A>
                    <Show when=move || session.is_authenticated.get()>
                        <button
                            type="button"
                            class="py-2 px-3 text-sm text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                            on:click=on_sign_out
                        >
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-md mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
