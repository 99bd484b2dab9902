//! 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-8xl font-black text-gray-200 dark:text-gray-700 select-none">
                "404"
            </h1>
            <p class="mt-2 text-2xl font-bold text-gray-900 dark:text-white">
                "Page not found"
            </p>
            <p class="mt-4 max-w-sm text-gray-500 dark:text-gray-400">
                "The page you requested does not exist."
            </p>
            <A
                href="/"
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700"
            >
                "Go home"
            </A>
        </div>
    }
}
