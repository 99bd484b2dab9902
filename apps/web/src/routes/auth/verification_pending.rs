//! Shown after signing up, or after signing in with an unverified address.
//! The session has already been cleared by the flow, so the only way forward
//! is back through the sign-in form once the email is confirmed.

use crate::components::{Alert, AlertKind};
use account_core::AuthScreen;
use leptos::prelude::*;

#[component]
pub fn VerificationPendingScreen(screen: RwSignal<AuthScreen>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Verify your email"
            </h1>
            <Alert
                kind=AlertKind::Info
                message="We sent a verification link to your email address. Open it, then sign in again."
                    .to_string()
            />
            <button
                type="button"
                class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                on:click=move |_| screen.set(AuthScreen::SignIn)
            >
                "Back to sign in"
            </button>
        </div>
    }
}
