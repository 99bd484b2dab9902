//! Forgot-password subview. An empty email is rejected locally; a successful
//! dispatch flips the screen's `link_sent` flag and shows the confirmation.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::backend::use_backend;
use account_core::{AuthScreen, FlowError, flow};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ForgotPasswordScreen(screen: RwSignal<AuthScreen>, link_sent: bool) -> impl IntoView {
    let backend = use_backend();
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<FlowError>>(None);

    let reset_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        let backend = Rc::clone(&backend);
        async move { flow::request_password_reset(&backend.identity, &email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => screen.set(AuthScreen::ForgotPassword { link_sent: true }),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        reset_action.dispatch(email.get_untracked());
    };

    let back_to_sign_in = move |_| screen.set(AuthScreen::SignIn);

    if link_sent {
        return view! {
            <div class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-4">
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Check your inbox"
                </h1>
                <Alert
                    kind=AlertKind::Success
                    message="We sent you a password reset link.".to_string()
                />
                <button
                    type="button"
                    class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                    on:click=back_to_sign_in
                >
                    "Back to sign in"
                </button>
            </div>
        }
        .into_any();
    }

    view! {
        <form
            class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <h1 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">
                "Reset your password"
            </h1>
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-300">
                "Enter your email and we will send you a reset link."
            </p>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="email"
                >
                    "Your email"
                </label>
                <input
                    id="email"
                    type="email"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="email"
                    placeholder="name@example.com"
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=reset_action.pending()>
                "Send reset link"
            </Button>
            {move || {
                reset_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
            <div class="mt-6 text-sm">
                <button
                    type="button"
                    class="text-blue-600 hover:underline dark:text-blue-400"
                    on:click=back_to_sign_in
                >
                    "Back to sign in"
                </button>
            </div>
        </form>
    }
    .into_any()
}
