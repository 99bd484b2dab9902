//! Sign-in subview. A verified sign-in activates the session and navigates
//! home; an unverified one lands on the verification-pending screen with the
//! session already signed out.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::backend::use_backend;
use crate::features::session::use_session;
use account_core::{AuthScreen, FlowError, SignInOutcome, flow};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct SignInInput {
    email: String,
    password: String,
}

#[component]
pub fn SignInScreen(screen: RwSignal<AuthScreen>) -> impl IntoView {
    let backend = use_backend();
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<FlowError>>(None);

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let input = input.clone();
        let backend = Rc::clone(&backend);
        async move {
            flow::sign_in(
                &backend.identity,
                &backend.documents,
                &input.email,
                &input.password,
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(SignInOutcome::SessionActive(account)) => {
                    session.set_account(account);
                    navigate("/", Default::default());
                }
                Ok(SignInOutcome::VerificationPending) => {
                    screen.set(AuthScreen::VerificationPending);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        sign_in_action.dispatch(SignInInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <form
            class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <h1 class="mb-6 text-xl font-semibold text-gray-900 dark:text-white">
                "Sign in"
            </h1>
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
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="password"
                >
                    "Your password"
                </label>
                <input
                    id="password"
                    type="password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="current-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=sign_in_action.pending()>
                "Sign in"
            </Button>
            {move || {
                sign_in_action
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
            <div class="mt-6 flex items-center justify-between text-sm">
                <button
                    type="button"
                    class="text-blue-600 hover:underline dark:text-blue-400"
                    on:click=move |_| screen.set(AuthScreen::ForgotPassword { link_sent: false })
                >
                    "Forgot password?"
                </button>
                <button
                    type="button"
                    class="text-blue-600 hover:underline dark:text-blue-400"
                    on:click=move |_| screen.set(AuthScreen::SignUp)
                >
                    "Create an account"
                </button>
            </div>
        </form>
    }
}
