//! Sign-up subview. Password confirmation is checked locally before any
//! network call; on success the flow has already signed the session out and
//! the page moves to the verification-pending screen.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::backend::use_backend;
use crate::features::session::use_session;
use account_core::{AuthScreen, FlowError, PhotoUpload, SignUpForm, flow};
use base64::Engine;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::HtmlInputElement;

#[component]
pub fn SignUpScreen(screen: RwSignal<AuthScreen>) -> impl IntoView {
    let backend = use_backend();
    let session = use_session();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (photo, set_photo) = signal::<Option<PhotoUpload>>(None);
    let (preview, set_preview) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<FlowError>>(None);

    let sign_up_action = Action::new_local(move |form: &SignUpForm| {
        let form = form.clone();
        let backend = Rc::clone(&backend);
        async move { flow::sign_up(&backend.identity, &backend.documents, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(()) => {
                    // Sign-up always ends signed out, awaiting verification.
                    session.clear();
                    screen.set(AuthScreen::VerificationPending);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    // Reads the selected image into inline base64 for preview and for the
    // profile write. The `accept` filter below is a picker hint, not a
    // contract: size and type are not validated here.
    let on_photo_change = move |event: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&event);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_photo.set(None);
            set_preview.set(None);
            return;
        };
        let file = gloo_file::File::from(file);
        spawn_local(async move {
            let file_name = file.name();
            let mime = file.raw_mime_type();
            match gloo_file::futures::read_as_bytes(&file).await {
                Ok(bytes) => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    set_preview.set(Some(format!("data:{mime};base64,{encoded}")));
                    set_photo.set(Some(PhotoUpload {
                        file_name,
                        base64: encoded,
                    }));
                }
                Err(_) => {
                    set_photo.set(None);
                    set_preview.set(None);
                }
            }
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        sign_up_action.dispatch(SignUpForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            photo: photo.get_untracked(),
        });
    };

    view! {
        <form
            class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800"
            on:submit=on_submit
        >
            <h1 class="mb-6 text-xl font-semibold text-gray-900 dark:text-white">
                "Create account"
            </h1>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="name"
                >
                    "Your name"
                </label>
                <input
                    id="name"
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="name"
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
            </div>
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
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="new-password"
                    required
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
            </div>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="confirm_password"
                >
                    "Confirm password"
                </label>
                <input
                    id="confirm_password"
                    type="password"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    autocomplete="new-password"
                    required
                    on:input=move |event| {
                        set_confirm_password.set(event_target_value(&event));
                    }
                />
            </div>
            <div class="mb-5">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="photo"
                >
                    "Profile photo (optional)"
                </label>
                <input
                    id="photo"
                    type="file"
                    accept="image/*"
                    class="block w-full text-sm text-gray-900 border border-gray-300 rounded-lg cursor-pointer bg-gray-50 dark:text-gray-400 dark:bg-gray-700 dark:border-gray-600"
                    on:change=on_photo_change
                />
                {move || {
                    preview
                        .get()
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt="Selected profile photo"
                                    class="mt-3 h-16 w-16 rounded-full object-cover"
                                />
                            }
                        })
                }}
            </div>
            <Button button_type="submit" disabled=sign_up_action.pending()>
                "Create account"
            </Button>
            {move || {
                sign_up_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        let offer_sign_in = matches!(err, FlowError::EmailTaken);
                        view! {
                            <div class="mt-4 space-y-2">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                                {offer_sign_in
                                    .then(|| {
                                        view! {
                                            <button
                                                type="button"
                                                class="text-sm text-blue-600 hover:underline dark:text-blue-400"
                                                on:click=move |_| screen.set(AuthScreen::SignIn)
                                            >
                                                "Go to sign in"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
            <div class="mt-6 text-sm">
                <button
                    type="button"
                    class="text-blue-600 hover:underline dark:text-blue-400"
                    on:click=move |_| screen.set(AuthScreen::SignIn)
                >
                    "Already have an account? Sign in"
                </button>
            </div>
        </form>
    }
}
