//! Profile page: loads the signed-in account's document, lets the user
//! rename it, and offers account deletion behind a confirmation prompt.

use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::backend::use_backend;
use crate::features::session::use_session;
use account_core::{Account, DeleteAccountError, UserProfile, account};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

/// How long a save status banner stays on screen.
const STATUS_CLEAR_MS: u32 = 3_000;

#[derive(Clone)]
struct SaveInput {
    account_id: String,
    name: String,
}

fn delete_error_message(err: &DeleteAccountError) -> String {
    match err {
        DeleteAccountError::Account(account_core::IdentityError::RequiresRecentLogin) => {
            "Deleting your account requires a recent sign-in. Sign out, sign back in, and try again.".to_string()
        }
        DeleteAccountError::Profile(_) | DeleteAccountError::Account(_) => {
            "Something went wrong. Please check your connection and try again.".to_string()
        }
    }
}

/// Picks an image media type from the stored file name so the inline
/// base64 payload renders as a data URL.
fn photo_media_type(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "image/png"
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let backend = use_backend();
    let session = use_session();

    // Unauthenticated visits bounce straight to the auth page. There is no
    // persisted session, so a page reload always lands here first.
    let navigate_guard = use_navigate();
    Effect::new(move |_| {
        if !session.is_authenticated.get() {
            navigate_guard("/auth", Default::default());
        }
    });

    let backend_for_fetch = Rc::clone(&backend);
    let profile = LocalResource::new(move || {
        let backend = Rc::clone(&backend_for_fetch);
        let current = session.account.get();
        async move {
            match current {
                Some(me) => account::load_profile(&backend.documents, &me.id).await,
                None => Ok(None),
            }
        }
    });

    let name = RwSignal::new(String::new());
    Effect::new(move |_| {
        if let Some(Ok(Some(loaded))) = profile.get() {
            name.set(loaded.name);
        }
    });

    let (status, set_status) = signal::<Option<(AlertKind, String)>>(None);
    let (delete_error, set_delete_error) = signal::<Option<String>>(None);

    let backend_for_save = Rc::clone(&backend);
    let save_action = Action::new_local(move |input: &SaveInput| {
        let input = input.clone();
        let backend = Rc::clone(&backend_for_save);
        async move {
            account::rename_profile(&backend.documents, &input.account_id, &input.name).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            let banner = match result {
                Ok(saved) => {
                    name.set(saved.name);
                    (AlertKind::Success, "Profile updated.".to_string())
                }
                Err(_) => (
                    AlertKind::Error,
                    "Could not save your changes. Please try again.".to_string(),
                ),
            };
            set_status.set(Some(banner));
            Timeout::new(STATUS_CLEAR_MS, move || set_status.set(None)).forget();
        }
    });

    let on_save = move |event: SubmitEvent| {
        event.prevent_default();
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            set_status.set(Some((AlertKind::Error, "Please enter a name.".to_string())));
            return;
        }
        if let Some(me) = session.account.get_untracked() {
            save_action.dispatch(SaveInput {
                account_id: me.id,
                name: trimmed,
            });
        }
    };

    let backend_for_delete = Rc::clone(&backend);
    let delete_action = Action::new_local(move |me: &Account| {
        let me = me.clone();
        let backend = Rc::clone(&backend_for_delete);
        async move { account::delete_account(&backend.identity, &backend.documents, &me).await }
    });

    let navigate_after_delete = use_navigate();
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    session.clear();
                    navigate_after_delete("/auth", Default::default());
                }
                Err(err) => set_delete_error.set(Some(delete_error_message(&err))),
            }
        }
    });

    let on_delete = move |_| {
        let confirmed = window()
            .confirm_with_message("Delete your account? This cannot be undone.")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_delete_error.set(None);
        if let Some(me) = session.account.get_untracked() {
            delete_action.dispatch(me);
        }
    };

    let busy = Signal::derive(move || save_action.pending().get() || delete_action.pending().get());

    view! {
        <div class="mx-auto max-w-lg space-y-6">
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match profile.get() {
                    Some(Ok(Some(loaded))) => {
                        view! { <ProfileCard profile=loaded name=name busy=busy on_save=on_save /> }
                            .into_any()
                    }
                    Some(Ok(None)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Info
                                message="No profile found for this account yet.".to_string()
                            />
                        }
                        .into_any()
                    }
                    Some(Err(_)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message="Could not load your profile. Please check your connection and try again."
                                    .to_string()
                            />
                        }
                        .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
            {move || {
                status
                    .get()
                    .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
            }}
            <div class="rounded-lg border border-red-200 bg-white p-6 dark:border-red-500/50 dark:bg-gray-800 space-y-4">
                <h2 class="text-lg font-semibold text-red-700 dark:text-red-300">
                    "Danger zone"
                </h2>
                <p class="text-sm text-gray-500 dark:text-gray-300">
                    "Deleting your account removes your profile and signs you out permanently."
                </p>
                {move || {
                    delete_error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Button danger=true disabled=busy on:click=on_delete>
                    "Delete account"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ProfileCard(
    profile: UserProfile,
    name: RwSignal<String>,
    busy: Signal<bool>,
    on_save: impl Fn(SubmitEvent) + 'static,
) -> impl IntoView {
    let photo = (!profile.photo_base64.is_empty()).then(|| {
        format!(
            "data:{};base64,{}",
            photo_media_type(&profile.photo_file_name),
            profile.photo_base64
        )
    });

    view! {
        <form
            class="rounded-lg border border-gray-200 bg-white p-6 dark:border-gray-700 dark:bg-gray-800 space-y-5"
            on:submit=on_save
        >
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                "Your profile"
            </h1>
            {photo
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt="Profile photo"
                            class="h-24 w-24 rounded-full object-cover"
                        />
                    }
                })}
            <div>
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="display-name"
                >
                    "Display name"
                </label>
                <input
                    id="display-name"
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    prop:value=move || name.get()
                    on:input=move |event| name.set(event_target_value(&event))
                />
            </div>
            <div>
                <span class="block text-sm font-medium text-gray-500 dark:text-gray-200">
                    "Email"
                </span>
                <div class="text-gray-900 dark:text-white">{profile.email}</div>
            </div>
            <div>
                <span class="block text-sm font-medium text-gray-500 dark:text-gray-200">
                    "Member since"
                </span>
                <div class="text-gray-900 dark:text-white">{profile.created_at}</div>
            </div>
            <Button button_type="submit" disabled=busy>
                "Save changes"
            </Button>
        </form>
    }
}
