//! Backend client initialization.
//!
//! Both hosted collaborators are reached through one `Backend` handle built
//! from `AppConfig` when the app mounts and shared by reference through
//! Leptos context for the rest of the process lifetime. There is no teardown;
//! the handle lives as long as the page.

mod documents;
mod identity;

pub(crate) use documents::DocumentClient;
pub(crate) use identity::IdentityClient;

use crate::app_lib::config::AppConfig;
use leptos::prelude::*;
use std::rc::Rc;

/// Handles to the identity service and the document store.
pub struct Backend {
    pub identity: IdentityClient,
    pub documents: DocumentClient,
}

impl Backend {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            identity: IdentityClient::new(&config.identity_url, &config.api_key),
            documents: DocumentClient::new(&config.docstore_url, &config.api_key),
        }
    }
}

/// Builds the backend handle once and provides it to the component tree.
#[component]
pub fn BackendProvider(children: Children) -> impl IntoView {
    let backend = Rc::new(Backend::from_config(&AppConfig::load()));
    provide_context(backend);

    view! { {children()} }
}

/// Returns the shared backend handle, or a freshly configured one when
/// called outside the provider.
pub fn use_backend() -> Rc<Backend> {
    use_context::<Rc<Backend>>()
        .unwrap_or_else(|| Rc::new(Backend::from_config(&AppConfig::load())))
}
