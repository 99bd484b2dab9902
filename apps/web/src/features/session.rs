//! In-memory session state shared through Leptos context.
//!
//! The identity service exposes no session-restore operation, so the session
//! lives only for the page's lifetime: set after a verified sign-in, cleared
//! on sign-out or account deletion. Only non-sensitive account metadata is
//! held here; tokens stay inside the identity client.

use account_core::Account;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub account: RwSignal<Option<Account>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(account: RwSignal<Option<Account>>) -> Self {
        let is_authenticated = Signal::derive(move || account.get().is_some());
        Self {
            account,
            is_authenticated,
        }
    }

    /// Marks the session active after a verified sign-in.
    pub fn set_account(&self, account: Account) {
        self.account.set(Some(account));
    }

    /// Clears the session on sign-out or account deletion.
    pub fn clear(&self) {
        self.account.set(None);
    }
}

/// Provides the session context for the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let account = RwSignal::new(None);
    provide_context(SessionContext::new(account));

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let account = RwSignal::new(None);
        SessionContext::new(account)
    })
}
