//! Trait seams for the two hosted collaborators.
//!
//! The web app implements these over REST; tests implement them with
//! in-memory fakes. Futures are `?Send` because the production
//! implementations run on the wasm single-threaded executor.

use crate::error::{IdentityError, StoreError};
use crate::profile::{ProfilePatch, UserProfile};
use async_trait::async_trait;

/// An authenticated account as reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier assigned by the identity service; also the profile
    /// document key.
    pub id: String,
    pub email: String,
    pub email_verified: bool,
}

/// The hosted identity service, consumed only through the operations the
/// app actually invokes.
#[async_trait(?Send)]
pub trait IdentityService {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, IdentityError>;

    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError>;

    async fn update_display_name(
        &self,
        account: &Account,
        name: &str,
    ) -> Result<(), IdentityError>;

    /// Irreversibly deletes the account. The service may refuse with
    /// `RequiresRecentLogin` for stale sessions.
    async fn delete_account(&self, account: &Account) -> Result<(), IdentityError>;

    /// Discards the local session state. Purely local, never fails.
    async fn sign_out(&self);

    async fn send_verification_email(&self, account: &Account) -> Result<(), IdentityError>;

    async fn send_password_reset_email(&self, email: &str) -> Result<(), IdentityError>;
}

/// The hosted document store, scoped to the `users` collection. No queries
/// or transactions, only key lookup.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Reads the profile for an account id; `Ok(None)` when no document
    /// exists.
    async fn read_profile(&self, account_id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Writes the full profile document, replacing any existing one.
    async fn write_profile(
        &self,
        account_id: &str,
        profile: &UserProfile,
    ) -> Result<(), StoreError>;

    /// Applies a partial update; fields absent from the patch are untouched.
    async fn patch_profile(&self, account_id: &str, patch: &ProfilePatch)
        -> Result<(), StoreError>;

    async fn delete_profile(&self, account_id: &str) -> Result<(), StoreError>;
}
