//! Profile management: load, rename, and account deletion.

use crate::error::{DeleteAccountError, StoreError};
use crate::profile::{ProfilePatch, UserProfile};
use crate::services::{Account, DocumentStore, IdentityService};

/// Fetches the profile document for an account id. Callers with no active
/// session skip this entirely; a missing document is `Ok(None)`.
pub async fn load_profile<D>(store: &D, account_id: &str) -> Result<Option<UserProfile>, StoreError>
where
    D: DocumentStore + ?Sized,
{
    store.read_profile(account_id).await
}

/// Updates the display name with a name-only partial update, then re-reads
/// the document to confirm what was persisted.
pub async fn rename_profile<D>(
    store: &D,
    account_id: &str,
    new_name: &str,
) -> Result<UserProfile, StoreError>
where
    D: DocumentStore + ?Sized,
{
    store
        .patch_profile(account_id, &ProfilePatch::rename(new_name))
        .await?;

    store
        .read_profile(account_id)
        .await?
        .ok_or(StoreError::NotFound)
}

/// Deletes the profile document, then the account, in that order.
///
/// The two steps are not atomic: when the identity service refuses the
/// second step (for example with a stale session), the document is already
/// gone, the error is surfaced, and the session stays active. Only a fully
/// successful deletion signs the session out.
pub async fn delete_account<I, D>(
    identity: &I,
    store: &D,
    account: &Account,
) -> Result<(), DeleteAccountError>
where
    I: IdentityService + ?Sized,
    D: DocumentStore + ?Sized,
{
    store
        .delete_profile(&account.id)
        .await
        .map_err(DeleteAccountError::Profile)?;

    identity
        .delete_account(account)
        .await
        .map_err(DeleteAccountError::Account)?;

    identity.sign_out().await;
    Ok(())
}
