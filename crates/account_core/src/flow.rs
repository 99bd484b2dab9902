//! Auth flow controller: screen state and the sign-in / sign-up /
//! forgot-password orchestrations.
//!
//! Each flow validates its inputs locally before touching the network, then
//! performs its remote calls in a fixed observable order. The sign-up
//! sequence (create account, set display name, write profile, send
//! verification, sign out) has no compensating rollback: a failure partway
//! through leaves the earlier steps in place. That exposure is part of the
//! contract and is asserted by tests rather than papered over.

use crate::error::{FlowError, IdentityError, StoreError};
use crate::profile::UserProfile;
use crate::services::{Account, DocumentStore, IdentityService};

/// Which auth screen is showing. One tagged state instead of a pile of
/// booleans, so invalid combinations cannot be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword {
        link_sent: bool,
    },
    VerificationPending,
}

/// Result of a successful credential check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Email is verified; the session stays active and downstream code
    /// observes it.
    SessionActive(Account),
    /// Email is unverified; the session was signed out and the UI should
    /// show the verification-pending screen.
    VerificationPending,
}

/// Avatar selected in the sign-up form, already read into inline text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub base64: String,
}

/// Raw sign-up form state as captured by the view.
#[derive(Clone, Debug, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub photo: Option<PhotoUpload>,
}

/// Authenticates and ensures the account's profile document exists.
///
/// Unverified accounts get a best-effort verification resend (failures are
/// logged and swallowed, never shown), an immediate sign-out, and a
/// `VerificationPending` outcome.
pub async fn sign_in<I, D>(
    identity: &I,
    store: &D,
    email: &str,
    password: &str,
) -> Result<SignInOutcome, FlowError>
where
    I: IdentityService + ?Sized,
    D: DocumentStore + ?Sized,
{
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FlowError::Validation(
            "Email and password are required.".to_string(),
        ));
    }

    let account = identity
        .authenticate(email, password)
        .await
        .map_err(sign_in_error)?;

    ensure_profile(store, &account)
        .await
        .map_err(|_| FlowError::Backend)?;

    if !account.email_verified {
        // Non-fatal side effect: the resend may fail silently.
        if let Err(err) = identity.send_verification_email(&account).await {
            tracing::warn!(error = %err, "verification resend failed during sign-in");
        }
        identity.sign_out().await;
        return Ok(SignInOutcome::VerificationPending);
    }

    Ok(SignInOutcome::SessionActive(account))
}

/// Reads the account's profile, creating the default "User" document when
/// none exists yet.
pub async fn ensure_profile<D>(store: &D, account: &Account) -> Result<UserProfile, StoreError>
where
    D: DocumentStore + ?Sized,
{
    if let Some(profile) = store.read_profile(&account.id).await? {
        return Ok(profile);
    }

    let profile = UserProfile::default_for(&account.email);
    store.write_profile(&account.id, &profile).await?;
    Ok(profile)
}

/// Creates the account, its profile document, and kicks off verification.
///
/// Sequence: create account, set display name (when provided), write the
/// profile document, send the verification email, sign out. Unlike the
/// sign-in resend, the verification send here is fatal: its failure aborts
/// the flow after the account and document already exist.
pub async fn sign_up<I, D>(identity: &I, store: &D, form: &SignUpForm) -> Result<(), FlowError>
where
    I: IdentityService + ?Sized,
    D: DocumentStore + ?Sized,
{
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(FlowError::Validation(
            "Email and both password fields are required.".to_string(),
        ));
    }
    if form.password != form.confirm_password {
        return Err(FlowError::Validation("Passwords do not match.".to_string()));
    }

    let account = identity
        .create_account(email, &form.password)
        .await
        .map_err(sign_up_error)?;

    let name = form.name.trim();
    if !name.is_empty() {
        identity
            .update_display_name(&account, name)
            .await
            .map_err(sign_up_error)?;
    }

    let mut profile = UserProfile::new(name, email);
    if let Some(photo) = &form.photo {
        profile = profile.with_photo(photo.file_name.clone(), photo.base64.clone());
    }
    store
        .write_profile(&account.id, &profile)
        .await
        .map_err(|_| FlowError::Backend)?;

    identity
        .send_verification_email(&account)
        .await
        .map_err(sign_up_error)?;

    identity.sign_out().await;
    Ok(())
}

/// Dispatches a password-reset link to the given address.
pub async fn request_password_reset<I>(identity: &I, email: &str) -> Result<(), FlowError>
where
    I: IdentityService + ?Sized,
{
    let email = email.trim();
    if email.is_empty() {
        return Err(FlowError::Validation(
            "Please enter your email address.".to_string(),
        ));
    }

    identity
        .send_password_reset_email(email)
        .await
        .map_err(reset_error)
}

fn sign_in_error(err: IdentityError) -> FlowError {
    match err {
        IdentityError::UserNotFound | IdentityError::WrongPassword => FlowError::BadCredentials,
        IdentityError::TooManyRequests => FlowError::RateLimited,
        _ => FlowError::Backend,
    }
}

fn sign_up_error(err: IdentityError) -> FlowError {
    match err {
        IdentityError::EmailInUse => FlowError::EmailTaken,
        IdentityError::WeakPassword => FlowError::WeakPassword,
        _ => FlowError::Backend,
    }
}

fn reset_error(err: IdentityError) -> FlowError {
    match err {
        IdentityError::UserNotFound => FlowError::UnknownEmail,
        IdentityError::InvalidEmail => FlowError::InvalidEmail,
        _ => FlowError::Backend,
    }
}
