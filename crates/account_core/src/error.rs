//! Error taxonomy for the hosted collaborators and the auth flows.
//!
//! The identity service signals failures with a small set of named category
//! codes; `IdentityError::from_code` maps them and anything unrecognized
//! falls back to `Unavailable`. `FlowError` is the user-facing layer: its
//! `Display` strings are the exact copy rendered by the UI, so routes can
//! show `err.to_string()` directly.

use thiserror::Error;

/// Named error categories reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("no account matches the email")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
    #[error("too many requests")]
    TooManyRequests,
    #[error("email already registered")]
    EmailInUse,
    #[error("password below the minimum length")]
    WeakPassword,
    #[error("malformed email address")]
    InvalidEmail,
    #[error("destructive operation requires a recent sign-in")]
    RequiresRecentLogin,
    #[error("identity service unavailable: {0}")]
    Unavailable(String),
}

impl IdentityError {
    /// Maps a wire category code to a variant. Unknown codes are preserved in
    /// `Unavailable` so diagnostics keep the original string.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "USER_NOT_FOUND" => Self::UserNotFound,
            "WRONG_PASSWORD" => Self::WrongPassword,
            "TOO_MANY_REQUESTS" => Self::TooManyRequests,
            "EMAIL_IN_USE" => Self::EmailInUse,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "REQUIRES_RECENT_LOGIN" => Self::RequiresRecentLogin,
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Failures from the document store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// User-facing failure of an auth flow.
///
/// `Display` is the exact text shown in the UI. `Validation` means no network
/// call was made. The UI matches `EmailTaken` to offer a one-click switch to
/// the sign-in screen.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),
    #[error("Password or Email Incorrect")]
    BadCredentials,
    #[error("Too many attempts. Please try again later.")]
    RateLimited,
    #[error("This email is already registered. Try signing in instead.")]
    EmailTaken,
    #[error("Password must be at least 6 characters.")]
    WeakPassword,
    #[error("No account found for that email address.")]
    UnknownEmail,
    #[error("That email address looks invalid.")]
    InvalidEmail,
    #[error("Something went wrong. Please check your connection and try again.")]
    Backend,
}

/// Failure of the two-step account deletion.
///
/// `Account` means the profile document was already deleted when the identity
/// service refused to remove the account; the inconsistency is surfaced, not
/// reconciled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeleteAccountError {
    #[error("could not delete the profile: {0}")]
    Profile(StoreError),
    #[error("could not delete the account: {0}")]
    Account(IdentityError),
}
