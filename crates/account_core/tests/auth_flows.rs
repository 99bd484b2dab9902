//! Auth flow tests against in-memory collaborators.

mod support;

use account_core::{
    DEFAULT_DISPLAY_NAME, FlowError, PhotoUpload, SignInOutcome, SignUpForm,
    request_password_reset, sign_in, sign_up,
};
use support::{FakeIdentity, FakeStore};

fn form(name: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
    SignUpForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        photo: None,
    }
}

#[tokio::test]
async fn sign_up_creates_account_and_profile_then_signs_out() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();

    sign_up(&identity, &store, &form("Ann", "a@x.com", "secret1", "secret1"))
        .await
        .expect("sign-up succeeds");

    let account = identity.account("a@x.com").expect("account exists");
    assert_eq!(account.display_name.as_deref(), Some("Ann"));

    let profile = store.profile(&account.id).expect("profile document exists");
    assert_eq!(profile.name, "Ann");
    assert_eq!(profile.email, "a@x.com");
    assert_eq!(profile.photo_file_name, "");
    assert_eq!(profile.photo_base64, "");
    assert!(!profile.created_at.is_empty());

    assert_eq!(identity.verification_emails.borrow().as_slice(), ["a@x.com"]);
    assert!(!identity.signed_in(), "session must end signed out");
}

#[tokio::test]
async fn sign_up_stores_the_selected_photo() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();
    let mut form = form("Ann", "a@x.com", "secret1", "secret1");
    form.photo = Some(PhotoUpload {
        file_name: "avatar.png".to_string(),
        base64: "aGVsbG8=".to_string(),
    });

    sign_up(&identity, &store, &form).await.expect("sign-up succeeds");

    let account = identity.account("a@x.com").expect("account exists");
    let profile = store.profile(&account.id).expect("profile document exists");
    assert_eq!(profile.photo_file_name, "avatar.png");
    assert_eq!(profile.photo_base64, "aGVsbG8=");
}

#[tokio::test]
async fn sign_up_blank_name_skips_display_name_call() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();

    sign_up(&identity, &store, &form("   ", "a@x.com", "secret1", "secret1"))
        .await
        .expect("sign-up succeeds");

    assert!(
        !identity.calls.borrow().contains(&"update_display_name"),
        "blank name must not be sent to the identity service"
    );
    let account = identity.account("a@x.com").expect("account exists");
    assert_eq!(account.display_name, None);

    let profile = store.profile(&account.id).expect("profile document exists");
    assert_eq!(profile.name, "");
    assert!(!identity.signed_in(), "session must end signed out");
}

#[tokio::test]
async fn sign_up_password_mismatch_makes_no_network_call() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();

    let err = sign_up(&identity, &store, &form("Ann", "a@x.com", "secret1", "secret2"))
        .await
        .expect_err("mismatch is rejected");

    assert_eq!(
        err,
        FlowError::Validation("Passwords do not match.".to_string())
    );
    assert_eq!(identity.remote_calls(), 0);
    assert_eq!(store.remote_calls(), 0);
}

#[tokio::test]
async fn sign_up_duplicate_email_offers_sign_in() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);
    let store = FakeStore::new();

    let err = sign_up(&identity, &store, &form("Ann", "a@x.com", "secret1", "secret1"))
        .await
        .expect_err("duplicate email is rejected");

    assert_eq!(err, FlowError::EmailTaken);
    assert_eq!(
        err.to_string(),
        "This email is already registered. Try signing in instead."
    );
}

#[tokio::test]
async fn sign_up_weak_password_shows_minimum_length() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();

    let err = sign_up(&identity, &store, &form("Ann", "a@x.com", "abc", "abc"))
        .await
        .expect_err("weak password is rejected");

    assert_eq!(err, FlowError::WeakPassword);
    assert_eq!(err.to_string(), "Password must be at least 6 characters.");
}

#[tokio::test]
async fn sign_up_verification_failure_leaves_account_and_document_behind() {
    // The verification send is the fourth of five steps and has no rollback:
    // its failure aborts the flow with the account and document already
    // created. That partial-failure exposure is the documented behavior.
    let identity = FakeIdentity::new();
    identity.fail_verification_send.set(true);
    let store = FakeStore::new();

    let err = sign_up(&identity, &store, &form("Ann", "a@x.com", "secret1", "secret1"))
        .await
        .expect_err("send failure aborts the flow");

    assert_eq!(err, FlowError::Backend);
    let account = identity.account("a@x.com").expect("orphaned account remains");
    assert!(store.profile(&account.id).is_some(), "document remains");
}

#[tokio::test]
async fn sign_in_wrong_password_shows_exact_message() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);
    let store = FakeStore::new();

    let err = sign_in(&identity, &store, "a@x.com", "nope")
        .await
        .expect_err("wrong password is rejected");

    assert_eq!(err.to_string(), "Password or Email Incorrect");
    assert!(!identity.signed_in());
}

#[tokio::test]
async fn sign_in_unknown_account_shows_same_message_as_wrong_password() {
    let identity = FakeIdentity::new();
    let store = FakeStore::new();

    let err = sign_in(&identity, &store, "nobody@x.com", "secret1")
        .await
        .expect_err("unknown account is rejected");

    assert_eq!(err, FlowError::BadCredentials);
}

#[tokio::test]
async fn sign_in_rate_limited_is_surfaced() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);
    identity.rate_limited.set(true);
    let store = FakeStore::new();

    let err = sign_in(&identity, &store, "a@x.com", "secret1")
        .await
        .expect_err("rate limit is surfaced");

    assert_eq!(err, FlowError::RateLimited);
}

#[tokio::test]
async fn sign_in_unverified_resends_and_signs_out() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", false);
    let store = FakeStore::new();

    let outcome = sign_in(&identity, &store, "a@x.com", "secret1")
        .await
        .expect("credential check succeeds");

    assert_eq!(outcome, SignInOutcome::VerificationPending);
    assert_eq!(identity.verification_emails.borrow().as_slice(), ["a@x.com"]);
    assert!(!identity.signed_in(), "unverified sign-in must sign out");
}

#[tokio::test]
async fn sign_in_unverified_resend_failure_is_swallowed() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", false);
    identity.fail_verification_send.set(true);
    let store = FakeStore::new();

    let outcome = sign_in(&identity, &store, "a@x.com", "secret1")
        .await
        .expect("resend failure must not fail the flow");

    assert_eq!(outcome, SignInOutcome::VerificationPending);
    assert!(identity.verification_emails.borrow().is_empty());
}

#[tokio::test]
async fn sign_in_creates_default_profile_when_missing() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);
    let store = FakeStore::new();

    let outcome = sign_in(&identity, &store, "a@x.com", "secret1")
        .await
        .expect("sign-in succeeds");

    let account = match outcome {
        SignInOutcome::SessionActive(account) => account,
        other => panic!("expected active session, got {other:?}"),
    };
    let profile = store.profile(&account.id).expect("profile was created");
    assert_eq!(profile.name, DEFAULT_DISPLAY_NAME);
    assert_eq!(profile.email, "a@x.com");
    assert!(identity.signed_in(), "verified sign-in keeps the session");
}

#[tokio::test]
async fn sign_in_leaves_existing_profile_untouched() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);
    let account = identity.account("a@x.com").expect("account exists");
    let existing = account_core::UserProfile::new("Ann", "a@x.com");
    let store = FakeStore::new().with_profile(&account.id, existing.clone());

    sign_in(&identity, &store, "a@x.com", "secret1")
        .await
        .expect("sign-in succeeds");

    assert_eq!(store.profile(&account.id), Some(existing));
}

#[tokio::test]
async fn forgot_password_empty_email_makes_no_network_call() {
    let identity = FakeIdentity::new();

    let err = request_password_reset(&identity, "  ")
        .await
        .expect_err("empty email is rejected");

    assert_eq!(err.to_string(), "Please enter your email address.");
    assert_eq!(identity.remote_calls(), 0);
}

#[tokio::test]
async fn forgot_password_dispatches_reset_link() {
    let identity = FakeIdentity::new().with_account("a@x.com", "secret1", true);

    request_password_reset(&identity, "a@x.com")
        .await
        .expect("reset dispatch succeeds");

    assert_eq!(identity.reset_emails.borrow().as_slice(), ["a@x.com"]);
}

#[tokio::test]
async fn forgot_password_unknown_email_is_reported() {
    let identity = FakeIdentity::new();

    let err = request_password_reset(&identity, "nobody@x.com")
        .await
        .expect_err("unknown email is rejected");

    assert_eq!(err, FlowError::UnknownEmail);
}
