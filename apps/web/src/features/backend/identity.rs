//! REST client for the hosted identity service.
//!
//! The service signals failures with named category codes in a JSON error
//! body; everything else (password hashing, session issuance, email
//! delivery) happens on its side. The client keeps the session token in
//! interior state: `authenticate` and `create_account` store it, `sign_out`
//! drops it, and the account-scoped operations refuse to run without it.

use crate::app_lib::{ApiError, api};
use account_core::{Account, IdentityError, IdentityService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::cell::RefCell;

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct DisplayNameRequest<'a> {
    display_name: &'a str,
}

#[derive(Serialize)]
struct PasswordResetRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    account_id: String,
    email: String,
    email_verified: bool,
    token: String,
}

pub struct IdentityClient {
    base_url: String,
    api_key: String,
    token: RefCell<Option<String>>,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            token: RefCell::new(None),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![("X-Api-Key".to_string(), self.api_key.clone())]
    }

    /// Headers for account-scoped operations. Without a live token the
    /// service would refuse anyway, so fail fast with the same category.
    fn auth_headers(&self) -> Result<Vec<(String, String)>, IdentityError> {
        let token = self
            .token
            .borrow()
            .clone()
            .ok_or(IdentityError::RequiresRecentLogin)?;
        let mut headers = self.headers();
        headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        Ok(headers)
    }

    fn adopt_session(&self, response: SessionResponse) -> Account {
        *self.token.borrow_mut() = Some(response.token);
        Account {
            id: response.account_id,
            email: response.email,
            email_verified: response.email_verified,
        }
    }
}

#[async_trait(?Send)]
impl IdentityService for IdentityClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let request = CredentialsRequest { email, password };
        let response: SessionResponse =
            api::post_json(&self.base_url, "/v1/sessions", &request, &self.headers())
                .await
                .map_err(identity_error)?;
        Ok(self.adopt_session(response))
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        let request = CredentialsRequest { email, password };
        let response: SessionResponse =
            api::post_json(&self.base_url, "/v1/accounts", &request, &self.headers())
                .await
                .map_err(identity_error)?;
        Ok(self.adopt_session(response))
    }

    async fn update_display_name(
        &self,
        account: &Account,
        name: &str,
    ) -> Result<(), IdentityError> {
        let headers = self.auth_headers()?;
        let request = DisplayNameRequest { display_name: name };
        api::patch_json(
            &self.base_url,
            &format!("/v1/accounts/{}", account.id),
            &request,
            &headers,
        )
        .await
        .map_err(identity_error)
    }

    async fn delete_account(&self, account: &Account) -> Result<(), IdentityError> {
        let headers = self.auth_headers()?;
        api::delete(
            &self.base_url,
            &format!("/v1/accounts/{}", account.id),
            &headers,
        )
        .await
        .map_err(identity_error)
    }

    async fn sign_out(&self) {
        *self.token.borrow_mut() = None;
    }

    async fn send_verification_email(&self, account: &Account) -> Result<(), IdentityError> {
        let headers = self.auth_headers()?;
        api::post_json_empty(
            &self.base_url,
            &format!("/v1/accounts/{}/verification-email", account.id),
            &json!({}),
            &headers,
        )
        .await
        .map_err(identity_error)
    }

    async fn send_password_reset_email(&self, email: &str) -> Result<(), IdentityError> {
        let request = PasswordResetRequest { email };
        api::post_json_empty(
            &self.base_url,
            "/v1/password-resets",
            &request,
            &self.headers(),
        )
        .await
        .map_err(identity_error)
    }
}

/// Maps a transport failure to the identity error taxonomy, decoding the
/// category code from the response body when one is present.
fn identity_error(err: ApiError) -> IdentityError {
    match &err {
        ApiError::Http { body, .. } => match error_code(body) {
            Some(code) => IdentityError::from_code(&code),
            None => IdentityError::Unavailable(err.to_string()),
        },
        _ => IdentityError::Unavailable(err.to_string()),
    }
}

fn error_code(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|error| error.get("code"))
        .or_else(|| value.get("code"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
