//! In-memory fakes for the two hosted collaborators.
//!
//! Both fakes record every remote operation in `calls`, so tests can assert
//! that local validation short-circuits before any network traffic.

use account_core::{
    Account, DocumentStore, IdentityError, IdentityService, ProfilePatch, StoreError, UserProfile,
};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct FakeAccount {
    pub id: String,
    pub email: String,
    pub password: String,
    pub verified: bool,
    pub display_name: Option<String>,
}

#[derive(Default)]
pub struct FakeIdentity {
    accounts: RefCell<HashMap<String, FakeAccount>>,
    next_id: Cell<u32>,
    /// Account id of the active session, if any.
    pub session: RefCell<Option<String>>,
    pub verification_emails: RefCell<Vec<String>>,
    pub reset_emails: RefCell<Vec<String>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub fail_verification_send: Cell<bool>,
    pub fail_delete: Cell<bool>,
    pub rate_limited: Cell<bool>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str, verified: bool) -> Self {
        let id = format!("uid-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.accounts.borrow_mut().insert(
            email.to_string(),
            FakeAccount {
                id,
                email: email.to_string(),
                password: password.to_string(),
                verified,
                display_name: None,
            },
        );
        self
    }

    pub fn account(&self, email: &str) -> Option<FakeAccount> {
        self.accounts.borrow().get(email).cloned()
    }

    pub fn signed_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn remote_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    fn to_account(record: &FakeAccount) -> Account {
        Account {
            id: record.id.clone(),
            email: record.email.clone(),
            email_verified: record.verified,
        }
    }
}

#[async_trait(?Send)]
impl IdentityService for FakeIdentity {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        self.calls.borrow_mut().push("authenticate");
        if self.rate_limited.get() {
            return Err(IdentityError::TooManyRequests);
        }
        let accounts = self.accounts.borrow();
        let record = accounts.get(email).ok_or(IdentityError::UserNotFound)?;
        if record.password != password {
            return Err(IdentityError::WrongPassword);
        }
        *self.session.borrow_mut() = Some(record.id.clone());
        Ok(Self::to_account(record))
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<Account, IdentityError> {
        self.calls.borrow_mut().push("create_account");
        if self.accounts.borrow().contains_key(email) {
            return Err(IdentityError::EmailInUse);
        }
        if password.len() < 6 {
            return Err(IdentityError::WeakPassword);
        }
        let id = format!("uid-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let record = FakeAccount {
            id: id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            verified: false,
            display_name: None,
        };
        let account = Self::to_account(&record);
        self.accounts.borrow_mut().insert(email.to_string(), record);
        *self.session.borrow_mut() = Some(id);
        Ok(account)
    }

    async fn update_display_name(
        &self,
        account: &Account,
        name: &str,
    ) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push("update_display_name");
        let mut accounts = self.accounts.borrow_mut();
        let record = accounts
            .values_mut()
            .find(|record| record.id == account.id)
            .ok_or(IdentityError::UserNotFound)?;
        record.display_name = Some(name.to_string());
        Ok(())
    }

    async fn delete_account(&self, account: &Account) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push("delete_account");
        if self.fail_delete.get() {
            return Err(IdentityError::RequiresRecentLogin);
        }
        self.accounts
            .borrow_mut()
            .retain(|_, record| record.id != account.id);
        Ok(())
    }

    async fn sign_out(&self) {
        *self.session.borrow_mut() = None;
    }

    async fn send_verification_email(&self, account: &Account) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push("send_verification_email");
        if self.fail_verification_send.get() {
            return Err(IdentityError::Unavailable("mail relay down".to_string()));
        }
        self.verification_emails
            .borrow_mut()
            .push(account.email.clone());
        Ok(())
    }

    async fn send_password_reset_email(&self, email: &str) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push("send_password_reset_email");
        if !self.accounts.borrow().contains_key(email) {
            return Err(IdentityError::UserNotFound);
        }
        self.reset_emails.borrow_mut().push(email.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeStore {
    documents: RefCell<HashMap<String, UserProfile>>,
    pub patches: RefCell<Vec<ProfilePatch>>,
    pub calls: RefCell<Vec<&'static str>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, account_id: &str, profile: UserProfile) -> Self {
        self.documents
            .borrow_mut()
            .insert(account_id.to_string(), profile);
        self
    }

    pub fn profile(&self, account_id: &str) -> Option<UserProfile> {
        self.documents.borrow().get(account_id).cloned()
    }

    pub fn remote_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl DocumentStore for FakeStore {
    async fn read_profile(&self, account_id: &str) -> Result<Option<UserProfile>, StoreError> {
        self.calls.borrow_mut().push("read_profile");
        Ok(self.documents.borrow().get(account_id).cloned())
    }

    async fn write_profile(
        &self,
        account_id: &str,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        self.calls.borrow_mut().push("write_profile");
        self.documents
            .borrow_mut()
            .insert(account_id.to_string(), profile.clone());
        Ok(())
    }

    async fn patch_profile(
        &self,
        account_id: &str,
        patch: &ProfilePatch,
    ) -> Result<(), StoreError> {
        self.calls.borrow_mut().push("patch_profile");
        self.patches.borrow_mut().push(patch.clone());
        let mut documents = self.documents.borrow_mut();
        let profile = documents.get_mut(account_id).ok_or(StoreError::NotFound)?;
        if let Some(name) = &patch.name {
            profile.name = name.clone();
        }
        Ok(())
    }

    async fn delete_profile(&self, account_id: &str) -> Result<(), StoreError> {
        self.calls.borrow_mut().push("delete_profile");
        self.documents.borrow_mut().remove(account_id);
        Ok(())
    }
}
