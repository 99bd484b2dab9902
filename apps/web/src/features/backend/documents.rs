//! REST client for the hosted document store, scoped to the profile
//! collection. Documents are addressed by key only; no queries, no
//! transactions.

use crate::app_lib::{ApiError, api};
use account_core::{
    DocumentStore, PROFILE_COLLECTION, ProfilePatch, StoreError, UserProfile,
};
use async_trait::async_trait;

pub struct DocumentClient {
    base_url: String,
    api_key: String,
}

impl DocumentClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![("X-Api-Key".to_string(), self.api_key.clone())]
    }

    fn document_path(account_id: &str) -> String {
        format!("/v1/collections/{PROFILE_COLLECTION}/{account_id}")
    }
}

#[async_trait(?Send)]
impl DocumentStore for DocumentClient {
    async fn read_profile(&self, account_id: &str) -> Result<Option<UserProfile>, StoreError> {
        api::get_optional_json(
            &self.base_url,
            &Self::document_path(account_id),
            &self.headers(),
        )
        .await
        .map_err(store_error)
    }

    async fn write_profile(
        &self,
        account_id: &str,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        api::put_json(
            &self.base_url,
            &Self::document_path(account_id),
            profile,
            &self.headers(),
        )
        .await
        .map_err(store_error)
    }

    async fn patch_profile(
        &self,
        account_id: &str,
        patch: &ProfilePatch,
    ) -> Result<(), StoreError> {
        api::patch_json(
            &self.base_url,
            &Self::document_path(account_id),
            patch,
            &self.headers(),
        )
        .await
        .map_err(store_error)
    }

    async fn delete_profile(&self, account_id: &str) -> Result<(), StoreError> {
        api::delete(
            &self.base_url,
            &Self::document_path(account_id),
            &self.headers(),
        )
        .await
        .map_err(store_error)
    }
}

fn store_error(err: ApiError) -> StoreError {
    match err {
        ApiError::Http { status: 404, .. } => StoreError::NotFound,
        other => StoreError::Unavailable(other.to_string()),
    }
}
