//! The profile document and its partial-update payload.
//!
//! One `UserProfile` document exists per account, keyed by the identity
//! service's account id in the `users` collection. Field names on the wire
//! are camelCase. `createdAt` is set once at creation and never updated.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Document collection holding one profile per account.
pub const PROFILE_COLLECTION: &str = "users";

/// Display name used when a profile is created lazily on first sign-in.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// The persisted profile record for one account.
///
/// `photo_base64` inlines the avatar image as text because no binary object
/// storage is wired up; it is a stand-in, not a durable design choice, and
/// its size is unbounded by this code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub photo_file_name: String,
    pub photo_base64: String,
    pub created_at: String,
}

impl UserProfile {
    /// Builds a fresh profile with empty photo fields and `createdAt` set to
    /// the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            photo_file_name: String::new(),
            photo_base64: String::new(),
            created_at: now_iso8601(),
        }
    }

    /// Attaches an uploaded avatar to a fresh profile.
    #[must_use]
    pub fn with_photo(mut self, file_name: impl Into<String>, base64: impl Into<String>) -> Self {
        self.photo_file_name = file_name.into();
        self.photo_base64 = base64.into();
        self
    }

    /// The profile written on first sign-in when no document exists yet.
    #[must_use]
    pub fn default_for(email: &str) -> Self {
        Self::new(DEFAULT_DISPLAY_NAME, email)
    }
}

/// Partial update for an existing profile document. Only the display name is
/// editable after creation; the photo fields are written once at sign-up.
///
/// Absent fields are omitted from the payload entirely, so a name-only save
/// sends exactly `{"name": ...}` and leaves every other field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProfilePatch {
    /// A patch that updates the display name.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn profile_serializes_with_camel_case_fields() {
        let profile = UserProfile::new("Ann", "a@x.com");
        let value = serde_json::to_value(&profile).expect("serialize profile");
        let object = value.as_object().expect("profile is an object");

        assert_eq!(object["name"], "Ann");
        assert_eq!(object["email"], "a@x.com");
        assert_eq!(object["photoFileName"], "");
        assert_eq!(object["photoBase64"], "");
        assert!(object.contains_key("createdAt"));
    }

    #[test]
    fn created_at_is_parseable_rfc3339() {
        let profile = UserProfile::default_for("a@x.com");
        assert_eq!(profile.name, DEFAULT_DISPLAY_NAME);
        DateTime::parse_from_rfc3339(&profile.created_at).expect("createdAt parses");
    }

    #[test]
    fn rename_patch_sends_only_the_name() {
        let patch = ProfilePatch::rename("Anne");
        let value = serde_json::to_value(&patch).expect("serialize patch");
        let object = value.as_object().expect("patch is an object");

        assert_eq!(object.len(), 1);
        assert_eq!(object["name"], "Anne");
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ProfilePatch::default();
        assert!(patch.is_empty());
        let value = serde_json::to_value(&patch).expect("serialize patch");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(0));
    }
}
