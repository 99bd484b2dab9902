//! Orchestration core for the Tidepool frontend.
//!
//! The application delegates everything hard (credentials, session tokens,
//! email delivery, persistence) to two hosted collaborators: an identity
//! service and a document store. This crate holds the part we own — the
//! data model, the service trait seams, the auth flow controller, and the
//! profile management operations — without any wasm or HTTP dependency, so
//! the flows are testable on the host against in-memory fakes.
//!
//! Flow Overview:
//! - `flow` drives the sign-in / sign-up / forgot-password screens and owns
//!   the screen state machine.
//! - `account` loads, renames, and deletes the current user's profile
//!   document together with the account itself.
//! - `services` defines the two collaborator traits; the web app supplies
//!   REST-backed implementations.

pub mod account;
pub mod error;
pub mod flow;
pub mod profile;
pub mod services;

pub use account::{delete_account, load_profile, rename_profile};
pub use error::{DeleteAccountError, FlowError, IdentityError, StoreError};
pub use flow::{
    AuthScreen, PhotoUpload, SignInOutcome, SignUpForm, ensure_profile, request_password_reset,
    sign_in, sign_up,
};
pub use profile::{DEFAULT_DISPLAY_NAME, PROFILE_COLLECTION, ProfilePatch, UserProfile};
pub use services::{Account, DocumentStore, IdentityService};
