//! Shared frontend utilities: HTTP access, configuration, transport errors,
//! and build metadata.
//!
//! The app talks to two hosted backends — an identity service and a document
//! store — through the helpers in `api`. Both clients live in
//! `features::backend` and are initialized once at startup; routes never
//! build requests themselves. User-facing error copy is owned by
//! `account_core`; this layer only classifies transport failures.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::ApiError;
