//! Frontend feature areas: the backend service clients and the in-memory
//! session. Routes import these to keep view code focused on rendering.

pub(crate) mod backend;
pub(crate) mod session;
