use std::fmt;

/// Maximum number of error body characters surfaced by `Display`.
const MAX_ERROR_CHARS: usize = 200;

/// Transport-level failure from the HTTP helpers.
///
/// `Http` keeps the full response body so feature clients can decode the
/// backend's error category; `Display` truncates it for diagnostics.
#[derive(Clone, Debug)]
pub enum ApiError {
    Network(String),
    Timeout(String),
    Http { status: u16, body: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::Http { status, body } => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    write!(formatter, "Request failed ({status})")
                } else {
                    let snippet: String = trimmed.chars().take(MAX_ERROR_CHARS).collect();
                    write!(formatter, "Request failed ({status}): {snippet}")
                }
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}
