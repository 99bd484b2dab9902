//! HTTP helpers for the two hosted backends. Every request carries the same
//! abort-based timeout so an unreachable service cannot leave the UI hanging,
//! and HTTP failures keep their body so feature clients can decode the
//! backend's error category. Callers supply the base URL and any headers;
//! nothing here stores tokens.

use super::errors::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Request timeout (milliseconds) applied to all helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches a JSON document; a 404 is `Ok(None)` instead of an error.
pub async fn get_optional_json<T: DeserializeOwned>(
    base_url: &str,
    path: &str,
    headers: &[(String, String)],
) -> Result<Option<T>, ApiError> {
    let response = send_empty(Request::get(&build_url(base_url, path)), headers).await?;
    if response.status() == 404 {
        return Ok(None);
    }
    parse_json_response(response).await.map(Some)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    base_url: &str,
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<T, ApiError> {
    let response = send_body(Request::post(&build_url(base_url, path)), body, headers).await?;
    parse_json_response(response).await
}

pub async fn post_json_empty<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), ApiError> {
    let response = send_body(Request::post(&build_url(base_url, path)), body, headers).await?;
    expect_success(response).await
}

pub async fn put_json<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), ApiError> {
    let response = send_body(Request::put(&build_url(base_url, path)), body, headers).await?;
    expect_success(response).await
}

pub async fn patch_json<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), ApiError> {
    let response = send_body(Request::patch(&build_url(base_url, path)), body, headers).await?;
    expect_success(response).await
}

pub async fn delete(
    base_url: &str,
    path: &str,
    headers: &[(String, String)],
) -> Result<(), ApiError> {
    let response = send_empty(Request::delete(&build_url(base_url, path)), headers).await?;
    expect_success(response).await
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

async fn send_empty(
    builder: RequestBuilder,
    headers: &[(String, String)],
) -> Result<Response, ApiError> {
    send_with_timeout(builder, headers, None).await
}

async fn send_body<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    headers: &[(String, String)],
) -> Result<Response, ApiError> {
    let payload = to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
    send_with_timeout(builder, headers, Some(payload)).await
}

/// Sends a request with an abort timeout so a stalled backend cannot pin the
/// loading state forever.
async fn send_with_timeout(
    mut builder: RequestBuilder,
    headers: &[(String, String)],
    payload: Option<String>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    builder = builder.abort_signal(Some(&signal));
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let request = match payload {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(payload),
        None => builder.build(),
    }
    .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))?;

    request.send().await.map_err(map_request_error)
}

fn map_request_error(err: gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {message}"))
    }
}

async fn parse_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http { status, body }
}
