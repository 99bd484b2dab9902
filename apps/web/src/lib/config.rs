//! Build-time configuration for the two backend endpoints with an optional
//! runtime override. The runtime config is read from `window.TIDEPOOL_CONFIG`
//! (if present) so static deployments can repoint the backends without a
//! rebuild. All values here are public; the API key identifies the app, it
//! does not authenticate users.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the hosted identity service.
    pub identity_url: String,
    /// Base URL of the hosted document store.
    pub docstore_url: String,
    /// Public application key sent with every backend request.
    pub api_key: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides.
    pub fn load() -> Self {
        let identity_url = option_env!("TIDEPOOL_IDENTITY_URL").unwrap_or("");
        let docstore_url = option_env!("TIDEPOOL_DOCSTORE_URL").unwrap_or("");
        let api_key = option_env!("TIDEPOOL_API_KEY").unwrap_or("");

        let mut config = Self {
            identity_url: identity_url.to_string(),
            docstore_url: docstore_url.to_string(),
            api_key: api_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    identity_url: Option<String>,
    docstore_url: Option<String>,
    api_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.identity_url {
        config.identity_url = value;
    }
    if let Some(value) = runtime.docstore_url {
        config.docstore_url = value;
    }
    if let Some(value) = runtime.api_key {
        config.api_key = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("TIDEPOOL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        identity_url: read_runtime_value(&object, "identity_url"),
        docstore_url: read_runtime_value(&object, "docstore_url"),
        api_key: read_runtime_value(&object, "api_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
