use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// API error types
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body carried by non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// API client for making HTTP requests to the energy backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the base URL from window.ENV
    pub fn new() -> Self {
        let base_url = get_api_url();
        Self { base_url }
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response. Non-2xx bodies carry `{ "error": "..." }`;
    /// that text is surfaced verbatim so the user sees the backend's reason.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !response.ok() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = error_body_message(&text).unwrap_or(text);
            return Err(ApiError::Http { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the backend's reason from a `{ "error": "..." }` body.
/// Returns None for non-JSON bodies or bodies without an `error` key.
fn error_body_message(text: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.error)
}

/// Get API URL from window.ENV or use default
fn get_api_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(env) = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")) {
                if !env.is_undefined() {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &JsValue::from_str("API_URL")) {
                        if let Some(url) = api_url.as_string() {
                            return url;
                        }
                    }
                }
            }
        }
    }

    // Default fallback
    "http://localhost:5000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_takes_the_backend_reason() {
        let body = r#"{"error": "Missing 'date' column"}"#;
        assert_eq!(
            error_body_message(body).as_deref(),
            Some("Missing 'date' column")
        );
    }

    #[test]
    fn error_body_without_error_key_yields_none() {
        assert_eq!(error_body_message(r#"{"detail": "nope"}"#), None);
    }

    #[test]
    fn non_json_error_body_yields_none() {
        assert_eq!(error_body_message("Bad Gateway"), None);
    }
}
