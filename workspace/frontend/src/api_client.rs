//! HTTP client for the CivicView backend REST API.
//!
//! The backend wraps every response in `{data, error, isSuccess}`; the client
//! unwraps the `data` field transparently and tolerates bare payloads, so
//! call sites only ever see the domain shape. All failures normalize into
//! [`ApiError`]. Requests carry a fixed timeout and are never retried.

pub mod compare;
pub mod districts;
pub mod error;
pub mod health;

pub use compare::CompareParams;
pub use districts::DistrictQuery;
pub use error::ApiError;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::settings::AppSettings;

/// Client for the CivicView backend. Constructed once at startup and shared
/// with pages through a context provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url(),
            timeout_ms: settings.request_timeout_ms,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request and decode the unwrapped payload.
    pub async fn get<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_value(endpoint).await?;
        serde_json::from_value(unwrap_envelope(body)).map_err(|e| {
            let err = ApiError::decode(e);
            log::error!("GET {} - {}", endpoint, err);
            err
        })
    }

    /// Issue a GET request and return the JSON body before envelope
    /// unwrapping, for endpoints whose payload shape varies.
    pub(crate) async fn get_value(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("GET request to: {}", url);

        // Abort the fetch if it outlives the timeout; the timer cancels on
        // drop once the exchange settles.
        let controller = web_sys::AbortController::new().ok();
        let _abort_timer = controller.clone().map(|controller| {
            Timeout::new(self.timeout_ms, move || {
                log::warn!("Request timed out, aborting");
                controller.abort();
            })
        });

        let mut request = Request::get(&url);
        if let Some(controller) = &controller {
            request = request.abort_signal(Some(&controller.signal()));
        }

        let response = request.send().await.map_err(|e| {
            let err = ApiError::network(format!("Request failed: {e}"));
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

        let status = response.status();
        let ok = response.ok();
        let text = response.text().await.map_err(|e| {
            let err = ApiError::network(format!("Failed to read response body: {e}"));
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

        if !ok {
            let body = serde_json::from_str::<Value>(&text).ok();
            let err = ApiError::server(status, body);
            log::error!("GET {} - {}", endpoint, err);
            return Err(err);
        }

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        serde_json::from_str(&text).map_err(|e| {
            let err = ApiError::decode(e);
            log::error!("GET {} - {}", endpoint, err);
            err
        })
    }
}

/// Unwrap the backend's `{data, error, isSuccess}` envelope: take the `data`
/// field when present, otherwise pass the body through untouched.
pub(crate) fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Normalize list payloads: the backend may answer with a bare array or a
/// paginated `{results: [...]}` wrapper.
pub(crate) fn unwrap_results(body: Value) -> Value {
    match body {
        Value::Object(mut map) if matches!(map.get("results"), Some(Value::Array(_))) => {
            map.remove("results").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_data_field_is_unwrapped() {
        let body = json!({"data": {"foo": 1}, "error": null, "isSuccess": true});
        assert_eq!(unwrap_envelope(body), json!({"foo": 1}));
    }

    #[test]
    fn test_bare_body_passes_through() {
        let body = json!({"foo": 1});
        assert_eq!(unwrap_envelope(body), json!({"foo": 1}));
    }

    #[test]
    fn test_null_data_is_preserved() {
        let body = json!({"data": null, "error": {"code": "X"}, "isSuccess": false});
        assert_eq!(unwrap_envelope(body), json!(null));
    }

    #[test]
    fn test_array_body_passes_through() {
        let body = json!([1, 2, 3]);
        assert_eq!(unwrap_envelope(body), json!([1, 2, 3]));
    }

    #[test]
    fn test_paginated_results_are_unwrapped() {
        let body = json!({"count": 2, "results": [{"id": 1}, {"id": 2}]});
        assert_eq!(unwrap_results(body), json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn test_bare_array_results_pass_through() {
        let body = json!([{"id": 1}]);
        assert_eq!(unwrap_results(body), json!([{"id": 1}]));
    }

    #[test]
    fn test_non_array_results_field_is_not_unwrapped() {
        let body = json!({"results": "none"});
        assert_eq!(unwrap_results(body), json!({"results": "none"}));
    }
}
