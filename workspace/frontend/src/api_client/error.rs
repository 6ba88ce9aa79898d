use std::fmt;

use serde_json::Value;

/// Normalized error for every API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, timeout, abort.
    Network { message: String },
    /// Non-2xx response. `message` prefers what the server said over the
    /// bare status code; `body` keeps the original payload for diagnostics.
    Server {
        status: u16,
        message: String,
        body: Option<Value>,
    },
    /// Response arrived but its payload did not match the expected shape.
    Decode { message: String },
    /// Client-side invariant violated before any request was issued.
    Validation { message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn decode(source: impl fmt::Display) -> Self {
        ApiError::Decode {
            message: format!("Failed to parse response: {source}"),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    /// Build a server error from a status code and the (possibly absent,
    /// possibly non-JSON) response body.
    pub fn server(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| format!("HTTP error: {status}"));
        ApiError::Server {
            status,
            message,
            body,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Network { message }
            | ApiError::Server { message, .. }
            | ApiError::Decode { message }
            | ApiError::Validation { message } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Extract a human-readable message from an error body, preferring the
/// server's own wording: a top-level `message`, then DRF's `detail`, then a
/// `message` nested under an `error` object.
fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("detail"))
        .or_else(|| body.get("error").and_then(|err| err.get("message")))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_prefers_message_field() {
        let err = ApiError::server(400, Some(json!({"message": "bad month", "detail": "other"})));
        assert_eq!(err.message(), "bad month");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_server_message_falls_back_to_detail() {
        let err = ApiError::server(404, Some(json!({"detail": "Not found."})));
        assert_eq!(err.message(), "Not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_server_message_reads_nested_error_object() {
        let body = json!({
            "error": {"code": "NO_DATA_AVAILABLE", "message": "No performance data for 2024-02"},
            "isSuccess": false
        });
        let err = ApiError::server(404, Some(body));
        assert_eq!(err.message(), "No performance data for 2024-02");
    }

    #[test]
    fn test_status_code_fallback_when_body_is_opaque() {
        let err = ApiError::server(502, Some(json!({"unexpected": true})));
        assert_eq!(err.message(), "HTTP error: 502");

        let err = ApiError::server(500, None);
        assert_eq!(err.message(), "HTTP error: 500");
    }

    #[test]
    fn test_network_errors_have_no_status() {
        let err = ApiError::network("Request failed: connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(format!("{err}"), "Request failed: connection refused");
    }
}
