//! Error types for the API client.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::validation::ValidationError;

/// Message used when an error body is not valid JSON.
pub const UNKNOWN_ERROR_FORMAT: &str = "failed to parse unknown error format";

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when building or executing API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client could not be constructed from the given settings.
    #[error("invalid client configuration: {0}")]
    Config(String),
    /// Filter input was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request could not be assembled (bad cursor URL, options not
    /// allowed for the method).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Network failure after retries were exhausted.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The call's cancellation token fired.
    #[error("request cancelled")]
    Cancelled,
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Success status, but the body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The options struct could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(e) => Some(e.status()),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the failure class is one the client retries on.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Api(e) => crate::retry::is_transient_status(e.status()),
            Error::Transport(e) => crate::retry::is_transient_error(e),
            _ => false,
        }
    }
}

/// A non-success response, with the error body normalized into a message.
///
/// The `Display` form is `{METHOD} {scheme}://{host}{path}: {status} {message}`
/// with the path percent-decoded; callers grep for this shape.
#[derive(Debug)]
pub struct ApiError {
    method: Method,
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    message: String,
}

impl ApiError {
    pub fn new(
        method: Method,
        url: Url,
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        let message = normalize_error_body(&body);
        Self {
            method,
            url,
            status,
            headers,
            body,
            message,
        }
    }

    /// Reads the whole body of a failed response.
    pub(crate) async fn from_response(
        method: Method,
        response: reqwest::Response,
    ) -> Result<Self, reqwest::Error> {
        let url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::new(method, url, status, headers, body.to_vec()))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Normalized, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw_path = self.url.path();
        let path = urlencoding::decode(raw_path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| raw_path.to_string());
        let host = self.url.host_str().unwrap_or_default();
        write!(f, "{} {}://{}", self.method, self.url.scheme(), host)?;
        if let Some(port) = self.url.port() {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}: {} {}", path, self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Closed model of an error body, decoded once and then rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorShape {
    Text(String),
    List(Vec<ErrorShape>),
    Map(BTreeMap<String, ErrorShape>),
    /// Any other JSON scalar; holds the JSON type name.
    Other(&'static str),
}

impl From<Value> for ErrorShape {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ErrorShape::Text(s),
            Value::Array(items) => ErrorShape::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                ErrorShape::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Null => ErrorShape::Other("null"),
            Value::Bool(_) => ErrorShape::Other("bool"),
            Value::Number(_) => ErrorShape::Other("number"),
        }
    }
}

impl fmt::Display for ErrorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorShape::Text(s) => f.write_str(s),
            ErrorShape::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            // BTreeMap iterates in key order.
            ErrorShape::Map(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{{{}: {}}}", key, value)?;
                }
                Ok(())
            }
            ErrorShape::Other(kind) => {
                write!(f, "failed to parse unexpected error type: {}", kind)
            }
        }
    }
}

/// Renders an error response body into a single message.
pub fn normalize_error_body(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => ErrorShape::from(value).to_string(),
        Err(_) => UNKNOWN_ERROR_FORMAT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(url: &str, status: u16, body: &str) -> ApiError {
        ApiError::new(
            Method::GET,
            Url::parse(url).unwrap(),
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn detail_object() {
        assert_eq!(normalize_error_body(br#"{"detail": "error"}"#), "{detail: error}");
    }

    #[test]
    fn plain_string() {
        assert_eq!(normalize_error_body(br#""Not found.""#), "Not found.");
    }

    #[test]
    fn list_of_strings() {
        assert_eq!(
            normalize_error_body(br#"["first", "second"]"#),
            "[first, second]"
        );
    }

    #[test]
    fn map_entries_sorted_by_key() {
        let body = br#"{"team_id": ["Invalid pk"], "name": ["This field is required."]}"#;
        assert_eq!(
            normalize_error_body(body),
            "{name: [This field is required.]}, {team_id: [Invalid pk]}"
        );
    }

    #[test]
    fn nested_maps() {
        let body = br#"{"default_route": {"slack": {"channel_id": ["Unknown channel"]}}}"#;
        insta::assert_snapshot!(
            normalize_error_body(body),
            @"{default_route: {slack: {channel_id: [Unknown channel]}}}"
        );
    }

    #[test]
    fn unexpected_scalars() {
        assert_eq!(
            normalize_error_body(b"42"),
            "failed to parse unexpected error type: number"
        );
        assert_eq!(
            normalize_error_body(br#"{"ok": false}"#),
            "{ok: failed to parse unexpected error type: bool}"
        );
        assert_eq!(
            normalize_error_body(b"null"),
            "failed to parse unexpected error type: null"
        );
    }

    #[test]
    fn not_json() {
        assert_eq!(normalize_error_body(b"<html>502</html>"), UNKNOWN_ERROR_FORMAT);
        assert_eq!(normalize_error_body(b""), UNKNOWN_ERROR_FORMAT);
    }

    #[test]
    fn display_shape() {
        let err = api_error(
            "https://oncall.example.com/api/v1/test",
            400,
            r#"{"detail": "error"}"#,
        );
        assert_eq!(
            err.to_string(),
            "GET https://oncall.example.com/api/v1/test: 400 {detail: error}"
        );
        assert_eq!(err.body(), br#"{"detail": "error"}"#);
    }

    #[test]
    fn display_decodes_path_and_keeps_port() {
        let err = api_error(
            "http://127.0.0.1:8080/api/v1/routes/R%3AONE/",
            404,
            r#"{"detail": "Not found."}"#,
        );
        assert_eq!(
            err.to_string(),
            "GET http://127.0.0.1:8080/api/v1/routes/R:ONE/: 404 {detail: Not found.}"
        );
    }

    #[test]
    fn error_helpers() {
        let err = Error::from(api_error("https://oncall.example.com/", 503, "{}"));
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(err.is_transient());

        let err = Error::from(api_error("https://oncall.example.com/", 404, "{}"));
        assert!(!err.is_transient());
        assert!(!Error::Cancelled.is_transient());
    }
}
