use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by calls to the fraud-detection API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// Non-2xx response. `detail` is whatever the server put in its error body.
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Message for the user: the server detail when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Pulls a readable message out of an error body's `detail` field.
///
/// The server sends either a plain string or a list of validation entries,
/// each carrying a `msg`.
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
