//! Client-side failure classification

use botdash_core::Error as CoreError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Why a request to the service did not produce a usable response.
///
/// The two variants drive different user-facing wording: a rejection carries
/// the service's own explanation, a transport failure gets a fixed fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Non-2xx response with a readable `{detail}` body
    #[error("service rejected request with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// Request never completed, or a response body could not be decoded
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ClientError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Classify a non-2xx response from its status and raw body.
    ///
    /// A body that is not JSON cannot be read for a detail and is treated as
    /// a transport failure.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Self::Transport(format!(
                    "HTTP {} with unreadable body: {}",
                    status.as_u16(),
                    e
                ))
            }
        };

        let detail = match parsed.detail {
            Some(Value::String(text)) => text,
            Some(Value::Array(items)) => flatten_validation_errors(&items),
            Some(Value::Null) | None => status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            Some(other) => other.to_string(),
        };

        Self::rejected(status.as_u16(), detail)
    }

    /// Detail text for a rejection, if this is one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// User-facing notification text.
    ///
    /// Rejections surface the service detail; everything else falls back to
    /// the operation's fixed message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected { detail, .. } => format!("Error: {detail}"),
            _ => fallback.to_string(),
        }
    }
}

/// FastAPI validation errors arrive as `[{loc, msg, type}, ...]`
fn flatten_validation_errors(items: &[Value]) -> String {
    let messages: Vec<String> = items
        .iter()
        .map(|item| match item.get("msg").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => item.to_string(),
        })
        .collect();
    messages.join("; ")
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { status, detail } => {
                CoreError::ServiceRejected { status, detail }
            }
            ClientError::Transport(message) => CoreError::service_unavailable(message),
            ClientError::InvalidBaseUrl { url, reason } => {
                CoreError::invalid_service_url(url, reason)
            }
        }
    }
}
