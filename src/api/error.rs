use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API base URL is not configured; set CARHUB_API_URL or `carhub settings set api_url <url>`")]
    MissingBaseUrl,

    /// Non-success response; displays as the message staff should see
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a server error from a failed response body, preferring its
    /// `message` field over a generic status line
    pub fn server(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()));

        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
