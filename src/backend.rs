use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::conversation::Message;

#[derive(Debug, Serialize)]
struct TaskRequest<'a> {
    conversation: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    status: String,
    #[serde(default)]
    response: String,
}

// Every variant renders to the exact string shown in the transcript.
#[derive(Debug, Error)]
enum SendError {
    #[error("Error: HTTP {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("AI API returned error status: {0}")]
    Backend(String),
    #[error("Error calling AI API: {0}")]
    Transport(String),
}

/// HTTP client for the backend's `/api/task` endpoint.
///
/// Every failure mode (connect error, non-2xx status, malformed body,
/// application-level error status) is folded into a displayable reply
/// string; `send` never returns an error to the caller.
#[derive(Debug, Clone)]
pub struct TaskClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskClient {
    /// An empty `base_url` makes requests go to the relative path
    /// `/api/task`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send the full transcript and return the assistant's reply, or a
    /// human-readable error string. One best-effort attempt, no retries,
    /// no application-level timeout.
    pub async fn send(&self, conversation: &[Message]) -> String {
        debug!("Sending conversation to {}/api/task: {:?}", self.base_url, conversation);
        match self.request(conversation).await {
            Ok(reply) => reply,
            Err(err) => {
                error!("AI API call failed: {err}");
                err.to_string()
            }
        }
    }

    async fn request(&self, conversation: &[Message]) -> Result<String, SendError> {
        let url = format!("{}/api/task", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&TaskRequest { conversation })
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: TaskResponse = response
            .json()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        if body.status == "success" {
            Ok(body.response)
        } else {
            Err(SendError::Backend(body.status))
        }
    }
}
