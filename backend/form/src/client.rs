use payloads::{ErrorBody, FeedbackSubmission, SUBMIT_PATH, SubmitAck};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_SUCCESS_TEXT: &str = "反馈提交成功！";
pub const REJECTED_TEXT: &str = "提交失败";
pub const GENERIC_FAILURE_TEXT: &str = "提交失败，请稍后重试";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Submission rejected with status {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Text for the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| REJECTED_TEXT.to_string()),
            SubmitError::Transport(_) => GENERIC_FAILURE_TEXT.to_string(),
        }
    }
}

pub struct SubmitClient {
    client: Client,
    endpoint: String,
}

impl SubmitClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{SUBMIT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retries, no timeout.
    ///
    /// Bodies that do not parse fall back to default texts instead of failing the submission.
    pub async fn submit(&self, submission: &FeedbackSubmission) -> Result<String, SubmitError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = res.status();
        info!("Status: {status}");

        let body = res.text().await.unwrap_or_else(|e| {
            debug!("Failed to read response body: {e}");
            String::new()
        });

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|error| error.detail)
                .filter(|detail| !detail.is_empty());

            return Err(SubmitError::Rejected { status, detail });
        }

        let message = serde_json::from_str::<SubmitAck>(&body)
            .ok()
            .and_then(|ack| ack.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_TEXT.to_string());

        Ok(message)
    }
}
