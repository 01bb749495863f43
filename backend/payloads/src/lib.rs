//! # Feedback Payloads
//!
//! Structures exchanged between the feedback form and the submission endpoint.
//!
//! ## Request
//!
//! `POST /api/submit-feedback` with a JSON body
//! - importantPoints: exactly 3 **strings**
//! - interestingPoints: exactly 2 **strings**
//! - difficultPoint: 1 **string**
//!
//! Every string is required and at most 100 characters. The endpoint does not enforce any of this,
//! the form does before anything is sent.
//!
//! ## Responses
//!
//! - 2xx: `{ "message": string }`, message may be missing
//! - otherwise: `{ "detail": string }`, detail may be missing
use serde::{Deserialize, Serialize};

pub const SUBMIT_PATH: &str = "/api/submit-feedback";
pub const HEALTH_PATH: &str = "/health";

pub const IMPORTANT_COUNT: usize = 3;
pub const INTERESTING_COUNT: usize = 2;
pub const MAX_POINT_CHARS: usize = 100;

pub const ACK_MESSAGE: &str = "Success";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub important_points: [String; IMPORTANT_COUNT],
    pub interesting_points: [String; INTERESTING_COUNT],
    pub difficult_point: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitAck {
    pub fn success() -> Self {
        Self {
            message: Some(ACK_MESSAGE.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_submission_keys() {
        let submission = FeedbackSubmission {
            important_points: ["a".into(), "b".into(), "c".into()],
            interesting_points: ["d".into(), "e".into()],
            difficult_point: "f".into(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "importantPoints": ["a", "b", "c"],
                "interestingPoints": ["d", "e"],
                "difficultPoint": "f"
            })
        );
    }

    #[test]
    fn test_submission_rejects_wrong_counts() {
        let value = json!({
            "importantPoints": ["a", "b"],
            "interestingPoints": ["d", "e"],
            "difficultPoint": "f"
        });

        assert!(serde_json::from_value::<FeedbackSubmission>(value).is_err());
    }

    #[test]
    fn test_missing_optional_fields() {
        let ack: SubmitAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.message, None);

        let error: ErrorBody = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert_eq!(error.detail, None);
    }

    #[test]
    fn test_ack_body() {
        let value: Value = serde_json::to_value(SubmitAck::success()).unwrap();
        assert_eq!(value, json!({ "message": "Success" }));
    }
}
