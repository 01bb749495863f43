use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use payloads::SubmitAck;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;

pub async fn submit_feedback_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitAck>, AppError> {
    let Json(payload) = payload?;

    info!(%payload, "Received feedback");

    #[cfg(feature = "verbose")]
    if let Ok(pretty) = serde_json::to_string_pretty(&payload) {
        println!("{pretty}");
    }

    Ok(Json(SubmitAck::success()))
}

pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
