use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::sms::{SmsConfig, SmsSender, ALERT_PREFIX};

/// Application state shared across handlers
pub struct AppState {
    /// Send capability; `None` when provider credentials are missing.
    pub sender: Option<Arc<dyn SmsSender>>,
    pub sms_config: SmsConfig,
}

// ============================================================================
// Status
// ============================================================================

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API is running. POST to /alert to trigger SMS.",
    })
}

// ============================================================================
// Alert
// ============================================================================

#[derive(Deserialize)]
pub struct AlertRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct AlertResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Receives an alert from the client and forwards it as an SMS.
pub async fn send_alert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AlertRequest>,
) -> Result<Json<AlertResponse>, ApiError> {
    let sender = state.sender.as_ref().ok_or(ApiError::Misconfigured)?;

    let body = format!("{}{}", ALERT_PREFIX, request.message);

    match sender.send(&body).await {
        Ok(()) => {
            tracing::info!(to = %state.sms_config.to_number, "SMS alert sent");
            Ok(Json(AlertResponse {
                success: true,
                message: "SMS sent successfully.",
            }))
        }
        Err(e) => {
            // Full provider detail stays server-side; the caller gets a
            // fixed generic message.
            tracing::error!("Twilio API error: {}", e);
            Err(ApiError::Delivery)
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    Misconfigured,
    Delivery,
}

impl ApiError {
    fn detail(&self) -> &'static str {
        match self {
            ApiError::Misconfigured => "Server misconfigured: Twilio secrets missing.",
            ApiError::Delivery => "Failed to send SMS via Twilio.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "detail": self.detail()
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
