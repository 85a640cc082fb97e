//! Axum Handlers for the Voice Platform Endpoint
//!
//! This module turns request envelopes into speechlet calls and speechlet
//! results into response envelopes. It uses `utoipa` doc comments to generate
//! OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use energy_core::{EnergySpeechlet, Intent, RouterError, speechlet::RequestContext};
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    models::{ErrorResponse, HealthResponse, PlatformRequest, RequestEnvelope, ResponseEnvelope},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Runs one platform request through the speechlet lifecycle.
///
/// A new session fires the session-started hook before the request itself.
/// Blocks while the telemetry feed is fetched.
pub fn dispatch(
    speechlet: &EnergySpeechlet,
    envelope: &RequestEnvelope,
) -> Result<ResponseEnvelope, RouterError> {
    let ctx = RequestContext {
        request_id: envelope.request.request_id(),
        session_id: &envelope.session.session_id,
    };

    if envelope.session.is_new {
        speechlet.on_session_started(ctx);
    }

    match &envelope.request {
        PlatformRequest::LaunchRequest { .. } => {
            Ok(ResponseEnvelope::speak(speechlet.on_launch(ctx)))
        }
        PlatformRequest::IntentRequest { intent, .. } => {
            let intent = intent.as_ref().map(Intent::from).unwrap_or_default();
            speechlet
                .on_intent(ctx, &intent)
                .map(ResponseEnvelope::speak)
        }
        PlatformRequest::SessionEndedRequest { reason, .. } => {
            speechlet.on_session_ended(ctx, reason.as_deref());
            Ok(ResponseEnvelope::empty())
        }
    }
}

/// Handle a voice platform request.
#[utoipa::path(
    post,
    path = "/speech",
    request_body = RequestEnvelope,
    responses(
        (status = 200, description = "Spoken response", body = ResponseEnvelope),
        (status = 400, description = "Unsupported intent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn handle_speech_request(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let speechlet = state.speechlet.clone();
    let outcome = tokio::task::spawn_blocking(move || dispatch(&speechlet, &envelope)).await?;

    let response = outcome.map_err(|e| {
        warn!(error = %e, "Rejected platform request");
        ApiError::BadRequest(e.to_string())
    })?;

    Ok(Json(response))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
