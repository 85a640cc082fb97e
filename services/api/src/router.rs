//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the voice platform endpoint and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        Card, ErrorResponse, HealthResponse, IntentPayload, OutputSpeech, PlatformRequest,
        Reprompt, RequestEnvelope, ResponseBody, ResponseEnvelope, SessionInfo, SlotPayload,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use anyhow::Context;
use std::{path::Path, sync::Arc};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::handle_speech_request,
        handlers::health,
    ),
    components(
        schemas(
            RequestEnvelope, SessionInfo, PlatformRequest, IntentPayload, SlotPayload,
            ResponseEnvelope, ResponseBody, OutputSpeech, Card, Reprompt,
            ErrorResponse, HealthResponse
        )
    ),
    tags(
        (name = "Energy API", description = "Voice skill answering questions about the campus energy micro-grid")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/speech", post(handlers::handle_speech_request))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health))
        .merge(api_router)
}

/// Writes the OpenAPI document for the voice endpoint as pretty-printed JSON.
pub fn write_openapi(path: &Path) -> anyhow::Result<()> {
    let spec_json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize the OpenAPI document")?;
    std::fs::write(path, spec_json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
