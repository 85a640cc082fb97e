//! Error types for intent routing and telemetry resolution.
//!
//! A `RouterError` aborts the turn and is surfaced to the voice platform.
//! A `ResolutionFailure` never leaves the router; it is always spoken.

/// Hard failures raised by the intent router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// An intent reached the skill that it has no handler for.
    #[error("Unsupported intent: {}", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedIntent(Option<String>),
}

/// Recoverable outcomes of looking a reading up in the telemetry feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionFailure {
    /// The feed could not be fetched or was not valid JSON-with-padding.
    #[error("Telemetry service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The feed was read but holds no numeric reading under the requested name.
    #[error("No numeric telemetry reading named '{0}'")]
    KeyNotFound(String),
}
