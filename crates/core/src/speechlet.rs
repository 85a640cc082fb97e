//! Session lifecycle hooks called by the voice platform host.
//!
//! The host fires `on_session_started` once per new session, then either
//! `on_launch` or `on_intent` for each turn, and `on_session_ended` when the
//! platform closes the session. Request and session identifiers are only
//! logged.

use crate::{
    error::RouterError, intent::Intent, response::SpeechResponse, router::IntentRouter,
};
use tracing::info;

/// Identifiers attached to every platform request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub request_id: &'a str,
    pub session_id: &'a str,
}

#[derive(Clone)]
pub struct EnergySpeechlet {
    router: IntentRouter,
}

impl EnergySpeechlet {
    pub fn new(router: IntentRouter) -> Self {
        Self { router }
    }

    pub fn on_session_started(&self, ctx: RequestContext<'_>) {
        info!(request_id = ctx.request_id, session_id = ctx.session_id, "onSessionStarted");
    }

    pub fn on_launch(&self, ctx: RequestContext<'_>) -> SpeechResponse {
        info!(request_id = ctx.request_id, session_id = ctx.session_id, "onLaunch");
        self.router.welcome()
    }

    /// Handles one intent turn. An unsupported intent is returned to the host
    /// as an error and aborts the turn.
    pub fn on_intent(
        &self,
        ctx: RequestContext<'_>,
        intent: &Intent,
    ) -> Result<SpeechResponse, RouterError> {
        info!(
            request_id = ctx.request_id,
            session_id = ctx.session_id,
            intent = intent.name.as_deref().unwrap_or("<none>"),
            "onIntent"
        );
        self.router.route(intent)
    }

    pub fn on_session_ended(&self, ctx: RequestContext<'_>, reason: Option<&str>) {
        info!(
            request_id = ctx.request_id,
            session_id = ctx.session_id,
            reason = reason.unwrap_or("<none>"),
            "onSessionEnded"
        );
    }
}
