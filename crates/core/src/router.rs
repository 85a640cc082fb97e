//! Intent Router
//!
//! Maps a recognized intent onto a spoken response. The energy query intent
//! fetches the feed first, so an unreachable feed pre-empts catalog matching
//! entirely and yields the fixed apology.

use crate::{
    catalog,
    error::RouterError,
    intent::{ENERGY_QUERY_INTENT, Intent},
    response::{SpeechResponse, format_template},
    telemetry::TelemetryResolver,
};
use tracing::{debug, info};

#[derive(Clone)]
pub struct IntentRouter {
    resolver: TelemetryResolver,
}

impl IntentRouter {
    pub fn new(resolver: TelemetryResolver) -> Self {
        Self { resolver }
    }

    /// Response for a launch without an intent.
    pub fn welcome(&self) -> SpeechResponse {
        SpeechResponse::welcome()
    }

    /// Produces the response for one intent.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::UnsupportedIntent` for any intent other than the
    /// energy query, including a missing intent name.
    pub fn route(&self, intent: &Intent) -> Result<SpeechResponse, RouterError> {
        match intent.name.as_deref() {
            Some(ENERGY_QUERY_INTENT) => Ok(self.energy_reading(intent)),
            other => Err(RouterError::UnsupportedIntent(other.map(str::to_string))),
        }
    }

    fn energy_reading(&self, intent: &Intent) -> SpeechResponse {
        let feed = match self.resolver.fetch_feed() {
            Ok(feed) => feed,
            Err(_) => return SpeechResponse::service_unavailable(),
        };

        let phrase = intent.power_source();
        let entry = catalog::match_phrase(phrase);
        debug!(phrase = %phrase, category = entry.category, "Selected catalog entry");

        let reading = feed.lookup(entry.lookup_key);
        if let Err(e) = &reading {
            info!(error = %e, "Reading missing from feed, speaking it as unknown");
        }

        SpeechResponse::reading(format_template(entry.response_template, &reading))
    }
}
