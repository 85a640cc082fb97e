//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the speechlet and the
//! loaded configuration. Both are read-only after startup.

use crate::config::Config;
use energy_core::{
    EnergySpeechlet, FeedSource, HttpFeedSource, IntentRouter, TelemetryResolver,
};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub speechlet: Arc<EnergySpeechlet>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the speechlet to the feed URL from the configuration.
    pub fn from_config(config: Config) -> Self {
        let source = Arc::new(HttpFeedSource::new(config.feed_url.clone()));
        Self::with_feed_source(config, source)
    }

    pub fn with_feed_source(config: Config, source: Arc<dyn FeedSource>) -> Self {
        let router = IntentRouter::new(TelemetryResolver::new(source));
        Self {
            speechlet: Arc::new(EnergySpeechlet::new(router)),
            config: Arc::new(config),
        }
    }
}
