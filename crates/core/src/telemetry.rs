//! Telemetry Feed Access
//!
//! This module fetches the live micro-grid feed and looks readings up in it.
//! The feed is served as JSON-with-padding, i.e. a JSON array of
//! `{"name": ..., "value": ...}` records wrapped in a callback call such as
//! `alexa([...])`. Nothing is cached: every resolution fetches a fresh copy.

use crate::error::ResolutionFailure;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Address of the campus energy feed, requesting the `alexa` callback wrapper.
pub const DEFAULT_FEED_URL: &str =
    "https://apps2.campusservices.harvard.edu/energy/api?callback=alexa";

/// One parsed snapshot of the feed, in the order the service returned it.
///
/// Records are kept as raw JSON. Only the record a lookup lands on has to
/// carry a `name` and a numeric `value`; the rest of the feed is never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFeed {
    pub records: Vec<Value>,
}

impl TelemetryFeed {
    /// Parses a JSON-with-padding body of the form `callback([...])`.
    ///
    /// Surrounding whitespace and a trailing `;` are tolerated. The callback
    /// name must be a plain identifier and the payload a JSON array; any other
    /// shape is reported as the service being unavailable.
    pub fn from_padded_json(body: &str) -> Result<Self, ResolutionFailure> {
        let malformed = |reason: &str| ResolutionFailure::ServiceUnavailable(reason.to_string());

        let trimmed = body.trim();
        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();

        let open = trimmed
            .find('(')
            .ok_or_else(|| malformed("feed body has no callback wrapper"))?;
        let callback = trimmed[..open].trim();
        let is_identifier = !callback.is_empty()
            && callback
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'));
        if !is_identifier {
            return Err(malformed("feed callback name is not an identifier"));
        }

        let inner = trimmed[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| malformed("feed callback wrapper is not closed"))?;

        let records: Vec<Value> = serde_json::from_str(inner)
            .map_err(|e| malformed(&format!("feed payload is not an array: {}", e)))?;

        Ok(Self { records })
    }

    /// Returns the value of the first record named `key`, scanning in feed order.
    ///
    /// The scan stops at the first record with that name. If its `value` is
    /// not a number (or a numeric string) the reading counts as missing.
    pub fn lookup(&self, key: &str) -> Result<f64, ResolutionFailure> {
        self.records
            .iter()
            .find(|record| record.get("name").and_then(Value::as_str) == Some(key))
            .and_then(|record| record.get("value"))
            .and_then(numeric_value)
            .ok_or_else(|| ResolutionFailure::KeyNotFound(key.to_string()))
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Anything that can hand back the raw feed body.
///
/// Implementations block until the body is available or the fetch fails.
#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    fn fetch(&self) -> Result<String, ResolutionFailure>;
}

/// Fetches the feed with a single blocking HTTP GET, without retries.
///
/// Must not be called from inside an async runtime; the HTTP service runs it
/// on a blocking thread.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self) -> Result<String, ResolutionFailure> {
        let response = reqwest::blocking::get(&self.url)
            .and_then(|response| response.error_for_status())
            .map_err(|e| ResolutionFailure::ServiceUnavailable(e.to_string()))?;
        response
            .text()
            .map_err(|e| ResolutionFailure::ServiceUnavailable(e.to_string()))
    }
}

/// Turns lookup keys into readings from a freshly fetched feed.
#[derive(Clone)]
pub struct TelemetryResolver {
    source: Arc<dyn FeedSource>,
}

impl TelemetryResolver {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Fetches and parses one snapshot of the feed.
    pub fn fetch_feed(&self) -> Result<TelemetryFeed, ResolutionFailure> {
        let feed = self
            .source
            .fetch()
            .and_then(|body| TelemetryFeed::from_padded_json(&body));
        match &feed {
            Ok(feed) => debug!(records = feed.records.len(), "Fetched telemetry feed"),
            Err(e) => warn!(error = %e, "Couldn't fetch data from the telemetry feed"),
        }
        feed
    }

    /// Fetches the feed and returns the reading stored under `lookup_key`.
    pub fn resolve(&self, lookup_key: &str) -> Result<f64, ResolutionFailure> {
        self.fetch_feed()?.lookup(lookup_key)
    }
}
