pub mod catalog;
pub mod error;
pub mod intent;
pub mod response;
pub mod router;
pub mod speechlet;
pub mod telemetry;

pub use error::{ResolutionFailure, RouterError};
pub use intent::Intent;
pub use response::SpeechResponse;
pub use router::IntentRouter;
pub use speechlet::EnergySpeechlet;
pub use telemetry::{FeedSource, HttpFeedSource, TelemetryResolver};
