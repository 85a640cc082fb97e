//! Spoken responses and their fixed wording.

use crate::catalog::VALUE_PLACEHOLDER;
use crate::error::ResolutionFailure;

/// Title of the card shown alongside every spoken response.
pub const CARD_TITLE: &str = "Energy & Utilities";

/// Human-readable dashboard linked from every card.
pub const DASHBOARD_URL: &str =
    "http://www.energyandfacilities.harvard.edu/real-time-energy-production-demand";

/// Spoken in place of a reading that is missing from the feed.
pub const UNKNOWN_VALUE: &str = "unknown";

pub const CATEGORY_REPROMPT: &str =
    "You can ask me about electricity demand and production. Please repeat your question.";

pub const SERVICE_UNAVAILABLE_SPEECH: &str =
    "The energy and utility service is currently unavailable. Please try again later.";

pub const WELCOME_SPEECH: &str = "Welcome to Energy and Utilities. You can ask me about \
    electricity demand, electricity production, steam production, or chilled water production.";

pub const WELCOME_REPROMPT: &str = "Please ask me about electricity demand, electricity \
    production, steam production, or water production.";

/// What the skill says back for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    pub speech_text: String,
    pub reprompt_text: Option<String>,
    /// Keeps the session open for another question when `true`.
    pub expects_follow_up: bool,
}

impl SpeechResponse {
    /// A response that speaks and closes the session.
    pub fn tell(speech_text: impl Into<String>, reprompt_text: Option<String>) -> Self {
        Self {
            speech_text: speech_text.into(),
            reprompt_text,
            expects_follow_up: false,
        }
    }

    /// A response that speaks and waits for the user to answer.
    pub fn ask(speech_text: impl Into<String>, reprompt_text: impl Into<String>) -> Self {
        Self {
            speech_text: speech_text.into(),
            reprompt_text: Some(reprompt_text.into()),
            expects_follow_up: true,
        }
    }

    pub fn welcome() -> Self {
        Self::ask(WELCOME_SPEECH, WELCOME_REPROMPT)
    }

    pub fn service_unavailable() -> Self {
        Self::tell(SERVICE_UNAVAILABLE_SPEECH, None)
    }

    /// Speaks a formatted category reading.
    pub fn reading(speech_text: String) -> Self {
        Self::tell(speech_text, Some(CATEGORY_REPROMPT.to_string()))
    }

    /// Body of the card rendered next to the speech.
    pub fn card_content(&self) -> String {
        format!("{}. See more here: {}", self.speech_text, DASHBOARD_URL)
    }
}

/// Substitutes a resolved reading into a response template.
///
/// A missing record is spoken as `UNKNOWN_VALUE`. The value is printed in its
/// shortest round-trip form with no rounding, and whole numbers keep their
/// trailing `.0` (`98000.0`, not `98000`).
pub fn format_template(template: &str, reading: &Result<f64, ResolutionFailure>) -> String {
    let value = match reading {
        Ok(value) => format!("{:?}", value),
        Err(_) => UNKNOWN_VALUE.to_string(),
    };
    template.replace(VALUE_PLACEHOLDER, &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_template_with_value() {
        let text = format_template("Currently, {value} megawatts.", &Ok(5.7));
        assert_eq!(text, "Currently, 5.7 megawatts.");
    }

    #[test]
    fn test_format_template_keeps_full_precision() {
        let text = format_template("{value}", &Ok(27.345678912));
        assert_eq!(text, "27.345678912");

        let whole = format_template("{value}", &Ok(12.0));
        assert_eq!(whole, "12.0");

        let negative = format_template("{value}", &Ok(-0.5));
        assert_eq!(negative, "-0.5");
    }

    #[test]
    fn test_format_template_unknown_marker() {
        let reading = Err(ResolutionFailure::KeyNotFound("PLANT.STMOUT.Plant".to_string()));
        let text = format_template("Currently, {value} pound per hour.", &reading);
        assert_eq!(text, "Currently, unknown pound per hour.");
    }

    #[test]
    fn test_format_template_without_placeholder() {
        let text = format_template("Sorry I didn't understand.", &Ok(5.7));
        assert_eq!(text, "Sorry I didn't understand.");
    }

    #[test]
    fn test_welcome_response() {
        let response = SpeechResponse::welcome();
        assert!(response.expects_follow_up);
        assert_eq!(response.reprompt_text.as_deref(), Some(WELCOME_REPROMPT));
        assert!(response.speech_text.contains("electricity demand"));
    }

    #[test]
    fn test_service_unavailable_response() {
        let response = SpeechResponse::service_unavailable();
        assert!(!response.expects_follow_up);
        assert_eq!(response.reprompt_text, None);
        assert_eq!(response.speech_text, SERVICE_UNAVAILABLE_SPEECH);
    }

    #[test]
    fn test_reading_response_carries_category_reprompt() {
        let response = SpeechResponse::reading("Currently, 5.7 tons.".to_string());
        assert!(!response.expects_follow_up);
        assert_eq!(response.reprompt_text.as_deref(), Some(CATEGORY_REPROMPT));
    }

    #[test]
    fn test_card_content() {
        let response = SpeechResponse::tell("Hello", None);
        assert_eq!(
            response.card_content(),
            "Hello. See more here: http://www.energyandfacilities.harvard.edu/real-time-energy-production-demand"
        );
    }
}
