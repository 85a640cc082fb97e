//! Voice Platform Envelope Models
//!
//! This module defines the JSON request and response envelopes exchanged with
//! the voice platform, plus the small error and health payloads. Every type
//! derives `ToSchema` so it appears in the OpenAPI document.

use energy_core::{
    Intent, SpeechResponse,
    response::CARD_TITLE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

pub const ENVELOPE_VERSION: &str = "1.0";

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    pub session: SessionInfo,
    pub request: PlatformRequest,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct SessionInfo {
    #[serde(rename = "sessionId")]
    #[schema(example = "SessionId.9a0f3c1e")]
    pub session_id: String,
    /// `true` on the first request of a session.
    #[serde(rename = "new", default)]
    pub is_new: bool,
}

/// The platform event carried by a request envelope, tagged by `type`.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum PlatformRequest {
    LaunchRequest {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    IntentRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(default)]
        intent: Option<IntentPayload>,
    },
    SessionEndedRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl PlatformRequest {
    pub fn request_id(&self) -> &str {
        match self {
            PlatformRequest::LaunchRequest { request_id }
            | PlatformRequest::IntentRequest { request_id, .. }
            | PlatformRequest::SessionEndedRequest { request_id, .. } => request_id,
        }
    }
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct IntentPayload {
    #[schema(example = "GetEnergyData")]
    pub name: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SlotPayload {
    #[schema(example = "PowerSource")]
    pub name: String,
    #[schema(example = "steam production")]
    pub value: Option<String>,
}

impl From<&IntentPayload> for Intent {
    /// Slots without a value are dropped, so a missing `PowerSource` value
    /// reaches the catalog as an empty phrase.
    fn from(payload: &IntentPayload) -> Self {
        let slots = payload
            .slots
            .iter()
            .filter_map(|(key, slot)| slot.value.clone().map(|value| (key.clone(), value)))
            .collect();
        Intent {
            name: payload.name.clone(),
            slots,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response: Option<ResponseBody>,
}

impl ResponseEnvelope {
    pub fn speak(response: SpeechResponse) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: Some(response.into()),
        }
    }

    /// Envelope acknowledging a request that produces no speech.
    pub fn empty() -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
    pub card: Card,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reprompt: Option<Reprompt>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

impl From<SpeechResponse> for ResponseBody {
    /// The reprompt is only rendered while the session stays open.
    fn from(response: SpeechResponse) -> Self {
        let card = Card::simple(response.card_content());
        let reprompt = if response.expects_follow_up {
            response.reprompt_text.map(|text| Reprompt {
                output_speech: OutputSpeech::plain_text(text),
            })
        } else {
            None
        };
        Self {
            output_speech: OutputSpeech::plain_text(response.speech_text),
            card,
            reprompt,
            should_end_session: !response.expects_follow_up,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    #[schema(example = "PlainText")]
    pub kind: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Card {
    #[serde(rename = "type")]
    #[schema(example = "Simple")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

impl Card {
    pub fn simple(content: String) -> Self {
        Self {
            kind: "Simple".to_string(),
            title: CARD_TITLE.to_string(),
            content,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_core::{
        intent::POWER_SOURCE_SLOT,
        response::{DASHBOARD_URL, WELCOME_REPROMPT},
    };

    #[test]
    fn test_launch_request_deserialization() {
        let json = r#"{
            "version": "1.0",
            "session": {"new": true, "sessionId": "SessionId.1", "application": {"applicationId": "x"}},
            "request": {"type": "LaunchRequest", "requestId": "EdwRequestId.1", "timestamp": "2015-10-01T12:00:00Z"}
        }"#;
        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.version.as_deref(), Some("1.0"));
        assert_eq!(envelope.session.session_id, "SessionId.1");
        assert!(envelope.session.is_new);
        assert_eq!(
            envelope.request,
            PlatformRequest::LaunchRequest {
                request_id: "EdwRequestId.1".to_string()
            }
        );
        assert_eq!(envelope.request.request_id(), "EdwRequestId.1");
    }

    #[test]
    fn test_intent_request_deserialization() {
        let json = r#"{
            "session": {"sessionId": "SessionId.2"},
            "request": {
                "type": "IntentRequest",
                "requestId": "EdwRequestId.2",
                "intent": {
                    "name": "GetEnergyData",
                    "slots": {"PowerSource": {"name": "PowerSource", "value": "steam production"}}
                }
            }
        }"#;
        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.session.is_new);

        let PlatformRequest::IntentRequest { intent, .. } = envelope.request else {
            panic!("Expected IntentRequest");
        };
        let intent = Intent::from(&intent.unwrap());
        assert_eq!(intent.name.as_deref(), Some("GetEnergyData"));
        assert_eq!(intent.power_source(), "steam production");
    }

    #[test]
    fn test_slot_without_value_is_dropped() {
        let mut slots = HashMap::new();
        slots.insert(
            POWER_SOURCE_SLOT.to_string(),
            SlotPayload {
                name: POWER_SOURCE_SLOT.to_string(),
                value: None,
            },
        );
        let payload = IntentPayload {
            name: Some("GetEnergyData".to_string()),
            slots,
        };
        let intent = Intent::from(&payload);
        assert!(intent.slots.is_empty());
        assert_eq!(intent.power_source(), "");
    }

    #[test]
    fn test_session_ended_request_deserialization() {
        let json = r#"{
            "session": {"sessionId": "SessionId.3"},
            "request": {"type": "SessionEndedRequest", "requestId": "EdwRequestId.3", "reason": "USER_INITIATED"}
        }"#;
        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.request,
            PlatformRequest::SessionEndedRequest {
                request_id: "EdwRequestId.3".to_string(),
                reason: Some("USER_INITIATED".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_request_type_is_rejected() {
        let json = r#"{
            "session": {"sessionId": "SessionId.4"},
            "request": {"type": "AudioPlayer.PlaybackStarted", "requestId": "EdwRequestId.4"}
        }"#;
        let result: Result<RequestEnvelope, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_welcome_envelope_serialization() {
        let envelope = ResponseEnvelope::speak(SpeechResponse::welcome());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["version"], "1.0");
        assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["response"]["card"]["type"], "Simple");
        assert_eq!(json["response"]["card"]["title"], "Energy & Utilities");
        assert_eq!(
            json["response"]["reprompt"]["outputSpeech"]["text"],
            WELCOME_REPROMPT
        );
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[test]
    fn test_tell_envelope_omits_reprompt() {
        let envelope = ResponseEnvelope::speak(SpeechResponse::reading(
            "Currently, 5.7 tons.".to_string(),
        ));
        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json["response"].get("reprompt").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
        assert_eq!(
            json["response"]["card"]["content"],
            format!("Currently, 5.7 tons.. See more here: {}", DASHBOARD_URL)
        );
    }

    #[test]
    fn test_empty_envelope_serialization() {
        let json = serde_json::to_string(&ResponseEnvelope::empty()).unwrap();
        assert_eq!(json, r#"{"version":"1.0"}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "Unsupported intent: SomeOtherIntent".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"Unsupported intent: SomeOtherIntent"}"#);
    }
}
