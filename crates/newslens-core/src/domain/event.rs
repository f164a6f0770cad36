use serde::{Deserialize, Serialize};
use serde_json::Value;

open_string_enum! {
    /// Lifecycle state of an event.
    EventState {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub topic: String,
    pub core_summary: Option<String>,
    pub actors: Option<Value>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub state: EventState,
    pub article_count: Option<u64>,
    pub source_count: Option<u64>,
    pub hotness: Option<f64>,
    pub stance_diversity: Option<f64>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub blindspot_label: Option<String>,
    pub location_tag: Option<String>,
    pub published: Option<bool>,
    pub headline: Option<bool>,
    pub published_at: Option<String>,
    pub image_url: Option<String>,
}

/// Body of `POST /admin/events`. Times use the ISO form
/// (`YYYY-MM-DDTHH:mm:ss`); unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<EventState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blindspot_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_tag: Option<String>,
}

impl EventCreateRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }
}

/// Article id list used by suggest and membership endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSuggestRequest {
    pub article_ids: Vec<i64>,
}

/// Server-drafted event fields for a set of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSuggestResponse {
    pub topic: String,
    pub core_summary: String,
    #[serde(default)]
    pub actors: Vec<String>,
    pub key_points: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_omits_unset_fields() {
        let mut request = EventCreateRequest::new("Typhoon landfall");
        request.article_ids = Some(vec![1, 2]);

        assert_eq!(
            serde_json::to_value(&request).expect("encode"),
            json!({ "topic": "Typhoon landfall", "articleIds": [1, 2] })
        );
    }

    #[test]
    fn decodes_event_with_flags() {
        let event: Event = serde_json::from_value(json!({
            "eventId": 3,
            "topic": "Budget vote",
            "state": "CLOSED",
            "published": true,
            "keyPoints": ["a", "b"]
        }))
        .expect("event");

        assert_eq!(event.state, EventState::Closed);
        assert_eq!(event.published, Some(true));
        assert_eq!(event.headline, None);
    }
}
