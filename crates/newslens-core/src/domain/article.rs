use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MediaSource;

open_string_enum! {
    /// Pipeline status of a crawled article.
    ProcessingStatus {
        Pending => "PENDING",
        Processing => "PROCESSING",
        Done => "DONE",
        Error => "ERROR",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub media_source: Option<MediaSource>,
    pub source_name: Option<String>,
    pub author: Option<String>,
    pub url: String,
    pub published_at: Option<String>,
    pub title: Option<String>,
    pub clean_text: Option<String>,
    pub topic: Option<String>,
    pub actors: Option<Value>,
    pub event_summary: Option<String>,
    pub news_type: Option<String>,
    pub event_id: Option<i64>,
    pub status: Option<ProcessingStatus>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Article {
    /// Outlet name, preferring the linked media source.
    pub fn outlet_name(&self) -> Option<&str> {
        self.media_source
            .as_ref()
            .map(|source| source.name.as_str())
            .or(self.source_name.as_deref())
    }
}
