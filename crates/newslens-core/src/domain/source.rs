use serde::{Deserialize, Serialize};

open_string_enum! {
    /// Factual reporting rating of an outlet.
    Factuality {
        High => "HIGH",
        Mixed => "MIXED",
        Low => "LOW",
        Unknown => "UNKNOWN",
    }
}

open_string_enum! {
    /// Outlet category.
    SourceCategory {
        Traditional => "TRADITIONAL",
        Online => "ONLINE",
        Independent => "INDEPENDENT",
        Unclassified => "OTHER",
    }
}

/// Media outlet. `id` is absent for virtual sources synthesized from
/// article data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bias_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factuality: Option<Factuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SourceCategory>,
}

impl MediaSource {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub const fn is_virtual(&self) -> bool {
        self.id.is_none()
    }
}

/// Partial update body for `PUT /admin/media-sources/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_bias_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factuality: Option<Factuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SourceCategory>,
}

impl MediaSourceUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
