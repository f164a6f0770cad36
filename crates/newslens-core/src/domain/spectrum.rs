use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Article, Factuality};

/// Average stance of one outlet inside a spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumSourceStance {
    pub source_name: String,
    pub average_score: f64,
    pub article_count: u64,
    pub news_type_counts: Option<BTreeMap<String, u64>>,
    pub factuality: Option<Factuality>,
    pub ownership_info: Option<String>,
}

/// Bias distribution for an event or a keyword search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumDto {
    pub event_id: Option<i64>,
    pub topic: String,
    pub average_score: Option<f64>,
    pub total_articles: u64,
    pub stats_articles: Option<u64>,
    pub total_sources: Option<u64>,
    pub left_wing_ratio: Option<f64>,
    pub center_ratio: Option<f64>,
    pub right_wing_ratio: Option<f64>,
    pub pro_china_ratio: Option<f64>,
    pub pro_us_ratio: Option<f64>,
    pub source_details: Option<Vec<SpectrumSourceStance>>,
    pub news_type_stats: Option<BTreeMap<String, u64>>,
    pub articles: Option<Vec<Article>>,
    pub blindspot_label: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub location_tag: Option<String>,
}
