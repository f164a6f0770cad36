//! Incitement scoring reports.
//!
//! The backend has shipped two shapes for several of these payloads (for
//! instance the outlet list of a spectrum is either `points` or `outlets`).
//! Every field that is not present in both shapes is optional here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

open_string_enum! {
    /// Who is speaking in an evidence snippet.
    AttributionType {
        OutletVoice => "OUTLET_VOICE",
        QuotedSource => "QUOTED_SOURCE",
        OpponentQuote => "OPPONENT_QUOTE",
    }
}

open_string_enum! {
    /// Aggregation window of an incitement trend.
    TrendWindow {
        Day => "day",
        Week => "week",
        Month => "month",
    }
}

/// Short evidence excerpt attached to an outlet score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementEvidence {
    pub article_id: i64,
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub score: Option<f64>,
}

/// Incitement score of one outlet for one event (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletIncitement {
    pub outlet: String,
    pub incitement_score: Option<f64>,
    pub stance_polarity: Option<f64>,
    pub stance_confidence: Option<f64>,
    pub confidence: Option<f64>,
    pub article_count: Option<u64>,
    pub top_evidence: Option<Vec<IncitementEvidence>>,
    pub evidence: Option<Vec<ArticleIncitementEvidence>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementStatistics {
    pub total_outlets: Option<u64>,
    pub total_articles: Option<u64>,
    pub average_incitement: Option<f64>,
    pub average_stance: Option<f64>,
}

/// Event x outlet incitement table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementDto {
    pub event_id: i64,
    pub topic: Option<String>,
    pub stance_target: Option<String>,
    #[serde(default)]
    pub outlets: Vec<OutletIncitement>,
    pub statistics: Option<IncitementStatistics>,
}

/// One outlet on the stance (x) / incitement (y) plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumPoint {
    pub outlet: String,
    pub stance_polarity: Option<f64>,
    pub incitement_score: Option<f64>,
    pub stance_confidence: Option<f64>,
    pub confidence: Option<f64>,
    pub article_count: Option<u64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementSpectrumDto {
    pub event_id: Option<i64>,
    pub topic: Option<String>,
    pub stance_target: Option<String>,
    #[serde(default)]
    pub points: Vec<SpectrumPoint>,
    #[serde(default)]
    pub outlets: Vec<SpectrumPoint>,
}

impl IncitementSpectrumDto {
    /// Points from whichever list the server filled.
    pub fn all_points(&self) -> impl Iterator<Item = &SpectrumPoint> {
        self.points.iter().chain(self.outlets.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementTrendDataPoint {
    pub timestamp: Option<String>,
    pub date: Option<String>,
    pub raw_score: Option<f64>,
    pub incitement_score: Option<f64>,
    pub z_score: Option<f64>,
    pub article_count: Option<u64>,
    pub event_count: Option<u64>,
}

impl IncitementTrendDataPoint {
    pub fn at(&self) -> Option<&str> {
        self.timestamp.as_deref().or(self.date.as_deref())
    }

    pub fn score(&self) -> Option<f64> {
        self.raw_score.or(self.incitement_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementBaseline {
    pub mean: f64,
    pub std_dev: f64,
    pub sample_size: u64,
}

/// Incitement time series of one outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncitementTrendDto {
    pub outlet: Option<String>,
    pub window: Option<TrendWindow>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub data_points: Vec<IncitementTrendDataPoint>,
    pub baseline: Option<IncitementBaseline>,
}

/// Full incitement analysis of one article. Dimension scores are 0-5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIncitementAnalysis {
    pub id: i64,
    pub article_id: i64,
    pub event_id: Option<i64>,
    pub outlet: String,
    pub incitement_score: f64,
    pub dim_a: f64,
    pub dim_b: f64,
    pub dim_c: f64,
    pub dim_d: f64,
    pub dim_e: f64,
    pub dim_f: f64,
    pub dim_g: f64,
    pub stance_target: Option<String>,
    pub stance_polarity: Option<f64>,
    pub stance_confidence: Option<f64>,
    pub confidence: Option<f64>,
    pub computed_at: String,
    pub version: String,
}

impl ArticleIncitementAnalysis {
    /// Dimension scores keyed by their wire names, A to G.
    pub fn dimensions(&self) -> [(&'static str, f64); 7] {
        [
            ("dimA", self.dim_a),
            ("dimB", self.dim_b),
            ("dimC", self.dim_c),
            ("dimD", self.dim_d),
            ("dimE", self.dim_e),
            ("dimF", self.dim_f),
            ("dimG", self.dim_g),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIncitementEvidence {
    pub id: i64,
    pub article_analysis_id: i64,
    pub text: String,
    pub attribution_type: AttributionType,
    #[serde(default)]
    pub dims_json: BTreeMap<String, f64>,
    #[serde(default)]
    pub targets_json: Vec<String>,
    pub notes: Option<String>,
}
