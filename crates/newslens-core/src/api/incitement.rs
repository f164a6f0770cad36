use crate::domain::{IncitementDto, IncitementSpectrumDto, IncitementTrendDto, TrendWindow};
use crate::transport::{QueryParams, RequestSpec};
use crate::ApiError;

use super::NewslensClient;

/// Filters for `GET /incitement/trend`. Dates use the ISO query form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub outlet: Option<String>,
    pub window: Option<TrendWindow>,
}

impl TrendQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .optional_text("startDate", self.start_date.as_deref())
            .optional_text("endDate", self.end_date.as_deref())
            .optional_text("outlet", self.outlet.as_deref())
            .optional("window", self.window.as_ref())
    }
}

impl NewslensClient {
    /// Per-outlet incitement scores of an event, optionally with evidence
    /// snippets.
    pub async fn get_event_incitement(
        &self,
        event_id: i64,
        include_evidence: bool,
    ) -> Result<IncitementDto, ApiError> {
        let params = QueryParams::new().push("includeEvidence", include_evidence);
        self.public()
            .fetch(RequestSpec::get(format!("/events/{event_id}/incitement")).with_query(params))
            .await
    }

    /// Stance/incitement scatter data, for one event or across events.
    pub async fn get_incitement_spectrum(
        &self,
        event_id: Option<i64>,
    ) -> Result<IncitementSpectrumDto, ApiError> {
        let params = QueryParams::new().optional("eventId", event_id);
        self.public()
            .fetch(RequestSpec::get("/incitement/spectrum").with_query(params))
            .await
    }

    pub async fn get_incitement_trend(
        &self,
        query: &TrendQuery,
    ) -> Result<IncitementTrendDto, ApiError> {
        self.public()
            .fetch(RequestSpec::get("/incitement/trend").with_query(query.to_params()))
            .await
    }
}
