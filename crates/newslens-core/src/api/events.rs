use crate::domain::{
    Article, Event, EventCreateRequest, EventState, EventSuggestRequest, EventSuggestResponse,
    OperationSummary, Page, SpectrumDto,
};
use crate::transport::{QueryParams, RequestSpec};
use crate::{ApiError, ValidationError};

use super::{article_ids_body, NewslensClient, Pagination};

/// Default size of the trending and recent event lists.
pub const DEFAULT_EVENT_LIMIT: u32 = 10;

/// Filters for `GET /events`. The server orders by `updatedAt` descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub topic: Option<String>,
    pub state: Option<EventState>,
    pub published: Option<bool>,
    pub pagination: Pagination,
}

impl EventQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.pagination.page_or_default())
            .push("size", self.pagination.size_or_default())
            .optional_text("topic", self.topic.as_deref())
            .optional("state", self.state.as_ref())
            .optional("published", self.published)
    }
}

impl NewslensClient {
    pub async fn get_events(&self, query: &EventQuery) -> Result<Page<Event>, ApiError> {
        self.public()
            .fetch(RequestSpec::get("/events").with_query(query.to_params()))
            .await
    }

    pub async fn get_trending_events(&self, limit: Option<u32>) -> Result<Vec<Event>, ApiError> {
        self.event_list("/events/trending", limit).await
    }

    pub async fn get_recent_events(&self, limit: Option<u32>) -> Result<Vec<Event>, ApiError> {
        self.event_list("/events/recent", limit).await
    }

    async fn event_list(&self, path: &str, limit: Option<u32>) -> Result<Vec<Event>, ApiError> {
        let params = QueryParams::new().push("limit", limit.unwrap_or(DEFAULT_EVENT_LIMIT));
        self.public()
            .fetch(RequestSpec::get(path).with_query(params))
            .await
    }

    pub async fn get_event(&self, event_id: i64) -> Result<Event, ApiError> {
        self.public()
            .fetch(RequestSpec::get(format!("/events/{event_id}")))
            .await
    }

    pub async fn get_event_articles(&self, event_id: i64) -> Result<Vec<Article>, ApiError> {
        self.public()
            .fetch(RequestSpec::get(format!("/events/{event_id}/articles")))
            .await
    }

    /// Bias bar data of an event.
    pub async fn get_event_spectrum(&self, event_id: i64) -> Result<SpectrumDto, ApiError> {
        self.public()
            .fetch(RequestSpec::get(format!("/events/{event_id}/spectrum")))
            .await
    }

    pub async fn create_event(&self, request: &EventCreateRequest) -> Result<Event, ApiError> {
        self.admin()
            .fetch(RequestSpec::post("/admin/events").with_json(request)?)
            .await
    }

    /// Ask the server to draft topic, summary and actors for a set of articles.
    pub async fn suggest_event(
        &self,
        article_ids: &[i64],
    ) -> Result<EventSuggestResponse, ApiError> {
        if article_ids.is_empty() {
            return Err(ValidationError::EmptyArticleIds.into());
        }
        let body = EventSuggestRequest {
            article_ids: article_ids.to_vec(),
        };
        self.admin()
            .fetch(RequestSpec::post("/admin/events/suggest").with_json(&body)?)
            .await
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<OperationSummary, ApiError> {
        self.admin()
            .fetch(RequestSpec::delete(format!("/admin/events/{event_id}")))
            .await
    }

    /// Detach every article and remove the event.
    pub async fn dissolve_event(&self, event_id: i64) -> Result<OperationSummary, ApiError> {
        self.event_action(event_id, "dissolve").await
    }

    /// Recompute aggregate statistics (counts, hotness, stance diversity).
    pub async fn recalculate_event(&self, event_id: i64) -> Result<OperationSummary, ApiError> {
        self.event_action(event_id, "recalculate").await
    }

    /// Regenerate the summary and key points.
    pub async fn regenerate_event(&self, event_id: i64) -> Result<OperationSummary, ApiError> {
        self.event_action(event_id, "regenerate").await
    }

    async fn event_action(
        &self,
        event_id: i64,
        action: &str,
    ) -> Result<OperationSummary, ApiError> {
        let path = format!("/admin/events/{event_id}/{action}");
        self.admin().fetch(RequestSpec::post(path)).await
    }

    pub async fn publish_event(&self, event_id: i64, published: bool) -> Result<Event, ApiError> {
        let params = QueryParams::new().push("published", published);
        let spec = RequestSpec::post(format!("/admin/events/{event_id}/publish"));
        self.admin().fetch(spec.with_query(params)).await
    }

    pub async fn set_event_headline(
        &self,
        event_id: i64,
        headline: bool,
    ) -> Result<Event, ApiError> {
        let params = QueryParams::new().push("headline", headline);
        let spec = RequestSpec::post(format!("/admin/events/{event_id}/headline"));
        self.admin().fetch(spec.with_query(params)).await
    }

    pub async fn add_event_articles(
        &self,
        event_id: i64,
        article_ids: &[i64],
    ) -> Result<OperationSummary, ApiError> {
        let body = article_ids_body(article_ids)?;
        let spec = RequestSpec::post(format!("/admin/events/{event_id}/articles"));
        self.admin().fetch(spec.with_json(&body)?).await
    }

    pub async fn remove_event_articles(
        &self,
        event_id: i64,
        article_ids: &[i64],
    ) -> Result<OperationSummary, ApiError> {
        let body = article_ids_body(article_ids)?;
        let spec = RequestSpec::delete(format!("/admin/events/{event_id}/articles"));
        self.admin().fetch(spec.with_json(&body)?).await
    }
}
