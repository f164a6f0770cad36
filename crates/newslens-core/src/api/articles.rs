use crate::domain::{
    Article, ArticleIncitementAnalysis, ArticleIncitementEvidence, OperationSummary, Page,
};
use crate::transport::{QueryParams, RequestSpec};
use crate::ApiError;

use super::{article_ids_body, required_query, NewslensClient, Pagination};

/// Default result count of the semantic (limit-based) article search.
pub const DEFAULT_SEMANTIC_LIMIT: u32 = 10;

/// Filters for `GET /articles`. Dates use the ISO query form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub source_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pagination: Pagination,
}

impl ArticleQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .optional_text("sourceName", self.source_name.as_deref())
            .optional_text("startDate", self.start_date.as_deref())
            .optional_text("endDate", self.end_date.as_deref())
            .push("page", self.pagination.page_or_default())
            .push("size", self.pagination.size_or_default())
    }
}

/// Keyword search with paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSearch {
    pub q: String,
    pub pagination: Pagination,
}

impl ArticleSearch {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            pagination: Pagination::default(),
        }
    }
}

impl NewslensClient {
    pub async fn get_articles(&self, query: &ArticleQuery) -> Result<Page<Article>, ApiError> {
        self.public()
            .fetch(RequestSpec::get("/articles").with_query(query.to_params()))
            .await
    }

    pub async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        self.public()
            .fetch(RequestSpec::get(format!("/articles/{id}")))
            .await
    }

    /// Paged keyword search. An empty query fails before any request.
    pub async fn search_articles(&self, search: &ArticleSearch) -> Result<Page<Article>, ApiError> {
        let q = required_query(&search.q)?;
        let params = QueryParams::new()
            .push("q", q)
            .push("page", search.pagination.page_or_default())
            .push("size", search.pagination.size_or_default());
        self.public()
            .fetch(RequestSpec::get("/articles/search").with_query(params))
            .await
    }

    /// Limit-based semantic search returning a plain list.
    pub async fn search_articles_semantic(
        &self,
        q: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Article>, ApiError> {
        let q = required_query(q)?;
        let params = QueryParams::new()
            .push("q", q)
            .push("limit", limit.unwrap_or(DEFAULT_SEMANTIC_LIMIT));
        self.public()
            .fetch(RequestSpec::get("/articles/search").with_query(params))
            .await
    }

    /// Incitement analysis of an article. Articles without an analysis
    /// (low value or not yet assigned to an event) answer 404, which is
    /// returned as `Ok(None)`.
    pub async fn get_article_incitement(
        &self,
        id: i64,
    ) -> Result<Option<ArticleIncitementAnalysis>, ApiError> {
        match self
            .public()
            .fetch(RequestSpec::get(format!("/articles/{id}/incitement")))
            .await
        {
            Ok(analysis) => Ok(Some(analysis)),
            Err(ApiError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub async fn get_article_incitement_evidence(
        &self,
        id: i64,
    ) -> Result<Vec<ArticleIncitementEvidence>, ApiError> {
        self.public()
            .fetch(RequestSpec::get(format!("/articles/{id}/incitement/evidence")))
            .await
    }

    /// Re-run event aggregation for the given articles.
    pub async fn batch_reaggregate(
        &self,
        article_ids: &[i64],
    ) -> Result<OperationSummary, ApiError> {
        let body = article_ids_body(article_ids)?;
        self.admin()
            .fetch(RequestSpec::post("/admin/articles/batch-reaggregate").with_json(&body)?)
            .await
    }
}
