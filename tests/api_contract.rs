//! Contract tests for the typed API operations: paths, methods, query
//! parameters and bodies sent, and decoding of representative payloads.

use std::sync::Arc;

use newslens_core::{
    ApiError, ApiErrorKind, ArticleQuery, ArticleSearch, ClientConfig, CredentialStore,
    EventCreateRequest, EventQuery, EventState, HttpMethod, HttpRequest, MediaSourceUpdate,
    MockHttpClient, NewslensClient, Pagination, TrendQuery, TrendWindow, ValidationError,
};
use serde_json::{json, Value};

fn setup() -> (Arc<MockHttpClient>, NewslensClient) {
    let mock = Arc::new(MockHttpClient::new());
    let credentials = CredentialStore::in_memory();
    credentials.login("admin-key").expect("login");
    let client = NewslensClient::new(ClientConfig::default(), mock.clone(), credentials);
    (mock, client)
}

fn sent(mock: &MockHttpClient) -> HttpRequest {
    mock.last_request().expect("a request was sent")
}

fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request body")).expect("json body")
}

fn empty_page() -> Value {
    json!({ "content": [], "totalElements": 0, "totalPages": 0, "size": 20, "number": 0 })
}

fn article(id: i64) -> Value {
    json!({ "id": id, "url": format!("https://news.example/{id}"), "status": "PENDING" })
}

fn event(id: i64) -> Value {
    json!({ "eventId": id, "topic": "Typhoon", "state": "OPEN" })
}

// =============================================================================
// Articles
// =============================================================================

#[tokio::test]
async fn article_list_sends_defaults_and_only_set_filters() {
    let (mock, client) = setup();
    mock.push_json(&empty_page());

    client
        .get_articles(&ArticleQuery::default())
        .await
        .expect("page");

    let request = sent(&mock);
    assert_eq!(request.url, "http://localhost:8080/articles");
    assert_eq!(request.query_value("page"), Some("0"));
    assert_eq!(request.query_value("size"), Some("20"));
    assert_eq!(request.query_value("sourceName"), None);
    assert_eq!(request.query_value("startDate"), None);
    assert_eq!(request.query_value("endDate"), None);
}

#[tokio::test]
async fn article_list_passes_filters_through() {
    let (mock, client) = setup();
    let mut page = empty_page();
    page["content"] = json!([article(1), article(2)]);
    page["totalElements"] = json!(2);
    page["totalPages"] = json!(1);
    mock.push_json(&page);

    let query = ArticleQuery {
        source_name: Some(String::from("Example Daily")),
        start_date: Some(String::from("2024-01-01T00:00:00")),
        end_date: None,
        pagination: Pagination::new(2, 5),
    };
    let result = client.get_articles(&query).await.expect("page");

    let request = sent(&mock);
    assert_eq!(request.query_value("sourceName"), Some("Example Daily"));
    assert_eq!(request.query_value("startDate"), Some("2024-01-01T00:00:00"));
    assert_eq!(request.query_value("endDate"), None);
    assert_eq!(request.query_value("page"), Some("2"));
    assert_eq!(request.query_value("size"), Some("5"));
    assert_eq!(result.content.len(), 2);
    assert!(result.is_last());
}

#[tokio::test]
async fn keyword_search_is_trimmed_and_paged() {
    let (mock, client) = setup();
    mock.push_json(&empty_page());

    client
        .search_articles(&ArticleSearch::new("  election "))
        .await
        .expect("page");

    let request = sent(&mock);
    assert_eq!(request.url, "http://localhost:8080/articles/search");
    assert_eq!(request.query_value("q"), Some("election"));
    assert_eq!(request.query_value("page"), Some("0"));
    assert_eq!(request.query_value("size"), Some("20"));
}

#[tokio::test]
async fn blank_keyword_search_never_reaches_network() {
    let (mock, client) = setup();

    let error = client
        .search_articles(&ArticleSearch::new("   "))
        .await
        .expect_err("blank query");

    assert!(matches!(
        error,
        ApiError::Validation(ValidationError::EmptySearchQuery)
    ));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn semantic_search_defaults_to_ten_results() {
    let (mock, client) = setup();
    mock.push_json(&json!([article(5)]));

    let results = client
        .search_articles_semantic("flood", None)
        .await
        .expect("list");

    let request = sent(&mock);
    assert_eq!(request.query_value("limit"), Some("10"));
    assert_eq!(request.query_value("page"), None);
    assert_eq!(results[0].id, 5);
}

#[tokio::test]
async fn missing_incitement_analysis_is_an_empty_result() {
    let (mock, client) = setup();
    mock.push_response(404, "");

    let analysis = client
        .get_article_incitement(12)
        .await
        .expect("404 is not an error here");

    assert_eq!(analysis, None);
    assert_eq!(
        sent(&mock).url,
        "http://localhost:8080/articles/12/incitement"
    );
}

#[tokio::test]
async fn other_incitement_failures_still_raise() {
    let (mock, client) = setup();
    mock.push_response(500, "");
    mock.push_response(401, "");

    let server = client.get_article_incitement(12).await.expect_err("500");
    let auth = client.get_article_incitement(12).await.expect_err("401");

    assert_eq!(server.kind(), ApiErrorKind::ServerError);
    assert_eq!(auth.kind(), ApiErrorKind::AuthInvalid);
}

#[tokio::test]
async fn present_incitement_analysis_is_decoded() {
    let (mock, client) = setup();
    mock.push_json(&json!({
        "id": 1, "articleId": 12, "eventId": null, "outlet": "Example Daily",
        "incitementScore": 63.0,
        "dimA": 3.0, "dimB": 4.0, "dimC": 2.5, "dimD": 1.0, "dimE": 0.0, "dimF": 2.0, "dimG": 3.5,
        "stanceTarget": "government", "stancePolarity": -0.4, "stanceConfidence": 0.8,
        "confidence": 0.7, "computedAt": "2024-01-15 10:30:00", "version": "v2"
    }));

    let analysis = client
        .get_article_incitement(12)
        .await
        .expect("analysis")
        .expect("present");

    assert_eq!(analysis.incitement_score, 63.0);
    assert_eq!(analysis.dimensions()[1], ("dimB", 4.0));
}

#[tokio::test]
async fn incitement_evidence_is_listed() {
    let (mock, client) = setup();
    mock.push_json(&json!([{
        "id": 3, "articleAnalysisId": 1, "text": "They will pay for this",
        "attributionType": "QUOTED_SOURCE", "dimsJson": { "E": 4.0 }, "targetsJson": ["party"]
    }]));

    let evidence = client
        .get_article_incitement_evidence(12)
        .await
        .expect("evidence");

    assert_eq!(
        sent(&mock).url,
        "http://localhost:8080/articles/12/incitement/evidence"
    );
    assert_eq!(evidence[0].attribution_type.as_str(), "QUOTED_SOURCE");
}

#[tokio::test]
async fn batch_reaggregate_posts_article_ids_with_key() {
    let (mock, client) = setup();
    mock.push_json(&json!({ "message": "queued", "processed": 3 }));

    let summary = client.batch_reaggregate(&[1, 2, 3]).await.expect("summary");

    let request = sent(&mock);
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.url,
        "http://localhost:8080/admin/articles/batch-reaggregate"
    );
    assert_eq!(request.header("x-api-key"), Some("admin-key"));
    assert_eq!(body_of(&request), json!({ "articleIds": [1, 2, 3] }));
    assert_eq!(summary.processed, Some(3));
}

#[tokio::test]
async fn batch_operations_reject_empty_id_lists() {
    let (mock, client) = setup();

    let reaggregate = client.batch_reaggregate(&[]).await.expect_err("empty");
    let suggest = client.suggest_event(&[]).await.expect_err("empty");
    let add = client.add_event_articles(1, &[]).await.expect_err("empty");

    for error in [reaggregate, suggest, add] {
        assert!(matches!(
            error,
            ApiError::Validation(ValidationError::EmptyArticleIds)
        ));
    }
    assert_eq!(mock.request_count(), 0);
}

// =============================================================================
// Events
// =============================================================================

#[tokio::test]
async fn event_list_sends_only_set_filters() {
    let (mock, client) = setup();
    mock.push_json(&empty_page());
    mock.push_json(&empty_page());

    client.get_events(&EventQuery::default()).await.expect("page");
    let bare = sent(&mock);

    let query = EventQuery {
        topic: Some(String::from("typhoon")),
        state: Some(EventState::Closed),
        published: Some(true),
        pagination: Pagination::default(),
    };
    client.get_events(&query).await.expect("page");
    let filtered = sent(&mock);

    assert_eq!(bare.query_value("topic"), None);
    assert_eq!(bare.query_value("state"), None);
    assert_eq!(bare.query_value("published"), None);
    assert_eq!(bare.query_value("size"), Some("20"));
    assert_eq!(filtered.query_value("topic"), Some("typhoon"));
    assert_eq!(filtered.query_value("state"), Some("CLOSED"));
    assert_eq!(filtered.query_value("published"), Some("true"));
}

#[tokio::test]
async fn trending_and_recent_use_limit() {
    let (mock, client) = setup();
    mock.push_json(&json!([event(1)]));
    mock.push_json(&json!([]));

    let trending = client.get_trending_events(None).await.expect("trending");
    let trending_request = sent(&mock);
    client.get_recent_events(Some(3)).await.expect("recent");
    let recent_request = sent(&mock);

    assert_eq!(trending[0].state, EventState::Open);
    assert_eq!(trending_request.url, "http://localhost:8080/events/trending");
    assert_eq!(trending_request.query_value("limit"), Some("10"));
    assert_eq!(recent_request.url, "http://localhost:8080/events/recent");
    assert_eq!(recent_request.query_value("limit"), Some("3"));
}

#[tokio::test]
async fn event_detail_articles_and_spectrum_paths() {
    let (mock, client) = setup();
    mock.push_json(&event(4));
    mock.push_json(&json!([article(1)]));
    mock.push_json(&json!({ "topic": "Typhoon", "totalArticles": 1, "leftWingRatio": 0.5 }));

    client.get_event(4).await.expect("event");
    client.get_event_articles(4).await.expect("articles");
    let spectrum = client.get_event_spectrum(4).await.expect("spectrum");

    let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://localhost:8080/events/4",
            "http://localhost:8080/events/4/articles",
            "http://localhost:8080/events/4/spectrum",
        ]
    );
    assert_eq!(spectrum.left_wing_ratio, Some(0.5));
}

#[tokio::test]
async fn create_event_posts_body_to_admin_endpoint() {
    let (mock, client) = setup();
    mock.push_json(&event(10));

    let mut request = EventCreateRequest::new("Typhoon");
    request.start_time = Some(String::from("2024-07-01T08:00:00"));
    request.article_ids = Some(vec![7, 8]);
    let created = client.create_event(&request).await.expect("event");

    let sent_request = sent(&mock);
    assert_eq!(sent_request.url, "http://localhost:8080/admin/events");
    assert_eq!(sent_request.header("X-API-KEY"), Some("admin-key"));
    assert_eq!(
        body_of(&sent_request),
        json!({ "topic": "Typhoon", "startTime": "2024-07-01T08:00:00", "articleIds": [7, 8] })
    );
    assert_eq!(created.event_id, 10);
}

#[tokio::test]
async fn suggest_event_returns_draft() {
    let (mock, client) = setup();
    mock.push_json(&json!({
        "topic": "Typhoon Gaemi", "coreSummary": "Landfall in the north", "actors": ["CWA"]
    }));

    let draft = client.suggest_event(&[1, 2]).await.expect("draft");

    assert_eq!(sent(&mock).url, "http://localhost:8080/admin/events/suggest");
    assert_eq!(draft.actors, vec![String::from("CWA")]);
    assert_eq!(draft.key_points, None);
}

#[tokio::test]
async fn event_admin_actions_hit_their_paths() {
    let (mock, client) = setup();

    client.delete_event(5).await.expect("delete");
    client.dissolve_event(5).await.expect("dissolve");
    client.recalculate_event(5).await.expect("recalculate");
    client.regenerate_event(5).await.expect("regenerate");

    let calls: Vec<(HttpMethod, String)> = mock
        .requests()
        .into_iter()
        .map(|r| (r.method, r.url))
        .collect();
    assert_eq!(
        calls,
        vec![
            (HttpMethod::Delete, String::from("http://localhost:8080/admin/events/5")),
            (HttpMethod::Post, String::from("http://localhost:8080/admin/events/5/dissolve")),
            (HttpMethod::Post, String::from("http://localhost:8080/admin/events/5/recalculate")),
            (HttpMethod::Post, String::from("http://localhost:8080/admin/events/5/regenerate")),
        ]
    );
}

#[tokio::test]
async fn publish_and_headline_send_flags() {
    let (mock, client) = setup();
    mock.push_json(&event(5));
    mock.push_json(&event(5));

    client.publish_event(5, true).await.expect("publish");
    let publish = sent(&mock);
    client.set_event_headline(5, false).await.expect("headline");
    let headline = sent(&mock);

    assert_eq!(publish.url, "http://localhost:8080/admin/events/5/publish");
    assert_eq!(publish.query_value("published"), Some("true"));
    assert_eq!(headline.url, "http://localhost:8080/admin/events/5/headline");
    assert_eq!(headline.query_value("headline"), Some("false"));
}

#[tokio::test]
async fn event_membership_add_and_remove() {
    let (mock, client) = setup();

    client.add_event_articles(5, &[11]).await.expect("add");
    client.remove_event_articles(5, &[12, 13]).await.expect("remove");

    let requests = mock.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[1].method, HttpMethod::Delete);
    assert_eq!(requests[1].url, "http://localhost:8080/admin/events/5/articles");
    assert_eq!(body_of(&requests[1]), json!({ "articleIds": [12, 13] }));
}

// =============================================================================
// Sources
// =============================================================================

#[tokio::test]
async fn sources_include_virtual_entries() {
    let (mock, client) = setup();
    mock.push_json(&json!([
        { "id": 1, "name": "Example Daily", "code": "exd", "factuality": "HIGH" },
        { "name": "Blog Feed", "code": "blog" }
    ]));

    let sources = client.get_sources().await.expect("sources");

    assert!(!sources[0].is_virtual());
    assert!(sources[1].is_virtual());
}

#[tokio::test]
async fn media_source_mutations_use_admin_endpoints() {
    let (mock, client) = setup();
    mock.push_json(&json!({ "id": 9, "name": "Example", "code": "ex" }));
    mock.push_json(&json!({ "id": 9, "name": "Example", "code": "ex", "weight": 0.5 }));

    let created = client
        .upsert_media_source(&newslens_core::MediaSource::new("Example", "ex"))
        .await
        .expect("upsert");
    let update = MediaSourceUpdate {
        weight: Some(0.5),
        ..MediaSourceUpdate::default()
    };
    let updated = client.update_media_source(9, &update).await.expect("update");
    client.delete_media_source(9).await.expect("delete");

    let requests = mock.requests();
    assert_eq!(requests[0].url, "http://localhost:8080/admin/media-sources");
    assert_eq!(body_of(&requests[0]), json!({ "name": "Example", "code": "ex" }));
    assert_eq!(requests[1].method, HttpMethod::Put);
    assert_eq!(requests[1].url, "http://localhost:8080/admin/media-sources/9");
    assert_eq!(body_of(&requests[1]), json!({ "weight": 0.5 }));
    assert_eq!(requests[2].method, HttpMethod::Delete);
    assert!(requests
        .iter()
        .all(|request| request.header("X-API-KEY") == Some("admin-key")));
    assert_eq!(created.id, Some(9));
    assert_eq!(updated.weight, Some(0.5));
}

// =============================================================================
// Spectrum
// =============================================================================

#[tokio::test]
async fn spectrum_search_rejects_blank_queries_offline() {
    let (mock, client) = setup();

    for q in ["", "   "] {
        let error = client.search_spectrum(q, None).await.expect_err("blank");
        assert!(matches!(
            error,
            ApiError::Validation(ValidationError::EmptySearchQuery)
        ));
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn spectrum_search_trims_query() {
    let (mock, client) = setup();
    mock.push_json(&json!({ "topic": "typhoon", "totalArticles": 0 }));

    client
        .search_spectrum("  typhoon  ", None)
        .await
        .expect("spectrum");

    let request = sent(&mock);
    assert_eq!(request.url, "http://localhost:8080/spectrum/search");
    assert_eq!(request.query_value("q"), Some("typhoon"));
    assert_eq!(request.query_value("limit"), Some("20"));
}

// =============================================================================
// Incitement
// =============================================================================

#[tokio::test]
async fn event_incitement_passes_evidence_flag() {
    let (mock, client) = setup();
    mock.push_json(&json!({
        "eventId": 4, "topic": "Typhoon",
        "outlets": [{ "outlet": "Example Daily", "incitementScore": 22.0, "articleCount": 2 }],
        "statistics": {
            "totalOutlets": 1, "totalArticles": 2,
            "averageIncitement": 22.0, "averageStance": 0.1
        }
    }));

    let report = client.get_event_incitement(4, true).await.expect("report");

    let request = sent(&mock);
    assert_eq!(request.url, "http://localhost:8080/events/4/incitement");
    assert_eq!(request.query_value("includeEvidence"), Some("true"));
    assert_eq!(report.outlets.len(), 1);
}

#[tokio::test]
async fn incitement_spectrum_event_filter_is_optional() {
    let (mock, client) = setup();
    mock.push_json(&json!({ "points": [] }));
    mock.push_json(&json!({ "eventId": 4, "outlets": [] }));

    client.get_incitement_spectrum(None).await.expect("all");
    let all = sent(&mock);
    client.get_incitement_spectrum(Some(4)).await.expect("one");
    let one = sent(&mock);

    assert_eq!(all.url, "http://localhost:8080/incitement/spectrum");
    assert!(all.query.is_empty());
    assert_eq!(one.query_value("eventId"), Some("4"));
}

#[tokio::test]
async fn incitement_trend_sends_only_given_filters() {
    let (mock, client) = setup();
    mock.push_json(&json!({
        "outlet": "Example Daily", "window": "week",
        "dataPoints": [{ "timestamp": "2024-01-15T00:00:00", "rawScore": 30.0, "articleCount": 4 }],
        "baseline": { "mean": 25.0, "stdDev": 5.0, "sampleSize": 40 }
    }));

    let query = TrendQuery {
        outlet: Some(String::from("Example Daily")),
        start_date: Some(String::from("2024-01-01T00:00:00")),
        ..TrendQuery::default()
    };
    let trend = client.get_incitement_trend(&query).await.expect("trend");

    let request = sent(&mock);
    assert_eq!(request.url, "http://localhost:8080/incitement/trend");
    assert_eq!(request.query_value("outlet"), Some("Example Daily"));
    assert_eq!(request.query_value("startDate"), Some("2024-01-01T00:00:00"));
    assert_eq!(request.query_value("endDate"), None);
    assert_eq!(request.query_value("window"), None);
    assert_eq!(trend.window, Some(TrendWindow::Week));
    assert_eq!(trend.data_points[0].score(), Some(30.0));
}
