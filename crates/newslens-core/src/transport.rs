//! Transport client for the newslens backend.
//!
//! Two trust levels share one [`HttpClient`]:
//!
//! - the public client never attaches credentials;
//! - the admin client reads the [`CredentialStore`] at dispatch time and
//!   sends the trimmed key as `X-API-KEY`.
//!
//! Request preparation ([`prepare_request`]) and failure normalization
//! ([`normalize_response`]) are plain functions so they can be tested
//! without a network.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};
use crate::{ApiError, ValidationError};

/// Query parameters for one request. Undefined values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_owned(), value.to_string()));
        self
    }

    pub fn optional<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    /// Like [`QueryParams::optional`], but an empty string counts as unset.
    pub fn optional_text(self, name: &str, value: Option<&str>) -> Self {
        self.optional(name, value.filter(|value| !value.is_empty()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// What to call, before base url, credentials and headers are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// Trim a raw API key and check it is safe to put in a header.
pub fn sanitize_api_key(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if !trimmed.is_ascii() {
        return Err(ValidationError::InvalidCredentialCharacters);
    }
    Ok(trimmed.to_owned())
}

/// Turn a [`RequestSpec`] into a concrete [`HttpRequest`].
///
/// `credential` is the raw stored key for admin requests and `None` for
/// public ones. A key with non-ASCII characters aborts the request here.
pub fn prepare_request(
    config: &ClientConfig,
    credential: Option<&str>,
    spec: RequestSpec,
) -> Result<HttpRequest, ApiError> {
    let auth = match credential.filter(|raw| !raw.is_empty()) {
        None => HttpAuth::None,
        Some(raw) => {
            let key = sanitize_api_key(raw).inspect_err(|_| {
                warn!(path = %spec.path, "refusing to send API key with non-ASCII characters");
            })?;
            if key.is_empty() {
                HttpAuth::None
            } else {
                HttpAuth::ApiKey(key)
            }
        }
    };

    let mut request = HttpRequest::new(spec.method, config.endpoint(&spec.path))
        .with_header("content-type", "application/json")
        .with_header("accept", "application/json")
        .with_query(spec.query.into_pairs())
        .with_timeout(config.timeout)
        .with_auth(&auth);

    if let Some(body) = spec.body {
        request = request.with_body(body);
    }

    Ok(request)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

/// Map a transport outcome onto the user-facing error taxonomy.
///
/// Successful (2xx) responses pass through untouched.
pub fn normalize_response(
    outcome: Result<HttpResponse, HttpError>,
) -> Result<HttpResponse, ApiError> {
    match outcome {
        Ok(response) if response.is_success() => Ok(response),
        Ok(response) => Err(match response.status {
            401 => ApiError::AuthInvalid,
            404 => ApiError::NotFound,
            400 => ApiError::bad_request(server_message(&response.body)),
            500 => ApiError::Server,
            status => ApiError::status(status, server_message(&response.body)),
        }),
        Err(error) => Err(match error.kind() {
            HttpErrorKind::NoResponse => ApiError::Network,
            HttpErrorKind::Construction => ApiError::request(error.message()),
        }),
    }
}

/// Decode a successful body. Empty bodies read as `null`, then `{}`.
pub fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.body.trim().is_empty() {
        return serde_json::from_str("null")
            .or_else(|_| serde_json::from_str("{}"))
            .map_err(ApiError::from);
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// One configured transport at a fixed trust level.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpClient>,
    credentials: Option<CredentialStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .field("admin", &self.is_admin())
            .finish()
    }
}

impl ApiClient {
    /// Unauthenticated client for read-only endpoints.
    pub fn public(config: Arc<ClientConfig>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http,
            credentials: None,
        }
    }

    /// Client that attaches the stored API key to every request.
    pub fn admin(
        config: Arc<ClientConfig>,
        http: Arc<dyn HttpClient>,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            config,
            http,
            credentials: Some(credentials),
        }
    }

    pub const fn is_admin(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and normalize any failure.
    pub async fn send(&self, spec: RequestSpec) -> Result<HttpResponse, ApiError> {
        let credential = self
            .credentials
            .as_ref()
            .and_then(CredentialStore::api_key);
        let method = spec.method;
        let path = spec.path.clone();
        let request = prepare_request(&self.config, credential.as_deref(), spec)?;

        debug!(%method, %path, admin = self.is_admin(), "dispatching request");
        let outcome = self.http.execute(request).await;
        normalize_response(outcome).inspect_err(|error| {
            warn!(%method, %path, status = ?error.http_status(), "request failed: {error}");
        })
    }

    /// Send a request and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        let response = self.send(spec).await?;
        decode_body(&response)
    }
}

/// The public and admin clients over one shared transport.
#[derive(Debug, Clone)]
pub struct ApiClients {
    pub public: ApiClient,
    pub admin: ApiClient,
}

impl ApiClients {
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        credentials: CredentialStore,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            public: ApiClient::public(Arc::clone(&config), Arc::clone(&http)),
            admin: ApiClient::admin(config, http, credentials),
        }
    }

    /// Clients backed by reqwest.
    pub fn with_reqwest(config: ClientConfig, credentials: CredentialStore) -> Self {
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::new(config, http, credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiErrorKind;

    fn config() -> ClientConfig {
        ClientConfig::default()
    }

    #[test]
    fn optional_params_are_skipped() {
        let query = QueryParams::new()
            .optional("topic", None::<&str>)
            .optional_text("sourceName", Some(""))
            .optional("published", Some(true))
            .push("page", 0);

        assert!(!query.contains("topic"));
        assert!(!query.contains("sourceName"));
        assert_eq!(
            query.into_pairs(),
            vec![
                (String::from("published"), String::from("true")),
                (String::from("page"), String::from("0")),
            ]
        );
    }

    #[test]
    fn trimmed_key_is_sent() {
        let request = prepare_request(&config(), Some(" abc123 "), RequestSpec::get("/admin/x"))
            .expect("prepared");
        assert_eq!(request.header("X-API-KEY"), Some("abc123"));
        assert_eq!(request.url, "http://localhost:8080/admin/x");
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn missing_or_blank_key_sends_no_header() {
        for credential in [None, Some(""), Some("   ")] {
            let request =
                prepare_request(&config(), credential, RequestSpec::get("/admin/x")).expect("ok");
            assert_eq!(request.header("X-API-KEY"), None);
        }
    }

    #[test]
    fn non_ascii_key_is_rejected() {
        let error = prepare_request(&config(), Some("金鑰123"), RequestSpec::get("/admin/x"))
            .expect_err("must fail");
        assert!(matches!(
            error,
            ApiError::Validation(ValidationError::InvalidCredentialCharacters)
        ));
    }

    #[test]
    fn timeout_follows_config() {
        let config = config().with_timeout(std::time::Duration::from_secs(5));
        let request = prepare_request(&config, None, RequestSpec::get("/articles")).expect("ok");
        assert_eq!(request.timeout, std::time::Duration::from_secs(5));
    }

    #[test]
    fn status_table_is_applied() {
        let cases = [
            (401, "", ApiErrorKind::AuthInvalid, "API key invalid or missing"),
            (404, "", ApiErrorKind::NotFound, "resource not found"),
            (400, r#"{"message":"X"}"#, ApiErrorKind::BadRequest, "X"),
            (400, "", ApiErrorKind::BadRequest, "invalid request parameters"),
            (
                500,
                r#"{"message":"boom"}"#,
                ApiErrorKind::ServerError,
                "server error, please retry later",
            ),
            (
                409,
                r#"{"message":"duplicate code"}"#,
                ApiErrorKind::UnmappedHttpStatus,
                "duplicate code",
            ),
            (503, "<html>", ApiErrorKind::UnmappedHttpStatus, "request failed (status 503)"),
        ];

        for (status, body, kind, message) in cases {
            let error = normalize_response(Ok(HttpResponse::new(status, body)))
                .expect_err("non-2xx must fail");
            assert_eq!(error.kind(), kind, "status {status}");
            assert_eq!(error.to_string(), message, "status {status}");
        }
    }

    #[test]
    fn transport_failures_are_classified() {
        let network = normalize_response(Err(HttpError::no_response("timed out")))
            .expect_err("must fail");
        assert_eq!(network.to_string(), "connection failed, check your network");

        let construction = normalize_response(Err(HttpError::construction("bad header value")))
            .expect_err("must fail");
        assert_eq!(construction.kind(), ApiErrorKind::RequestConstructionFailure);
        assert_eq!(construction.to_string(), "bad header value");

        let silent = normalize_response(Err(HttpError::construction(""))).expect_err("must fail");
        assert_eq!(silent.to_string(), "unknown error");
    }

    #[test]
    fn empty_success_body_decodes_to_unit_and_option() {
        let response = HttpResponse::new(204, "");
        decode_body::<()>(&response).expect("unit");
        assert_eq!(decode_body::<Option<u32>>(&response).expect("option"), None);
    }
}
