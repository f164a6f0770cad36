//! # Newslens Core
//!
//! Client library for the newslens news-aggregation and media-bias backend.
//!
//! ## Overview
//!
//! - **Credential store** holding the admin API key, persisted to disk
//! - **Transport client** with a public and an admin trust level, API key
//!   injection and normalized, user-facing errors
//! - **Typed API operations** for articles, events, media sources, bias
//!   spectrum and incitement reports
//! - **Date utilities** for the backend's `YYYY-MM-DD HH:mm:ss` format
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Typed operations per resource |
//! | [`config`] | Base url, timeout and home directory resolution |
//! | [`credentials`] | API key store and its storage backends |
//! | [`datetime`] | Backend/ISO date conversion and relative time |
//! | [`domain`] | Wire records (Article, Event, MediaSource, ...) |
//! | [`error`] | Error taxonomy |
//! | [`http_client`] | HTTP transport abstraction (reqwest / mock) |
//! | [`transport`] | Request preparation and error normalization |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newslens_core::{ClientConfig, CredentialStore, FileStorage, NewslensClient, ArticleQuery};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = Arc::new(FileStorage::new(newslens_core::config::default_session_path()));
//!     let credentials = CredentialStore::restore(storage)?;
//!     let client = NewslensClient::with_reqwest(ClientConfig::from_env()?, credentials);
//!
//!     let page = client.get_articles(&ArticleQuery::default()).await?;
//!     println!("{} articles", page.total_elements);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`], whose `Display` text is the
//! message to show the user:
//!
//! ```rust
//! use newslens_core::{ApiError, ApiErrorKind};
//!
//! fn describe(error: &ApiError) -> &'static str {
//!     match error.kind() {
//!         ApiErrorKind::AuthInvalid => "log in again",
//!         ApiErrorKind::NetworkUnreachable => "check the connection",
//!         ApiErrorKind::ClientValidation => "fix the input",
//!         _ => "see message",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is only sent by the admin transport, trimmed, and only if
//!   it is pure ASCII
//! - The key is never logged; `Debug` output of the store omits it

pub mod api;
pub mod config;
pub mod credentials;
pub mod datetime;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod transport;

pub use api::articles::{ArticleQuery, ArticleSearch, DEFAULT_SEMANTIC_LIMIT};
pub use api::events::{EventQuery, DEFAULT_EVENT_LIMIT};
pub use api::incitement::TrendQuery;
pub use api::spectrum::DEFAULT_SPECTRUM_LIMIT;
pub use api::{NewslensClient, Pagination, DEFAULT_PAGE_SIZE};

pub use config::ClientConfig;

pub use credentials::{
    CredentialStorage, CredentialStore, FileStorage, MemoryStorage, API_KEY_STORAGE_KEY,
};

pub use domain::{
    Article, ArticleIncitementAnalysis, ArticleIncitementEvidence, AttributionType, Event,
    EventCreateRequest, EventState, EventSuggestRequest, EventSuggestResponse, Factuality,
    IncitementBaseline, IncitementDto, IncitementEvidence, IncitementSpectrumDto,
    IncitementStatistics, IncitementTrendDataPoint, IncitementTrendDto, MediaSource,
    MediaSourceUpdate, OperationSummary, OutletIncitement, Page, ProcessingStatus, SourceCategory,
    SpectrumDto, SpectrumPoint, SpectrumSourceStance, TrendWindow,
};

pub use error::{ApiError, ApiErrorKind, StorageError, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpMethod, HttpRequest, HttpResponse,
    MockHttpClient, ReqwestHttpClient,
};

pub use transport::{
    normalize_response, prepare_request, sanitize_api_key, ApiClient, ApiClients, QueryParams,
    RequestSpec,
};
