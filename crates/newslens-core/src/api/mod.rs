//! Typed access to the newslens backend.
//!
//! [`NewslensClient`] wraps the public and admin transports; each resource
//! module adds its operations as inherent methods.
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`articles`] | `/articles`, `/admin/articles/*` |
//! | [`events`] | `/events`, `/admin/events/*` |
//! | [`sources`] | `/sources`, `/admin/media-sources/*` |
//! | [`spectrum`] | `/spectrum/search` |
//! | [`incitement`] | `/events/{id}/incitement`, `/incitement/*` |
//!
//! Read endpoints go through the public transport, every `/admin` endpoint
//! through the admin transport.

pub mod articles;
pub mod events;
pub mod incitement;
pub mod sources;
pub mod spectrum;

use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::http_client::HttpClient;
use crate::transport::{ApiClient, ApiClients};
use crate::ValidationError;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 0-based page index and page size. Unset values fall back to page 0 and
/// [`DEFAULT_PAGE_SIZE`]; a size of zero counts as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl Pagination {
    pub const fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn page_or_default(self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn size_or_default(self) -> u32 {
        self.size.filter(|size| *size > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleIdsBody<'a> {
    article_ids: &'a [i64],
}

pub(crate) fn article_ids_body(article_ids: &[i64]) -> Result<ArticleIdsBody<'_>, ValidationError> {
    if article_ids.is_empty() {
        return Err(ValidationError::EmptyArticleIds);
    }
    Ok(ArticleIdsBody { article_ids })
}

pub(crate) fn required_query(q: &str) -> Result<&str, ValidationError> {
    let trimmed = q.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySearchQuery);
    }
    Ok(trimmed)
}

/// Entry point for every newslens API call.
#[derive(Debug, Clone)]
pub struct NewslensClient {
    clients: ApiClients,
    credentials: CredentialStore,
}

impl NewslensClient {
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            clients: ApiClients::new(config, http, credentials.clone()),
            credentials,
        }
    }

    /// Client using reqwest for transport.
    pub fn with_reqwest(config: ClientConfig, credentials: CredentialStore) -> Self {
        Self {
            clients: ApiClients::with_reqwest(config, credentials.clone()),
            credentials,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn public(&self) -> &ApiClient {
        &self.clients.public
    }

    pub fn admin(&self) -> &ApiClient {
        &self.clients.admin
    }
}
