use crate::domain::SpectrumDto;
use crate::transport::{QueryParams, RequestSpec};
use crate::ApiError;

use super::{required_query, NewslensClient};

pub const DEFAULT_SPECTRUM_LIMIT: u32 = 20;

impl NewslensClient {
    /// Bias spectrum over articles matching a keyword.
    ///
    /// `q` is trimmed; an empty or whitespace-only query fails with
    /// [`crate::ValidationError::EmptySearchQuery`] without touching the
    /// network.
    pub async fn search_spectrum(
        &self,
        q: &str,
        limit: Option<u32>,
    ) -> Result<SpectrumDto, ApiError> {
        let q = required_query(q)?;
        let params = QueryParams::new()
            .push("q", q)
            .push("limit", limit.unwrap_or(DEFAULT_SPECTRUM_LIMIT));
        self.public()
            .fetch(RequestSpec::get("/spectrum/search").with_query(params))
            .await
    }
}
