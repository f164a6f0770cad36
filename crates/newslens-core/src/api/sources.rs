use crate::domain::{MediaSource, MediaSourceUpdate, OperationSummary};
use crate::transport::RequestSpec;
use crate::ApiError;

use super::NewslensClient;

impl NewslensClient {
    /// All media sources, including virtual ones without an `id`.
    pub async fn get_sources(&self) -> Result<Vec<MediaSource>, ApiError> {
        self.public().fetch(RequestSpec::get("/sources")).await
    }

    /// Create a source, or update the one with the same code.
    pub async fn upsert_media_source(&self, source: &MediaSource) -> Result<MediaSource, ApiError> {
        self.admin()
            .fetch(RequestSpec::post("/admin/media-sources").with_json(source)?)
            .await
    }

    /// Partial update; unset fields are left untouched by the server.
    pub async fn update_media_source(
        &self,
        id: i64,
        update: &MediaSourceUpdate,
    ) -> Result<MediaSource, ApiError> {
        self.admin()
            .fetch(RequestSpec::put(format!("/admin/media-sources/{id}")).with_json(update)?)
            .await
    }

    pub async fn delete_media_source(&self, id: i64) -> Result<OperationSummary, ApiError> {
        self.admin()
            .fetch(RequestSpec::delete(format!("/admin/media-sources/{id}")))
            .await
    }
}
