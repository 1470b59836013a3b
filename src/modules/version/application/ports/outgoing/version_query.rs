use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VersionQuery: Send + Sync {
    /// Versions of a product in canonical order (max_version descending).
    async fn get_versions(&self, product_id: Uuid) -> Result<Vec<Version>, VersionQueryError>;

    /// The product's default version, if one is marked.
    async fn get_default_version(
        &self,
        product_id: Uuid,
    ) -> Result<Option<Version>, VersionQueryError>;
}
