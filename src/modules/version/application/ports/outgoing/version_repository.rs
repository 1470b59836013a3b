use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;

/// Input for an insert-or-update save. `id: None` inserts a new version,
/// `id: Some(..)` rewrites the existing row.
#[derive(Debug, Clone)]
pub struct SaveVersionData {
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub name: String,
    pub slug: String,
    pub min_version: f64,
    pub max_version: f64,
    pub visible: bool,
    pub is_default: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VersionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Version not found")]
    VersionNotFound,

    #[error("only one version can be default per product")]
    DefaultAlreadyExists,
}

#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Saves a version. When `is_default` is set, the conflict check and
    /// the write happen atomically; a second default for the same product
    /// is rejected with `DefaultAlreadyExists` and nothing is written.
    async fn save_version(&self, data: SaveVersionData) -> Result<Version, VersionRepositoryError>;

    async fn delete_version(&self, version_id: Uuid) -> Result<(), VersionRepositoryError>;
}
