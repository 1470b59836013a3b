use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;

//
// ──────────────────────────────────────────────────────────
// Add Product Platform
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddProductPlatformError {
    #[error("Platform is already linked to this product")]
    AlreadyLinked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddProductPlatformUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Uuid,
        platform_id: Uuid,
    ) -> Result<(), AddProductPlatformError>;
}

//
// ──────────────────────────────────────────────────────────
// Get Product Platforms
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductPlatformsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProductPlatformsUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid)
        -> Result<Vec<Platform>, GetProductPlatformsError>;
}

//
// ──────────────────────────────────────────────────────────
// Clear Product Platforms
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClearProductPlatformsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ClearProductPlatformsUseCase: Send + Sync {
    /// Returns the number of platform links removed.
    async fn execute(&self, product_id: Uuid) -> Result<u64, ClearProductPlatformsError>;
}
