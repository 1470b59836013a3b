use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductPlatformRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Platform is already linked to this product")]
    AlreadyLinked,
}

/// Manages the product <-> platform association.
#[async_trait]
pub trait ProductPlatformRepository: Send + Sync {
    async fn add_platform(
        &self,
        product_id: Uuid,
        platform_id: Uuid,
    ) -> Result<(), ProductPlatformRepositoryError>;

    /// Platforms linked to a product, in display order.
    async fn get_platforms(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<Platform>, ProductPlatformRepositoryError>;

    /// Removes every platform link for a product. Returns the number of
    /// links removed.
    async fn clear_platforms(
        &self,
        product_id: Uuid,
    ) -> Result<u64, ProductPlatformRepositoryError>;
}
