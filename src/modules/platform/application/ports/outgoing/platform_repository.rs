use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;

// Input DTO for creating a platform
#[derive(Debug, Clone)]
pub struct CreatePlatformData {
    pub name: String,
    pub slug: String,
    pub visible: bool,
    pub display_order: i32,
}

// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdatePlatformData {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub visible: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlatformRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Platform not found")]
    PlatformNotFound,
}

#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn create_platform(
        &self,
        data: CreatePlatformData,
    ) -> Result<Platform, PlatformRepositoryError>;

    async fn update_platform(
        &self,
        platform_id: Uuid,
        data: UpdatePlatformData,
    ) -> Result<Platform, PlatformRepositoryError>;

    async fn delete_platform(&self, platform_id: Uuid) -> Result<(), PlatformRepositoryError>;
}
