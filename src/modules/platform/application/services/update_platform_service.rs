use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::platform::application::ports::{
    incoming::use_cases::{UpdatePlatformCommand, UpdatePlatformError, UpdatePlatformUseCase},
    outgoing::{PlatformRepository, PlatformRepositoryError, UpdatePlatformData},
};

#[derive(Debug, Clone)]
pub struct UpdatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePlatformUseCase for UpdatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    async fn execute(
        &self,
        platform_id: Uuid,
        command: UpdatePlatformCommand,
    ) -> Result<Platform, UpdatePlatformError> {
        let data = UpdatePlatformData {
            name: command.name,
            slug: command.slug,
            visible: command.visible,
            display_order: command.display_order,
        };

        self.repository
            .update_platform(platform_id, data)
            .await
            .map_err(|e| match e {
                PlatformRepositoryError::PlatformNotFound => UpdatePlatformError::PlatformNotFound,
                other => UpdatePlatformError::RepositoryError(other.to_string()),
            })
    }
}
