use async_trait::async_trait;

use crate::modules::platform::application::ports::{
    incoming::use_cases::{CreatePlatformCommand, CreatePlatformError, CreatePlatformUseCase},
    outgoing::{CreatePlatformData, PlatformRepository},
};

use crate::modules::platform::application::domain::entities::Platform;

#[derive(Debug, Clone)]
pub struct CreatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePlatformUseCase for CreatePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePlatformCommand,
    ) -> Result<Platform, CreatePlatformError> {
        let data = CreatePlatformData {
            name: command.name().to_string(),
            slug: command.slug().to_string(),
            visible: command.visible(),
            display_order: command.display_order(),
        };

        self.repository
            .create_platform(data)
            .await
            .map_err(|e| CreatePlatformError::RepositoryError(e.to_string()))
    }
}
