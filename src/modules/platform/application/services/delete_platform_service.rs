use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::ports::{
    incoming::use_cases::{DeletePlatformError, DeletePlatformUseCase},
    outgoing::{PlatformRepository, PlatformRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePlatformUseCase for DeletePlatformService<R>
where
    R: PlatformRepository + Send + Sync,
{
    async fn execute(&self, platform_id: Uuid) -> Result<(), DeletePlatformError> {
        self.repository
            .delete_platform(platform_id)
            .await
            .map_err(|e| match e {
                PlatformRepositoryError::PlatformNotFound => DeletePlatformError::PlatformNotFound,
                other => DeletePlatformError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::platform::application::domain::entities::Platform;
    use crate::modules::platform::application::ports::outgoing::{
        CreatePlatformData, UpdatePlatformData,
    };

    #[derive(Debug, Clone)]
    struct MockPlatformRepository {
        result: Result<(), PlatformRepositoryError>,
    }

    #[async_trait]
    impl PlatformRepository for MockPlatformRepository {
        async fn create_platform(
            &self,
            _data: CreatePlatformData,
        ) -> Result<Platform, PlatformRepositoryError> {
            unimplemented!()
        }

        async fn update_platform(
            &self,
            _platform_id: Uuid,
            _data: UpdatePlatformData,
        ) -> Result<Platform, PlatformRepositoryError> {
            unimplemented!()
        }

        async fn delete_platform(
            &self,
            _platform_id: Uuid,
        ) -> Result<(), PlatformRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn delete_platform_success() {
        let repo = MockPlatformRepository { result: Ok(()) };
        let service = DeletePlatformService::new(repo);

        assert!(service.execute(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_platform_not_found_is_mapped() {
        let repo = MockPlatformRepository {
            result: Err(PlatformRepositoryError::PlatformNotFound),
        };
        let service = DeletePlatformService::new(repo);

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeletePlatformError::PlatformNotFound)));
    }
}
