use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::product::application::ports::{
    incoming::use_cases::{
        AddProductPlatformError, AddProductPlatformUseCase, ClearProductPlatformsError,
        ClearProductPlatformsUseCase, GetProductPlatformsError, GetProductPlatformsUseCase,
    },
    outgoing::{ProductPlatformRepository, ProductPlatformRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AddProductPlatformService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddProductPlatformService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddProductPlatformUseCase for AddProductPlatformService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    async fn execute(
        &self,
        product_id: Uuid,
        platform_id: Uuid,
    ) -> Result<(), AddProductPlatformError> {
        self.repository
            .add_platform(product_id, platform_id)
            .await
            .map_err(|e| match e {
                ProductPlatformRepositoryError::AlreadyLinked => {
                    AddProductPlatformError::AlreadyLinked
                }
                other => AddProductPlatformError::RepositoryError(other.to_string()),
            })
    }
}

#[derive(Debug, Clone)]
pub struct GetProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProductPlatformsUseCase for GetProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    async fn execute(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<Platform>, GetProductPlatformsError> {
        self.repository
            .get_platforms(product_id)
            .await
            .map_err(|e| GetProductPlatformsError::QueryFailed(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ClearProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    repository: R,
}

impl<R> ClearProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ClearProductPlatformsUseCase for ClearProductPlatformsService<R>
where
    R: ProductPlatformRepository + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<u64, ClearProductPlatformsError> {
        self.repository
            .clear_platforms(product_id)
            .await
            .map_err(|e| ClearProductPlatformsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, Clone)]
    struct MockLinkRepository {
        add_result: Result<(), ProductPlatformRepositoryError>,
        platforms: Vec<Platform>,
        cleared: u64,
    }

    impl Default for MockLinkRepository {
        fn default() -> Self {
            Self {
                add_result: Ok(()),
                platforms: vec![],
                cleared: 0,
            }
        }
    }

    #[async_trait]
    impl ProductPlatformRepository for MockLinkRepository {
        async fn add_platform(
            &self,
            _product_id: Uuid,
            _platform_id: Uuid,
        ) -> Result<(), ProductPlatformRepositoryError> {
            self.add_result.clone()
        }

        async fn get_platforms(
            &self,
            _product_id: Uuid,
        ) -> Result<Vec<Platform>, ProductPlatformRepositoryError> {
            Ok(self.platforms.clone())
        }

        async fn clear_platforms(
            &self,
            _product_id: Uuid,
        ) -> Result<u64, ProductPlatformRepositoryError> {
            Ok(self.cleared)
        }
    }

    fn platform(name: &str, display_order: i32) -> Platform {
        Platform {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            visible: true,
            display_order,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn add_platform_duplicate_link_is_mapped() {
        let repo = MockLinkRepository {
            add_result: Err(ProductPlatformRepositoryError::AlreadyLinked),
            ..Default::default()
        };
        let service = AddProductPlatformService::new(repo);

        let result = service.execute(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(AddProductPlatformError::AlreadyLinked)));
    }

    #[tokio::test]
    async fn add_platform_success() {
        let service = AddProductPlatformService::new(MockLinkRepository::default());

        assert!(service
            .execute(Uuid::new_v4(), Uuid::new_v4())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn get_platforms_returns_linked_platforms() {
        let repo = MockLinkRepository {
            platforms: vec![platform("Windows", 1), platform("Linux", 2)],
            ..Default::default()
        };
        let service = GetProductPlatformsService::new(repo);

        let result = service.execute(Uuid::new_v4()).await;

        assert!(result.is_ok());
        let platforms = result.unwrap();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].name, "Windows");
    }

    #[tokio::test]
    async fn clear_platforms_reports_removed_count() {
        let repo = MockLinkRepository {
            cleared: 3,
            ..Default::default()
        };
        let service = ClearProductPlatformsService::new(repo);

        let result = service.execute(Uuid::new_v4()).await;

        assert_eq!(result.unwrap(), 3);
    }
}
