use async_trait::async_trait;

use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::platform::application::ports::{
    incoming::use_cases::{GetPlatformsError, GetPlatformsUseCase},
    outgoing::PlatformQuery,
};

#[derive(Debug, Clone)]
pub struct GetPlatformsService<Q>
where
    Q: PlatformQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPlatformsService<Q>
where
    Q: PlatformQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPlatformsUseCase for GetPlatformsService<Q>
where
    Q: PlatformQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Platform>, GetPlatformsError> {
        self.query
            .get_platforms()
            .await
            .map_err(|e| GetPlatformsError::QueryFailed(e.to_string()))
    }
}
