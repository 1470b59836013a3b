use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;
use crate::modules::version::application::ports::{
    incoming::use_cases::{GetDefaultVersionUseCase, GetVersionsError, GetVersionsUseCase},
    outgoing::VersionQuery,
};

#[derive(Debug, Clone)]
pub struct GetVersionsService<Q>
where
    Q: VersionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetVersionsService<Q>
where
    Q: VersionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVersionsUseCase for GetVersionsService<Q>
where
    Q: VersionQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Version>, GetVersionsError> {
        self.query
            .get_versions(product_id)
            .await
            .map_err(|e| GetVersionsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetDefaultVersionUseCase for GetVersionsService<Q>
where
    Q: VersionQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Option<Version>, GetVersionsError> {
        self.query
            .get_default_version(product_id)
            .await
            .map_err(|e| GetVersionsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::version::application::ports::outgoing::VersionQueryError;

    struct MockVersionQuery {
        versions: Result<Vec<Version>, VersionQueryError>,
        default_version: Result<Option<Version>, VersionQueryError>,
    }

    #[async_trait]
    impl VersionQuery for MockVersionQuery {
        async fn get_versions(&self, _product_id: Uuid) -> Result<Vec<Version>, VersionQueryError> {
            self.versions.clone()
        }

        async fn get_default_version(
            &self,
            _product_id: Uuid,
        ) -> Result<Option<Version>, VersionQueryError> {
            self.default_version.clone()
        }
    }

    fn sample_version(name: &str, max_version: f64, is_default: bool) -> Version {
        Version {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            min_version: max_version - 0.9,
            max_version,
            visible: true,
            is_default,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_versions_passes_rows_through() {
        let query = MockVersionQuery {
            versions: Ok(vec![
                sample_version("116", 116.9, false),
                sample_version("115", 115.9, true),
            ]),
            default_version: Ok(None),
        };
        let service = GetVersionsService::new(query);

        let result = GetVersionsUseCase::execute(&service, Uuid::new_v4()).await;

        let versions = result.expect("Expected success");
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].name, "116");
    }

    #[tokio::test]
    async fn get_default_version_passes_row_through() {
        let default = sample_version("115", 115.9, true);
        let query = MockVersionQuery {
            versions: Ok(vec![]),
            default_version: Ok(Some(default.clone())),
        };
        let service = GetVersionsService::new(query);

        let result = GetDefaultVersionUseCase::execute(&service, Uuid::new_v4()).await;

        let version = result.expect("Expected success");
        assert_eq!(version, Some(default));
    }

    #[tokio::test]
    async fn get_versions_query_error_is_mapped() {
        let query = MockVersionQuery {
            versions: Err(VersionQueryError::DatabaseError("timeout".to_string())),
            default_version: Ok(None),
        };
        let service = GetVersionsService::new(query);

        let result = GetVersionsUseCase::execute(&service, Uuid::new_v4()).await;

        match result {
            Err(GetVersionsError::QueryFailed(msg)) => assert!(msg.contains("timeout")),
            other => panic!("Expected QueryFailed, got {:?}", other),
        }
    }
}
