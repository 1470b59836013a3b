use async_trait::async_trait;

use crate::config::AssetConfig;
use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R, Q>
where
    R: TopicRepository + Send + Sync,
    Q: TopicQuery + Send + Sync,
{
    repository: R,
    query: Q,
    assets: AssetConfig,
}

impl<R, Q> CreateTopicService<R, Q>
where
    R: TopicRepository + Send + Sync,
    Q: TopicQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, assets: AssetConfig) -> Self {
        Self {
            repository,
            query,
            assets,
        }
    }
}

#[async_trait]
impl<R, Q> CreateTopicUseCase for CreateTopicService<R, Q>
where
    R: TopicRepository + Send + Sync,
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        // A parent must exist and belong to the same product.
        if let Some(parent_id) = command.parent_id() {
            let parent = self
                .query
                .find_topic(parent_id)
                .await
                .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
                .ok_or(CreateTopicError::ParentNotFound)?;

            if parent.product_id != command.product_id() {
                return Err(CreateTopicError::ParentProductMismatch);
            }
        }

        let image = match command.image_filename() {
            Some(filename) => {
                let stored_path = self.assets.topic_image_store_path(filename);

                if stored_path.len() > self.assets.max_filepath_length {
                    return Err(CreateTopicError::ImagePathTooLong {
                        limit: self.assets.max_filepath_length,
                    });
                }

                Some(stored_path)
            }
            None => None,
        };

        let data = CreateTopicData {
            product_id: command.product_id(),
            parent_id: command.parent_id(),
            title: command.title().to_string(),
            slug: command.slug().to_string(),
            description: command.description().to_string(),
            image,
            display_order: command.display_order(),
            visible: command.visible(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::SlugAlreadyExists => CreateTopicError::SlugAlreadyExists,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::modules::topic::application::ports::outgoing::{
        TopicQueryError, UpdateTopicData,
    };

    struct MockTopicRepository {
        result: Result<Topic, TopicRepositoryError>,
        received: Mutex<Option<CreateTopicData>>,
    }

    impl MockTopicRepository {
        fn success(topic: Topic) -> Self {
            Self {
                result: Ok(topic),
                received: Mutex::new(None),
            }
        }

        fn failing(error: TopicRepositoryError) -> Self {
            Self {
                result: Err(error),
                received: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TopicRepository for MockTopicRepository {
        async fn create_topic(
            &self,
            data: CreateTopicData,
        ) -> Result<Topic, TopicRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn update_topic(
            &self,
            _topic_id: Uuid,
            _data: UpdateTopicData,
        ) -> Result<Topic, TopicRepositoryError> {
            unimplemented!()
        }

        async fn delete_topic(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
            unimplemented!()
        }
    }

    struct MockTopicQuery {
        parent: Option<Topic>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn get_topics(&self, _product_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
            unimplemented!()
        }

        async fn get_subtopics(&self, _parent_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
            unimplemented!()
        }

        async fn find_topic(&self, _topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
            Ok(self.parent.clone())
        }
    }

    fn sample_topic(product_id: Uuid) -> Topic {
        Topic {
            id: Uuid::new_v4(),
            product_id,
            parent_id: None,
            title: "Installation".to_string(),
            slug: "install".to_string(),
            description: "How to install".to_string(),
            image: None,
            display_order: 1,
            visible: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn command(product_id: Uuid, parent_id: Option<Uuid>) -> CreateTopicCommand {
        CreateTopicCommand::new(
            product_id,
            parent_id,
            "Installation".to_string(),
            "install".to_string(),
            "How to install".to_string(),
            None,
            1,
            true,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_topic_success_without_parent() {
        let product_id = Uuid::new_v4();
        let expected = sample_topic(product_id);
        let service = CreateTopicService::new(
            MockTopicRepository::success(expected.clone()),
            MockTopicQuery { parent: None },
            AssetConfig::default(),
        );

        let result = service.execute(command(product_id, None)).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        assert_eq!(result.unwrap().id, expected.id);
    }

    #[tokio::test]
    async fn create_topic_rejects_missing_parent() {
        let product_id = Uuid::new_v4();
        let service = CreateTopicService::new(
            MockTopicRepository::success(sample_topic(product_id)),
            MockTopicQuery { parent: None },
            AssetConfig::default(),
        );

        let result = service
            .execute(command(product_id, Some(Uuid::new_v4())))
            .await;

        assert!(matches!(result, Err(CreateTopicError::ParentNotFound)));
        assert!(service.repository.received.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn create_topic_rejects_parent_of_other_product() {
        let product_id = Uuid::new_v4();
        let parent = sample_topic(Uuid::new_v4());
        let parent_id = parent.id;
        let service = CreateTopicService::new(
            MockTopicRepository::success(sample_topic(product_id)),
            MockTopicQuery {
                parent: Some(parent),
            },
            AssetConfig::default(),
        );

        let result = service.execute(command(product_id, Some(parent_id))).await;

        assert!(matches!(
            result,
            Err(CreateTopicError::ParentProductMismatch)
        ));
    }

    #[tokio::test]
    async fn create_topic_accepts_parent_of_same_product() {
        let product_id = Uuid::new_v4();
        let parent = sample_topic(product_id);
        let parent_id = parent.id;
        let expected = sample_topic(product_id);
        let service = CreateTopicService::new(
            MockTopicRepository::success(expected),
            MockTopicQuery {
                parent: Some(parent),
            },
            AssetConfig::default(),
        );

        let result = service.execute(command(product_id, Some(parent_id))).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        let received = service
            .repository
            .received
            .lock()
            .unwrap()
            .clone()
            .expect("repository was not called");
        assert_eq!(received.parent_id, Some(parent_id));
    }

    #[tokio::test]
    async fn create_topic_stores_image_under_configured_dir() {
        let product_id = Uuid::new_v4();
        let service = CreateTopicService::new(
            MockTopicRepository::success(sample_topic(product_id)),
            MockTopicQuery { parent: None },
            AssetConfig::default(),
        );

        let command = CreateTopicCommand::new(
            product_id,
            None,
            "Installation".to_string(),
            "install".to_string(),
            "How to install".to_string(),
            Some("install.png".to_string()),
            1,
            true,
        )
        .unwrap();

        let result = service.execute(command).await;
        assert!(result.is_ok());

        let received = service
            .repository
            .received
            .lock()
            .unwrap()
            .clone()
            .expect("repository was not called");
        assert_eq!(received.image.as_deref(), Some("uploads/topics/install.png"));
    }

    #[tokio::test]
    async fn create_topic_rejects_too_long_image_path() {
        let product_id = Uuid::new_v4();
        let assets = AssetConfig {
            max_filepath_length: 20,
            ..AssetConfig::default()
        };
        let service = CreateTopicService::new(
            MockTopicRepository::success(sample_topic(product_id)),
            MockTopicQuery { parent: None },
            assets,
        );

        let command = CreateTopicCommand::new(
            product_id,
            None,
            "Installation".to_string(),
            "install".to_string(),
            "How to install".to_string(),
            Some("a-rather-long-filename.png".to_string()),
            1,
            true,
        )
        .unwrap();

        let result = service.execute(command).await;

        assert!(matches!(
            result,
            Err(CreateTopicError::ImagePathTooLong { limit: 20 })
        ));
    }

    #[tokio::test]
    async fn create_topic_duplicate_slug_is_mapped() {
        let product_id = Uuid::new_v4();
        let service = CreateTopicService::new(
            MockTopicRepository::failing(TopicRepositoryError::SlugAlreadyExists),
            MockTopicQuery { parent: None },
            AssetConfig::default(),
        );

        let result = service.execute(command(product_id, None)).await;

        assert!(matches!(result, Err(CreateTopicError::SlugAlreadyExists)));
    }
}
