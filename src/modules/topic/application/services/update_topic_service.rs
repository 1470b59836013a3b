use async_trait::async_trait;
use uuid::Uuid;

use crate::config::AssetConfig;
use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError, UpdateTopicData},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R, Q>
where
    R: TopicRepository + Send + Sync,
    Q: TopicQuery + Send + Sync,
{
    repository: R,
    query: Q,
    assets: AssetConfig,
}

impl<R, Q> UpdateTopicService<R, Q>
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
impl<R, Q> UpdateTopicUseCase for UpdateTopicService<R, Q>
where
    R: TopicRepository + Send + Sync,
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        command: UpdateTopicCommand,
    ) -> Result<Topic, UpdateTopicError> {
        // Moving under a new parent requires the parent to exist, belong to
        // the same product, and not be the topic itself.
        if let Some(Some(parent_id)) = command.parent_id {
            if parent_id == topic_id {
                return Err(UpdateTopicError::SelfParent);
            }

            let topic = self
                .query
                .find_topic(topic_id)
                .await
                .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
                .ok_or(UpdateTopicError::TopicNotFound)?;

            let parent = self
                .query
                .find_topic(parent_id)
                .await
                .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
                .ok_or(UpdateTopicError::ParentNotFound)?;

            if parent.product_id != topic.product_id {
                return Err(UpdateTopicError::ParentProductMismatch);
            }
        }

        let image = match command.image_filename {
            Some(Some(filename)) => {
                let stored_path = self.assets.topic_image_store_path(&filename);

                if stored_path.len() > self.assets.max_filepath_length {
                    return Err(UpdateTopicError::ImagePathTooLong {
                        limit: self.assets.max_filepath_length,
                    });
                }

                Some(Some(stored_path))
            }
            Some(None) => Some(None),
            None => None,
        };

        let data = UpdateTopicData {
            parent_id: command.parent_id,
            title: command.title,
            slug: command.slug,
            description: command.description,
            image,
            display_order: command.display_order,
            visible: command.visible,
        };

        self.repository
            .update_topic(topic_id, data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::SlugAlreadyExists => UpdateTopicError::SlugAlreadyExists,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::modules::topic::application::ports::outgoing::{
        CreateTopicData, TopicQueryError,
    };

    struct MockTopicRepository {
        result: Result<Topic, TopicRepositoryError>,
        received: Mutex<Option<UpdateTopicData>>,
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
            _data: CreateTopicData,
        ) -> Result<Topic, TopicRepositoryError> {
            unimplemented!()
        }

        async fn update_topic(
            &self,
            _topic_id: Uuid,
            data: UpdateTopicData,
        ) -> Result<Topic, TopicRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn delete_topic(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
            unimplemented!()
        }
    }

    struct MockTopicQuery {
        topics: Vec<Topic>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn get_topics(&self, _product_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
            unimplemented!()
        }

        async fn get_subtopics(&self, _parent_id: Uuid) -> Result<Vec<Topic>, TopicQueryError> {
            unimplemented!()
        }

        async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
            Ok(self.topics.iter().find(|t| t.id == topic_id).cloned())
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

    #[tokio::test]
    async fn update_topic_title_only() {
        let product_id = Uuid::new_v4();
        let topic = sample_topic(product_id);
        let service = UpdateTopicService::new(
            MockTopicRepository::success(topic.clone()),
            MockTopicQuery { topics: vec![] },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            title: Some("Setup".to_string()),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(topic.id, command).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        let received = service
            .repository
            .received
            .lock()
            .unwrap()
            .clone()
            .expect("repository was not called");
        assert_eq!(received.title.as_deref(), Some("Setup"));
        assert!(received.slug.is_none());
    }

    #[tokio::test]
    async fn update_topic_rejects_self_parent() {
        let product_id = Uuid::new_v4();
        let topic = sample_topic(product_id);
        let service = UpdateTopicService::new(
            MockTopicRepository::success(topic.clone()),
            MockTopicQuery {
                topics: vec![topic.clone()],
            },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            parent_id: Some(Some(topic.id)),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(topic.id, command).await;

        assert!(matches!(result, Err(UpdateTopicError::SelfParent)));
    }

    #[tokio::test]
    async fn update_topic_rejects_parent_of_other_product() {
        let topic = sample_topic(Uuid::new_v4());
        let foreign_parent = sample_topic(Uuid::new_v4());
        let parent_id = foreign_parent.id;
        let service = UpdateTopicService::new(
            MockTopicRepository::success(topic.clone()),
            MockTopicQuery {
                topics: vec![topic.clone(), foreign_parent],
            },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            parent_id: Some(Some(parent_id)),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(topic.id, command).await;

        assert!(matches!(
            result,
            Err(UpdateTopicError::ParentProductMismatch)
        ));
    }

    #[tokio::test]
    async fn update_topic_detaches_parent_without_lookup() {
        let product_id = Uuid::new_v4();
        let topic = sample_topic(product_id);
        let service = UpdateTopicService::new(
            MockTopicRepository::success(topic.clone()),
            MockTopicQuery { topics: vec![] },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            parent_id: Some(None),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(topic.id, command).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        let received = service
            .repository
            .received
            .lock()
            .unwrap()
            .clone()
            .expect("repository was not called");
        assert_eq!(received.parent_id, Some(None));
    }

    #[tokio::test]
    async fn update_topic_replaces_image_under_configured_dir() {
        let product_id = Uuid::new_v4();
        let topic = sample_topic(product_id);
        let service = UpdateTopicService::new(
            MockTopicRepository::success(topic.clone()),
            MockTopicQuery { topics: vec![] },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            image_filename: Some(Some("new.png".to_string())),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(topic.id, command).await;

        assert!(result.is_ok());
        let received = service
            .repository
            .received
            .lock()
            .unwrap()
            .clone()
            .expect("repository was not called");
        assert_eq!(
            received.image,
            Some(Some("uploads/topics/new.png".to_string()))
        );
    }

    #[tokio::test]
    async fn update_topic_not_found_is_mapped() {
        let service = UpdateTopicService::new(
            MockTopicRepository::failing(TopicRepositoryError::TopicNotFound),
            MockTopicQuery { topics: vec![] },
            AssetConfig::default(),
        );

        let result = service
            .execute(Uuid::new_v4(), UpdateTopicCommand::default())
            .await;

        assert!(matches!(result, Err(UpdateTopicError::TopicNotFound)));
    }

    #[tokio::test]
    async fn update_topic_duplicate_slug_is_mapped() {
        let service = UpdateTopicService::new(
            MockTopicRepository::failing(TopicRepositoryError::SlugAlreadyExists),
            MockTopicQuery { topics: vec![] },
            AssetConfig::default(),
        );

        let command = UpdateTopicCommand {
            slug: Some("taken".to_string()),
            ..UpdateTopicCommand::default()
        };

        let result = service.execute(Uuid::new_v4(), command).await;

        assert!(matches!(result, Err(UpdateTopicError::SlugAlreadyExists)));
    }
}
