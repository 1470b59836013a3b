use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;

/// Partial update of an existing topic; `None` fields stay as they are.
/// `parent_id` distinguishes "leave as is" (None) from "detach from
/// parent" (Some(None)) and "move under" (Some(Some(..))).
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicCommand {
    pub parent_id: Option<Option<Uuid>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_filename: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("A topic with this slug already exists for this product")]
    SlugAlreadyExists,

    #[error("Parent topic not found")]
    ParentNotFound,

    #[error("Parent topic belongs to a different product")]
    ParentProductMismatch,

    #[error("A topic cannot be its own parent")]
    SelfParent,

    #[error("Image path exceeds the configured limit of {limit} characters")]
    ImagePathTooLong { limit: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: Uuid,
        command: UpdateTopicCommand,
    ) -> Result<Topic, UpdateTopicError>;
}
