use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    product_id: Uuid,
    parent_id: Option<Uuid>,
    title: String,
    slug: String,
    description: String,
    image_filename: Option<String>,
    display_order: i32,
    visible: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Slug cannot be empty")]
    EmptySlug,
}

impl CreateTopicCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: Uuid,
        parent_id: Option<Uuid>,
        title: String,
        slug: String,
        description: String,
        image_filename: Option<String>,
        display_order: i32,
        visible: bool,
    ) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }

        if title.len() > 255 {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        if slug.trim().is_empty() {
            return Err(CreateTopicCommandError::EmptySlug);
        }

        Ok(Self {
            product_id,
            parent_id,
            title: title.to_string(),
            slug,
            description,
            image_filename,
            display_order,
            visible,
        })
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_filename(&self) -> Option<&String> {
        self.image_filename.as_ref()
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("A topic with this slug already exists for this product")]
    SlugAlreadyExists,

    #[error("Parent topic not found")]
    ParentNotFound,

    #[error("Parent topic belongs to a different product")]
    ParentProductMismatch,

    #[error("Image path exceeds the configured limit of {limit} characters")]
    ImagePathTooLong { limit: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
