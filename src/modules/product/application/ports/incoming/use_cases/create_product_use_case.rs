use async_trait::async_trait;

use crate::modules::product::application::domain::entities::Product;

//
// ──────────────────────────────────────────────────────────
// Create Product Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    title: String,
    slug: String,
    description: String,
    image_filename: Option<String>,
    display_order: i32,
    visible: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProductCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Slug cannot be empty")]
    EmptySlug,
}

impl CreateProductCommand {
    pub fn new(
        title: String,
        slug: String,
        description: String,
        image_filename: Option<String>,
        display_order: i32,
        visible: bool,
    ) -> Result<Self, CreateProductCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateProductCommandError::EmptyTitle);
        }

        if title.len() > 255 {
            return Err(CreateProductCommandError::TitleTooLong);
        }

        if slug.trim().is_empty() {
            return Err(CreateProductCommandError::EmptySlug);
        }

        Ok(Self {
            title: title.to_string(),
            slug,
            description,
            image_filename,
            display_order,
            visible,
        })
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
pub enum CreateProductError {
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
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError>;
}
