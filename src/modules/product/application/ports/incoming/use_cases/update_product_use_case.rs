use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::entities::Product;

/// Partial update of an existing product; `None` fields stay as they are.
/// `image_filename` distinguishes "leave as is" (None) from "replace with
/// this upload" (Some(Some(..))) and "remove" (Some(None)).
#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_filename: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Image path exceeds the configured limit of {limit} characters")]
    ImagePathTooLong { limit: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Uuid,
        command: UpdateProductCommand,
    ) -> Result<Product, UpdateProductError>;
}
