use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::entities::Product;

// Input DTO for creating a product
#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Stored path of an already-uploaded image, if any.
    pub image: Option<String>,
    pub display_order: i32,
    pub visible: bool,
}

// Partial update; `None` fields are left untouched.
// `image` distinguishes "leave as is" (None) from "replace" (Some).
#[derive(Debug, Clone, Default)]
pub struct UpdateProductData {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Product not found")]
    ProductNotFound,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    /// Hard delete; topics, versions and platform links cascade at the
    /// storage layer.
    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;
}
