use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::domain::entities::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// All products in canonical display order (display_order ascending).
    async fn get_products(&self) -> Result<Vec<Product>, ProductQueryError>;

    async fn find_product(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError>;
}
