use async_trait::async_trait;

use crate::modules::product::application::domain::entities::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    /// Returns all products ordered by display_order ascending.
    async fn execute(&self) -> Result<Vec<Product>, GetProductsError>;
}
