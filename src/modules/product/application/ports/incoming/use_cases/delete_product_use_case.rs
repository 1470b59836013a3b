use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete of a product; owned topics, versions and platform links
/// are removed by the storage layer's cascade rules.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<(), DeleteProductError>;
}
