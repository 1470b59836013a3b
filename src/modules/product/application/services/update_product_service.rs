use async_trait::async_trait;
use uuid::Uuid;

use crate::config::AssetConfig;
use crate::modules::product::application::domain::entities::Product;
use crate::modules::product::application::ports::{
    incoming::use_cases::{UpdateProductCommand, UpdateProductError, UpdateProductUseCase},
    outgoing::{ProductRepository, ProductRepositoryError, UpdateProductData},
};

#[derive(Debug, Clone)]
pub struct UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    repository: R,
    assets: AssetConfig,
}

impl<R> UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    pub fn new(repository: R, assets: AssetConfig) -> Self {
        Self { repository, assets }
    }
}

#[async_trait]
impl<R> UpdateProductUseCase for UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        product_id: Uuid,
        command: UpdateProductCommand,
    ) -> Result<Product, UpdateProductError> {
        let image = match command.image_filename {
            Some(Some(filename)) => {
                let stored_path = self.assets.product_image_store_path(&filename);

                if stored_path.len() > self.assets.max_filepath_length {
                    return Err(UpdateProductError::ImagePathTooLong {
                        limit: self.assets.max_filepath_length,
                    });
                }

                Some(Some(stored_path))
            }
            Some(None) => Some(None),
            None => None,
        };

        let data = UpdateProductData {
            title: command.title,
            slug: command.slug,
            description: command.description,
            image,
            display_order: command.display_order,
            visible: command.visible,
        };

        self.repository
            .update_product(product_id, data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}
