use async_trait::async_trait;

use crate::config::AssetConfig;
use crate::modules::product::application::domain::entities::Product;
use crate::modules::product::application::ports::{
    incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
    outgoing::{CreateProductData, ProductRepository},
};

#[derive(Debug, Clone)]
pub struct CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    repository: R,
    assets: AssetConfig,
}

impl<R> CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    pub fn new(repository: R, assets: AssetConfig) -> Self {
        Self { repository, assets }
    }
}

#[async_trait]
impl<R> CreateProductUseCase for CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError> {
        let image = match command.image_filename() {
            Some(filename) => {
                let stored_path = self.assets.product_image_store_path(filename);

                if stored_path.len() > self.assets.max_filepath_length {
                    return Err(CreateProductError::ImagePathTooLong {
                        limit: self.assets.max_filepath_length,
                    });
                }

                Some(stored_path)
            }
            None => None,
        };

        let data = CreateProductData {
            title: command.title().to_string(),
            slug: command.slug().to_string(),
            description: command.description().to_string(),
            image,
            display_order: command.display_order(),
            visible: command.visible(),
        };

        self.repository
            .create_product(data)
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))
    }
}
