use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::product::application::domain::entities::Product;
use crate::modules::product::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};

// SeaORM entity imports
use super::sea_orm_entity::products::{
    ActiveModel as ProductActiveModel, Entity as ProductEntity, Model as ProductModel,
};

#[derive(Debug, Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_err(e: DbErr) -> ProductRepositoryError {
        match e {
            DbErr::RecordNotUpdated => ProductRepositoryError::ProductNotFound,
            other => ProductRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            image: Set(data.image),
            display_order: Set(data.display_order),
            visible: Set(data.visible),
            ..Default::default()
        };

        let inserted: ProductModel = active.insert(&*self.db).await.map_err(Self::map_err)?;

        Ok(inserted.to_domain())
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let mut active = ProductActiveModel {
            id: Set(product_id),
            ..Default::default()
        };

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(slug) = data.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(image) = data.image {
            active.image = Set(image);
        }
        if let Some(display_order) = data.display_order {
            active.display_order = Set(display_order);
        }
        if let Some(visible) = data.visible {
            active.visible = Set(visible);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = ProductEntity::delete_by_id(product_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::ProductNotFound);
        }

        Ok(())
    }
}
