use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::product::application::domain::entities::Product;
use crate::modules::product::application::ports::outgoing::{ProductQuery, ProductQueryError};

// SeaORM entity
use super::sea_orm_entity::products::{
    Column as ProductColumn, Entity as ProductEntity, Model as ProductModel,
};

#[derive(Debug, Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn get_products(&self) -> Result<Vec<Product>, ProductQueryError> {
        let models: Vec<ProductModel> = ProductEntity::find()
            .order_by_asc(ProductColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find_product(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError> {
        let model = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}
