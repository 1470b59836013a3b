use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::product::application::domain::entities::Product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Stored path of the uploaded image; resolution to a URL happens in
    // the domain layer
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    pub display_order: i32,

    pub visible: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Product {
        Product {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            display_order: self.display_order,
            visible: self.visible,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_platforms::Entity")]
    ProductPlatforms,

    #[sea_orm(has_many = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity")]
    Topics,

    #[sea_orm(has_many = "crate::modules::version::adapter::outgoing::sea_orm_entity::Entity")]
    Versions,
}

impl Related<super::product_platforms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductPlatforms.def()
    }
}

impl Related<crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl Related<crate::modules::version::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Versions.def()
    }
}

// Many-to-many: products <-> platforms via product_platforms
impl Related<crate::modules::platform::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_platforms::Relation::Platforms.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_platforms::Relation::Products.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
