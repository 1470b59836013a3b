use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::platform::application::domain::entities::Platform;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "platforms")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub slug: String,

    pub visible: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Platform {
        Platform {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            visible: self.visible,
            display_order: self.display_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::product::adapter::outgoing::sea_orm_entity::product_platforms::Entity"
    )]
    ProductPlatforms,
}

impl Related<crate::modules::product::adapter::outgoing::sea_orm_entity::product_platforms::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ProductPlatforms.def()
    }
}

// Many-to-many: platforms <-> products via product_platforms
impl Related<crate::modules::product::adapter::outgoing::sea_orm_entity::products::Entity>
    for Entity
{
    fn to() -> RelationDef {
        crate::modules::product::adapter::outgoing::sea_orm_entity::product_platforms::Relation::Products
            .def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::modules::product::adapter::outgoing::sea_orm_entity::product_platforms::Relation::Platforms
                .def()
                .rev(),
        )
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

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
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
