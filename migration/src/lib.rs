pub use sea_orm_migration::prelude::*;

mod m20260810_090100_create_table_products;
mod m20260810_090200_create_table_platforms;
mod m20260810_090300_create_table_product_platforms;
mod m20260810_090400_create_table_topics;
mod m20260810_090500_create_table_versions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_090100_create_table_products::Migration),
            Box::new(m20260810_090200_create_table_platforms::Migration),
            Box::new(m20260810_090300_create_table_product_platforms::Migration),
            Box::new(m20260810_090400_create_table_topics::Migration),
            Box::new(m20260810_090500_create_table_versions::Migration),
        ]
    }
}
