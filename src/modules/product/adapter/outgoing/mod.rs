pub mod sea_orm_entity;
mod product_platform_repository_postgres;
mod product_query_postgres;
mod product_repository_postgres;

pub use product_platform_repository_postgres::ProductPlatformRepositoryPostgres;
pub use product_query_postgres::ProductQueryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;
