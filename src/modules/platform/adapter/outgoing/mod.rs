pub mod sea_orm_entity;
mod platform_query_postgres;
mod platform_repository_postgres;

pub use platform_query_postgres::PlatformQueryPostgres;
pub use platform_repository_postgres::PlatformRepositoryPostgres;
