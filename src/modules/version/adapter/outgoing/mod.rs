pub mod sea_orm_entity;
mod version_query_postgres;
mod version_repository_postgres;

pub use version_query_postgres::VersionQueryPostgres;
pub use version_repository_postgres::VersionRepositoryPostgres;
