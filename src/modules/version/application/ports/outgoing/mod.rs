mod version_query;
mod version_repository;

pub use version_query::{VersionQuery, VersionQueryError};
pub use version_repository::{SaveVersionData, VersionRepository, VersionRepositoryError};
