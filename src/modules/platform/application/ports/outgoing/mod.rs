mod platform_query;
mod platform_repository;

pub use platform_query::{PlatformQuery, PlatformQueryError};
pub use platform_repository::{
    CreatePlatformData, PlatformRepository, PlatformRepositoryError, UpdatePlatformData,
};
