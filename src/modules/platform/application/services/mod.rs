mod create_platform_service;
mod delete_platform_service;
mod get_platforms_service;
mod update_platform_service;

pub use create_platform_service::CreatePlatformService;
pub use delete_platform_service::DeletePlatformService;
pub use get_platforms_service::GetPlatformsService;
pub use update_platform_service::UpdatePlatformService;
