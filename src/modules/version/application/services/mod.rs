mod delete_version_service;
mod get_versions_service;
mod save_version_service;

pub use delete_version_service::DeleteVersionService;
pub use get_versions_service::GetVersionsService;
pub use save_version_service::SaveVersionService;
