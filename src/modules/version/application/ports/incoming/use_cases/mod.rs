mod delete_version_use_case;
mod get_versions_use_case;
mod save_version_use_case;

pub use delete_version_use_case::{DeleteVersionError, DeleteVersionUseCase};
pub use get_versions_use_case::{
    GetDefaultVersionUseCase, GetVersionsError, GetVersionsUseCase,
};
pub use save_version_use_case::{
    SaveVersionCommand, SaveVersionCommandError, SaveVersionError, SaveVersionUseCase,
};
