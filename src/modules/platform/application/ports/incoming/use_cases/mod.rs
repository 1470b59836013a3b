mod create_platform_use_case;
mod delete_platform_use_case;
mod get_platforms_use_case;
mod update_platform_use_case;

pub use create_platform_use_case::{
    CreatePlatformCommand, CreatePlatformCommandError, CreatePlatformError, CreatePlatformUseCase,
};
pub use delete_platform_use_case::{DeletePlatformError, DeletePlatformUseCase};
pub use get_platforms_use_case::{GetPlatformsError, GetPlatformsUseCase};
pub use update_platform_use_case::{
    UpdatePlatformCommand, UpdatePlatformError, UpdatePlatformUseCase,
};
