use async_trait::async_trait;

use crate::modules::platform::application::domain::entities::Platform;

//
// ──────────────────────────────────────────────────────────
// Create Platform Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePlatformCommand {
    name: String,
    slug: String,
    visible: bool,
    display_order: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePlatformCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Slug cannot be empty")]
    EmptySlug,
}

impl CreatePlatformCommand {
    pub fn new(
        name: String,
        slug: String,
        visible: bool,
        display_order: i32,
    ) -> Result<Self, CreatePlatformCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreatePlatformCommandError::EmptyName);
        }

        if name.len() > 255 {
            return Err(CreatePlatformCommandError::NameTooLong);
        }

        if slug.trim().is_empty() {
            return Err(CreatePlatformCommandError::EmptySlug);
        }

        Ok(Self {
            name: name.to_string(),
            slug,
            visible,
            display_order,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePlatformError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePlatformUseCase: Send + Sync {
    async fn execute(&self, command: CreatePlatformCommand)
        -> Result<Platform, CreatePlatformError>;
}
