use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;

//
// ──────────────────────────────────────────────────────────
// Save Version Command
// ──────────────────────────────────────────────────────────
//

/// Insert-or-update command; `id: None` creates a new version.
#[derive(Debug, Clone)]
pub struct SaveVersionCommand {
    id: Option<Uuid>,
    product_id: Uuid,
    name: String,
    slug: String,
    min_version: f64,
    max_version: f64,
    visible: bool,
    is_default: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveVersionCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Slug cannot be empty")]
    EmptySlug,

    #[error("min_version cannot exceed max_version")]
    InvalidRange,
}

impl SaveVersionCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<Uuid>,
        product_id: Uuid,
        name: String,
        slug: String,
        min_version: f64,
        max_version: f64,
        visible: bool,
        is_default: bool,
    ) -> Result<Self, SaveVersionCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SaveVersionCommandError::EmptyName);
        }

        if slug.trim().is_empty() {
            return Err(SaveVersionCommandError::EmptySlug);
        }

        if min_version > max_version {
            return Err(SaveVersionCommandError::InvalidRange);
        }

        Ok(Self {
            id,
            product_id,
            name: name.to_string(),
            slug,
            min_version,
            max_version,
            visible,
            is_default,
        })
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn min_version(&self) -> f64 {
        self.min_version
    }

    pub fn max_version(&self) -> f64 {
        self.max_version
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveVersionError {
    #[error("Version not found")]
    VersionNotFound,

    #[error("only one version can be default per product")]
    DefaultAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveVersionUseCase: Send + Sync {
    async fn execute(&self, command: SaveVersionCommand) -> Result<Version, SaveVersionError>;
}
