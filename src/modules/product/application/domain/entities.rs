use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AssetConfig;

/// A supported software product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    /// URL-safe identifier; not guaranteed unique at this layer.
    pub slug: String,
    pub description: String,
    /// Stored path of the uploaded image, if any.
    pub image: Option<String>,
    pub display_order: i32,
    pub visible: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Product {
    /// URL of the product image, falling back to the static placeholder
    /// when no image has been uploaded.
    pub fn image_url(&self, assets: &AssetConfig) -> String {
        match &self.image {
            Some(stored_path) => assets.media_file_url(stored_path),
            None => assets.static_img_url("product_placeholder.png"),
        }
    }
}
