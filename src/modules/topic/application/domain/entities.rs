use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AssetConfig;

/// A subject area scoped to exactly one product, optionally nested under
/// a parent topic of the same product. Parent and children are referenced
/// by id only; the hierarchy is resolved through queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub product_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    /// Unique only in combination with the product.
    pub slug: String,
    pub description: String,
    /// Stored path of the uploaded image, if any.
    pub image: Option<String>,
    pub display_order: i32,
    pub visible: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Topic {
    /// URL of the topic image, falling back to the static placeholder
    /// when no image has been uploaded.
    pub fn image_url(&self, assets: &AssetConfig) -> String {
        match &self.image {
            Some(stored_path) => assets.media_file_url(stored_path),
            None => assets.static_img_url("topic_placeholder.png"),
        }
    }
}
