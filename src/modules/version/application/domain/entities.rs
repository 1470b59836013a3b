use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A release range of a product, e.g. Firefox 115–120. At most one
/// version per product carries `is_default`; that one is pre-selected
/// in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub slug: String,
    pub min_version: f64,
    pub max_version: f64,
    pub visible: bool,
    pub is_default: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
