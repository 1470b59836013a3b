use std::env;

/// Where product and topic images live, and how their URLs are built.
///
/// Loaded once at startup and passed explicitly into the services that
/// need it; nothing in the crate reads these variables ambiently.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Base URL for bundled static assets (placeholder images).
    pub static_url: String,
    /// Base URL under which uploaded media is served.
    pub media_url: String,
    /// Upload directory for product images, relative to the media root.
    pub product_image_path: String,
    /// Upload directory for topic images, relative to the media root.
    pub topic_image_path: String,
    /// Maximum length of a stored image path.
    pub max_filepath_length: usize,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            static_url: "/static".to_string(),
            media_url: "/media".to_string(),
            product_image_path: "uploads/products".to_string(),
            topic_image_path: "uploads/topics".to_string(),
            max_filepath_length: 250,
        }
    }
}

impl AssetConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_filepath_length = env::var("MAX_FILEPATH_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_filepath_length);

        Self {
            static_url: env::var("STATIC_URL").unwrap_or(defaults.static_url),
            media_url: env::var("MEDIA_URL").unwrap_or(defaults.media_url),
            product_image_path: env::var("PRODUCT_IMAGE_PATH")
                .unwrap_or(defaults.product_image_path),
            topic_image_path: env::var("TOPIC_IMAGE_PATH").unwrap_or(defaults.topic_image_path),
            max_filepath_length,
        }
    }

    /// URL of a bundled static image, e.g. the entity placeholders.
    pub fn static_img_url(&self, filename: &str) -> String {
        format!("{}/img/{}", self.static_url.trim_end_matches('/'), filename)
    }

    /// URL of an uploaded image given its stored path.
    pub fn media_file_url(&self, stored_path: &str) -> String {
        format!(
            "{}/{}",
            self.media_url.trim_end_matches('/'),
            stored_path.trim_start_matches('/')
        )
    }

    /// Stored path for a freshly uploaded product image.
    pub fn product_image_store_path(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.product_image_path.trim_end_matches('/'),
            filename
        )
    }

    /// Stored path for a freshly uploaded topic image.
    pub fn topic_image_store_path(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.topic_image_path.trim_end_matches('/'),
            filename
        )
    }
}
