//! Data model for news items loaded from blog.json

use serde::{Deserialize, Serialize};

/// Shown in place of an image reference when an item has none.
pub const PLACEHOLDER_IMAGE: &str = "🗞";

/// One news entry. Field names follow the data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub titulo: String,
    pub extracto: String,
    #[serde(default)]
    pub imagen: Option<String>,
    pub tipo: String,
    #[serde(default)]
    pub destacada: bool,
    pub fecha_inicio: String,
    #[serde(default)]
    pub fecha_fin: Option<String>,
}

impl NewsItem {
    /// Image reference, falling back to the placeholder when absent.
    pub fn image(&self) -> &str {
        self.imagen.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// The blog.json document structure
#[derive(Debug, Deserialize)]
pub struct BlogDocument {
    pub blog: BlogSection,
}

#[derive(Debug, Deserialize)]
pub struct BlogSection {
    pub noticias: Vec<NewsItem>,
}
