//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category
///
/// The backend stores the category as a free string; unknown values
/// fold into `Other` so new server-side categories do not break parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Gujarati,
    Punjabi,
    #[serde(rename = "South Indian")]
    SouthIndian,
    Chinese,
    Snacks,
    #[serde(other)]
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gujarati => "Gujarati",
            Category::Punjabi => "Punjabi",
            Category::SouthIndian => "South Indian",
            Category::Chinese => "Chinese",
            Category::Snacks => "Snacks",
            Category::Other => "Other",
        }
    }

    /// All known categories, in menu display order.
    pub const ALL: [Category; 6] = [
        Category::Gujarati,
        Category::Punjabi,
        Category::SouthIndian,
        Category::Chinese,
        Category::Snacks,
        Category::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu item entity
///
/// `id` is immutable and unique within the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Positive price in rupees
    pub price: f64,
    pub category: Category,
    pub available: bool,
    /// Absolute URL or server-relative path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItem {
    /// Resolve the image reference against the server origin.
    ///
    /// Absolute URLs pass through; relative paths are joined to `origin`.
    pub fn image_url(&self, origin: &str) -> Option<String> {
        let image = self.image.as_deref()?;
        if image.starts_with("http://") || image.starts_with("https://") {
            Some(image.to_string())
        } else {
            Some(format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                image.trim_start_matches('/')
            ))
        }
    }
}

/// Binary image attached to a create/update payload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Create menu item payload (sent as multipart)
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Category,
    pub available: bool,
    pub image: Option<ImageUpload>,
}

/// Update menu item payload (sent as multipart, partial replace)
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub available: Option<bool>,
    pub image: Option<ImageUpload>,
}
