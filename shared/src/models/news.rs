//! News Model

use serde::{Deserialize, Serialize};

/// News rubric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    /// Announcement
    Pengumuman,
    /// News report
    Berita,
    /// General info
    Info,
}

/// News article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub category: NewsCategory,
    pub author: String,
    pub published_at: i64,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub featured: bool,
}

/// Create news payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsCreate {
    pub title: String,
    pub content: String,
    pub image: String,
    pub category: NewsCategory,
    pub author: String,
    pub featured: Option<bool>,
}

/// Update news payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<NewsCategory>,
    pub author: Option<String>,
    pub featured: Option<bool>,
}
