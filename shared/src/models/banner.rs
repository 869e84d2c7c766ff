//! Banner Model

use serde::{Deserialize, Serialize};

/// Home-screen banner entity
///
/// `order` is a dense 1-based rank; across a banner collection the order
/// values are always a permutation of `1..=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub image: String,
    pub order: u32,
    #[serde(default = "default_true")]
    pub active: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create banner payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerCreate {
    pub image: String,
    pub active: Option<bool>,
}

/// Update banner payload (`order` only changes through the move operation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerUpdate {
    pub image: Option<String>,
    pub active: Option<bool>,
}
