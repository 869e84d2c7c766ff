//! Kegiatan (Activity) Model

use serde::{Deserialize, Serialize};

/// Activity lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KegiatanStatus {
    /// Upcoming
    Mendatang,
    /// Ongoing
    Berlangsung,
    /// Completed
    Selesai,
}

impl Default for KegiatanStatus {
    fn default() -> Self {
        KegiatanStatus::Mendatang
    }
}

/// Organization activity/event entity
///
/// `date` is a free-form locale-formatted string as entered on the admin
/// screen; it is also the newest-first sort key for listings. Invariant:
/// `participants <= max_participants`, enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kegiatan {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub status: KegiatanStatus,
    pub image: String,
    pub participants: u32,
    pub max_participants: u32,
    pub description: String,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create kegiatan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KegiatanCreate {
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: Option<KegiatanStatus>,
    pub image: String,
    pub max_participants: u32,
    pub description: String,
    pub created_by: String,
}

/// Update kegiatan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KegiatanUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub status: Option<KegiatanStatus>,
    pub image: Option<String>,
    pub participants: Option<u32>,
    pub max_participants: Option<u32>,
    pub description: Option<String>,
}
