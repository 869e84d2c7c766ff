//! Organization Member Model

use serde::{Deserialize, Serialize};

/// Organization roster entry (pengurus himpunan)
///
/// `order` is a dense 1-based rank controlling display sequence on the
/// structure screen, maintained the same way as banner ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub division: String,
    pub photo: String,
    pub email: String,
    pub nim: String,
    pub phone: String,
    pub order: u32,
}

/// Create organization member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMemberCreate {
    pub name: String,
    pub position: String,
    pub division: String,
    pub photo: String,
    pub email: String,
    pub nim: String,
    pub phone: String,
}

/// Update organization member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMemberUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub division: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub nim: Option<String>,
    pub phone: Option<String>,
}
