//! User Model

use serde::{Deserialize, Serialize};

/// Membership role (RBAC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Pengurus,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether this role may manage published content (banners, news,
    /// kegiatan, the organization roster).
    pub fn can_manage_content(&self) -> bool {
        matches!(self, Role::Admin | Role::Pengurus)
    }
}

/// User entity
///
/// `password_hash` is an argon2 PHC string and never leaves the service
/// layer; callers receive [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nim: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub angkatan: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: i64,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegister {
    pub nim: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub angkatan: String,
    pub password: String,
}

/// Profile view returned to callers (no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub nim: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub angkatan: String,
    pub role: Role,
    pub created_at: i64,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            nim: user.nim.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            angkatan: user.angkatan.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
