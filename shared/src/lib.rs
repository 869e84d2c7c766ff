//! Shared types for the HMIF UMMI app
//!
//! Domain records, payload DTOs, and utility functions used by the
//! storage/service layer and the mobile UI shell.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
