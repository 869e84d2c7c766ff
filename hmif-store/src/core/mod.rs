//! Configuration, errors, and app state

pub mod config;
pub mod error;
pub mod state;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use state::AppState;
