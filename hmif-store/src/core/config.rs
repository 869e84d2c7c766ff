//! Store configuration

use std::path::PathBuf;

/// Configuration for the on-device record store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database file, created on open if missing
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`
    pub db_file: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: std::env::var("HMIF_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            db_file: std::env::var("HMIF_DB_FILE").unwrap_or_else(|_| "hmif-app.redb".into()),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
