//! App state
//!
//! Bundles one instance of every repository plus the auth service over a
//! single record store. Screens receive this by handle; tests open an
//! isolated in-memory instance each.

use crate::auth::AuthService;
use crate::core::config::StoreConfig;
use crate::core::error::StoreResult;
use crate::repository::{
    BannerRepository, FinanceRepository, KegiatanRepository, NewsRepository, OrgMemberRepository,
};
use crate::storage::{RecordStore, StoreStats};

#[derive(Clone)]
pub struct AppState {
    store: RecordStore,
    pub banners: BannerRepository,
    pub org_members: OrgMemberRepository,
    pub kegiatan: KegiatanRepository,
    pub finance: FinanceRepository,
    pub news: NewsRepository,
    pub auth: AuthService,
}

impl AppState {
    /// Open (or create) the on-disk store described by `config`
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let store = RecordStore::open(config.db_path())?;
        tracing::info!(path = %config.db_path().display(), "Opened record store");
        Ok(Self::with_store(store))
    }

    /// Fully isolated in-memory instance (tests, previews)
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::with_store(RecordStore::open_in_memory()?))
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self {
            banners: BannerRepository::new(store.clone()),
            org_members: OrgMemberRepository::new(store.clone()),
            kegiatan: KegiatanRepository::new(store.clone()),
            finance: FinanceRepository::new(store.clone()),
            news: NewsRepository::new(store.clone()),
            auth: AuthService::new(store.clone()),
            store,
        }
    }

    /// Per-collection record counts
    pub fn stats(&self) -> StoreResult<StoreStats> {
        Ok(self.store.stats()?)
    }
}
