//! HMIF UMMI local data service layer
//!
//! Persistence-backed CRUD and ordering services for the organization's
//! mobile app: banners, organization roster, kegiatan (activities), the
//! finance ledger, news, and credential lookup. Everything is stored on
//! device in an embedded redb database as one JSON-encoded array per
//! collection; there is no network surface.
//!
//! # Module structure
//!
//! ```text
//! hmif-store/src/
//! ├── core/          # Config, errors, app state
//! ├── storage.rs     # redb-backed record store (one JSON array per key)
//! ├── collection/    # Generic ordered/unordered collection managers
//! ├── repository/    # Per-entity services over the managers
//! └── auth/          # Registration, login, role management (argon2)
//! ```
//!
//! Same-collection mutations are serialized behind a per-collection async
//! mutex spanning the whole load-mutate-save cycle; a failed mutation
//! leaves the stored collection unchanged.

pub mod auth;
pub mod collection;
pub mod core;
pub mod repository;
pub mod storage;

// Re-export public types
pub use crate::core::{AppState, StoreConfig, StoreError, StoreResult};
pub use auth::AuthService;
pub use collection::{Collection, DatedRecord, OrderedCollection, OrderedRecord, Record};
pub use repository::{
    BannerRepository, FinanceRepository, KegiatanRepository, NewsRepository, OrgMemberRepository,
};
pub use storage::{RecordStore, StorageError, StorageResult};
