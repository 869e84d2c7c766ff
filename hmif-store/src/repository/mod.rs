//! Repository module
//!
//! Per-entity services over the generic collection managers. Each
//! repository owns its collection key, applies the entity's validation
//! rules, and stamps IDs and timestamps on creation.

pub mod banner;
pub mod finance;
pub mod kegiatan;
pub mod news;
pub mod org_member;

// Re-exports
pub use banner::BannerRepository;
pub use finance::FinanceRepository;
pub use kegiatan::KegiatanRepository;
pub use news::NewsRepository;
pub use org_member::OrgMemberRepository;
