//! End-to-end flow over an on-disk store: registration bootstrap, content
//! administration, ledger rollups, and persistence across a close/reopen
//! cycle.

use hmif_store::{AppState, StoreConfig, StoreError};
use shared::models::{
    BannerCreate, FinanceCreate, KegiatanCreate, NewsCategory, NewsCreate, Role, TransactionType,
    UserRegister,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        data_dir: dir.path().to_path_buf(),
        db_file: "hmif-app.redb".to_string(),
    }
}

fn registration(nim: &str, email: &str) -> UserRegister {
    UserRegister {
        nim: nim.to_string(),
        name: "Budi Santoso".to_string(),
        email: email.to_string(),
        phone: "081234567890".to_string(),
        angkatan: "2023".to_string(),
        password: "rahasia123".to_string(),
    }
}

fn banner(image: &str) -> BannerCreate {
    BannerCreate {
        image: image.to_string(),
        active: None,
    }
}

#[tokio::test]
async fn full_app_flow_survives_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    let banner_ids;
    let kegiatan_id;
    {
        let state = AppState::open(&config).unwrap();

        // Fresh install: first registrant bootstraps as admin
        let admin = state
            .auth
            .register(registration("2023001", "budi@ummi.ac.id"))
            .await
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        let member = state
            .auth
            .register(registration("2023002", "siti@ummi.ac.id"))
            .await
            .unwrap();
        assert_eq!(member.role, Role::Member);

        // Banner administration: create three, promote the last, drop the first
        let mut ids = Vec::new();
        for i in 1..=3 {
            let created = state
                .banners
                .create(banner(&format!("https://cdn.ummi.ac.id/banner-{i}.jpg")))
                .await
                .unwrap();
            ids.push(created.id);
        }
        state.banners.move_to(&ids[2], 1).await.unwrap();
        state.banners.delete(&ids[0]).await.unwrap();
        banner_ids = ids;

        // An activity with participant registration
        let created = state
            .kegiatan
            .create(KegiatanCreate {
                title: "Seminar Teknologi".to_string(),
                category: "Seminar".to_string(),
                date: "2025-09-12".to_string(),
                time: "09:00".to_string(),
                location: "Aula UMMI".to_string(),
                status: None,
                image: String::new(),
                max_participants: 100,
                description: "Seminar tahunan himpunan".to_string(),
                created_by: admin.id.clone(),
            })
            .await
            .unwrap();
        state.kegiatan.add_participant(&created.id).await.unwrap();
        kegiatan_id = created.id;

        // Ledger entries and rollup
        for (title, amount, kind, date) in [
            ("Dana hibah", 5_000_000, TransactionType::Income, "2025-03-01"),
            ("Konsumsi rapat", 1_500_000, TransactionType::Expense, "2025-03-05"),
            ("Sponsor", 10_000_000, TransactionType::Income, "2025-04-20"),
        ] {
            state
                .finance
                .create(FinanceCreate {
                    title: title.to_string(),
                    amount,
                    kind,
                    category: "Kas".to_string(),
                    description: String::new(),
                    date: date.to_string(),
                    created_by: admin.id.clone(),
                })
                .await
                .unwrap();
        }
        let summary = state.finance.summary().unwrap();
        assert_eq!(summary.balance, 13_500_000);

        let news = state
            .news
            .create(NewsCreate {
                title: "Pendaftaran Anggota Baru".to_string(),
                content: "Pendaftaran dibuka sampai akhir bulan.".to_string(),
                image: String::new(),
                category: NewsCategory::Pengumuman,
                author: "Humas".to_string(),
                featured: Some(true),
            })
            .await
            .unwrap();
        state.news.record_view(&news.id).await.unwrap();
    }

    // Everything committed must survive the process boundary
    let state = AppState::open(&config).unwrap();

    let profile = state.auth.login("budi@ummi.ac.id", "rahasia123").await.unwrap();
    assert_eq!(profile.role, Role::Admin);

    let banners = state.banners.list().unwrap();
    let ids: Vec<&str> = banners.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, [banner_ids[2].as_str(), banner_ids[1].as_str()]);
    let orders: Vec<u32> = banners.iter().map(|b| b.order).collect();
    assert_eq!(orders, [1, 2]);

    let kegiatan = state.kegiatan.get_by_id(&kegiatan_id).unwrap().unwrap();
    assert_eq!(kegiatan.participants, 1);

    let summary = state.finance.summary().unwrap();
    assert_eq!(summary.total_income, 15_000_000);
    assert_eq!(summary.total_expense, 1_500_000);

    let featured = state.news.list_featured().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].views, 1);

    let stats = state.stats().unwrap();
    let users = stats
        .collections
        .iter()
        .find(|c| c.name == "users")
        .expect("users collection present");
    assert_eq!(users.records, 2);
}

#[tokio::test]
async fn failed_mutations_never_dirty_the_store() {
    let state = AppState::open_in_memory().unwrap();

    state
        .auth
        .register(registration("2023001", "budi@ummi.ac.id"))
        .await
        .unwrap();

    // Duplicate registration rejected, collection unchanged
    let err = state
        .auth
        .register(registration("2023001", "lain@ummi.ac.id"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
    assert_eq!(
        state
            .stats()
            .unwrap()
            .collections
            .iter()
            .find(|c| c.name == "users")
            .unwrap()
            .records,
        1
    );

    // Out-of-range move rejected, ranks untouched
    let first = state.banners.create(banner("https://cdn.example/a.jpg")).await.unwrap();
    state.banners.create(banner("https://cdn.example/b.jpg")).await.unwrap();
    let err = state.banners.move_to(&first.id, 9).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    let orders: Vec<u32> = state.banners.list().unwrap().iter().map(|b| b.order).collect();
    assert_eq!(orders, [1, 2]);
}
