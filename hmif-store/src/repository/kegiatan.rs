//! Kegiatan Repository

use shared::models::{Kegiatan, KegiatanCreate, KegiatanStatus, KegiatanUpdate};
use shared::util::{now_millis, record_token};

use crate::collection::{Collection, DatedRecord, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "kegiatan";

impl Record for Kegiatan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl DatedRecord for Kegiatan {
    type SortKey = String;

    fn sort_key(&self) -> String {
        self.date.clone()
    }
}

#[derive(Clone)]
pub struct KegiatanRepository {
    coll: Collection<Kegiatan>,
}

impl KegiatanRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            coll: Collection::new(store, COLLECTION),
        }
    }

    pub fn with_seed(store: RecordStore, seed: Vec<Kegiatan>) -> Self {
        Self {
            coll: Collection::with_seed(store, COLLECTION, seed),
        }
    }

    /// Activities newest-first by their date field
    pub fn list(&self) -> StoreResult<Vec<Kegiatan>> {
        self.coll.list()
    }

    pub fn list_by_status(&self, status: KegiatanStatus) -> StoreResult<Vec<Kegiatan>> {
        Ok(self
            .coll
            .list()?
            .into_iter()
            .filter(|k| k.status == status)
            .collect())
    }

    /// Soft-miss lookup used for edit-mode hydration
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Kegiatan>> {
        self.coll.get_by_id(id)
    }

    pub async fn create(&self, data: KegiatanCreate) -> StoreResult<Kegiatan> {
        for (value, label) in [(&data.title, "title"), (&data.date, "date")] {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!("kegiatan {label} is required")));
            }
        }
        if data.max_participants < 1 {
            return Err(StoreError::Validation(
                "max participants must be at least 1".into(),
            ));
        }

        let now = now_millis();
        self.coll
            .insert(Kegiatan {
                id: record_token(),
                title: data.title,
                category: data.category,
                date: data.date,
                time: data.time,
                location: data.location,
                status: data.status.unwrap_or_default(),
                image: data.image,
                participants: 0,
                max_participants: data.max_participants,
                description: data.description,
                created_by: data.created_by,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    pub async fn update(&self, id: &str, data: KegiatanUpdate) -> StoreResult<Kegiatan> {
        for (value, label) in [(&data.title, "title"), (&data.date, "date")] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(StoreError::Validation(format!("kegiatan {label} is required")));
            }
        }

        self.coll
            .update_with(id, |kegiatan| {
                if let Some(title) = data.title {
                    kegiatan.title = title;
                }
                if let Some(category) = data.category {
                    kegiatan.category = category;
                }
                if let Some(date) = data.date {
                    kegiatan.date = date;
                }
                if let Some(time) = data.time {
                    kegiatan.time = time;
                }
                if let Some(location) = data.location {
                    kegiatan.location = location;
                }
                if let Some(status) = data.status {
                    kegiatan.status = status;
                }
                if let Some(image) = data.image {
                    kegiatan.image = image;
                }
                if let Some(participants) = data.participants {
                    kegiatan.participants = participants;
                }
                if let Some(max_participants) = data.max_participants {
                    if max_participants < 1 {
                        return Err(StoreError::Validation(
                            "max participants must be at least 1".into(),
                        ));
                    }
                    kegiatan.max_participants = max_participants;
                }
                if let Some(description) = data.description {
                    kegiatan.description = description;
                }
                if kegiatan.participants > kegiatan.max_participants {
                    return Err(StoreError::Validation(format!(
                        "participants {} exceeds capacity {}",
                        kegiatan.participants, kegiatan.max_participants
                    )));
                }
                kegiatan.updated_at = now_millis();
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.coll.remove(id).await?;
        Ok(())
    }

    /// Count one more participant, failing once the activity is full
    pub async fn add_participant(&self, id: &str) -> StoreResult<Kegiatan> {
        self.coll
            .update_with(id, |kegiatan| {
                if kegiatan.participants >= kegiatan.max_participants {
                    return Err(StoreError::Validation(format!(
                        "kegiatan {} is full ({} participants)",
                        kegiatan.title, kegiatan.max_participants
                    )));
                }
                kegiatan.participants += 1;
                kegiatan.updated_at = now_millis();
                Ok(())
            })
            .await
    }
}
