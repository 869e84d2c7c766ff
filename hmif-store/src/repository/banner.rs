//! Banner Repository

use shared::models::{Banner, BannerCreate, BannerUpdate};
use shared::util::{now_millis, record_token};

use crate::collection::{OrderedCollection, OrderedRecord, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "banners";

impl Record for Banner {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OrderedRecord for Banner {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Clone)]
pub struct BannerRepository {
    coll: OrderedCollection<Banner>,
}

impl BannerRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            coll: OrderedCollection::new(store, COLLECTION),
        }
    }

    pub fn with_seed(store: RecordStore, seed: Vec<Banner>) -> Self {
        Self {
            coll: OrderedCollection::with_seed(store, COLLECTION, seed),
        }
    }

    /// All banners sorted by display rank
    pub fn list(&self) -> StoreResult<Vec<Banner>> {
        self.coll.list()
    }

    /// Only the banners shown on the home screen
    pub fn list_active(&self) -> StoreResult<Vec<Banner>> {
        Ok(self.coll.list()?.into_iter().filter(|b| b.active).collect())
    }

    pub async fn create(&self, data: BannerCreate) -> StoreResult<Banner> {
        if data.image.trim().is_empty() {
            return Err(StoreError::Validation("banner image is required".into()));
        }

        self.coll
            .create_with(|order| Banner {
                id: record_token(),
                image: data.image,
                order,
                active: data.active.unwrap_or(true),
                created_at: now_millis(),
            })
            .await
    }

    pub async fn update(&self, id: &str, data: BannerUpdate) -> StoreResult<Banner> {
        if let Some(image) = &data.image
            && image.trim().is_empty()
        {
            return Err(StoreError::Validation("banner image is required".into()));
        }

        self.coll
            .update_with(id, |banner| {
                if let Some(image) = data.image {
                    banner.image = image;
                }
                if let Some(active) = data.active {
                    banner.active = active;
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.coll.delete(id).await?;
        Ok(())
    }

    /// Move a banner to the given rank; the target must be within
    /// `1..=N` (callers pre-validate against the collection length)
    pub async fn move_to(&self, id: &str, new_order: u32) -> StoreResult<Banner> {
        self.coll.move_record(id, new_order).await
    }
}
