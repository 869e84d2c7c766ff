//! Generic collection managers
//!
//! A [`Collection`] owns one named JSON array in the record store and
//! serializes its mutations behind a per-collection async mutex held for
//! the whole load-mutate-save cycle. Two rapid mutations against the same
//! collection therefore cannot clobber each other, and a mutation that
//! fails leaves the stored array untouched.
//!
//! [`OrderedCollection`](ordered::OrderedCollection) layers dense 1-based
//! rank maintenance on top for the collections with user-controlled
//! display sequence.

pub mod ordered;

pub use ordered::{OrderedCollection, OrderedRecord};

use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A storable record with a unique string id
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A record listed newest-first by a date-like key
pub trait DatedRecord: Record {
    type SortKey: Ord;

    fn sort_key(&self) -> Self::SortKey;
}

/// One named collection in the record store
pub struct Collection<T: Record> {
    store: RecordStore,
    name: &'static str,
    seed: Arc<Vec<T>>,
    write_lock: Arc<Mutex<()>>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            name: self.name,
            seed: Arc::clone(&self.seed),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(store: RecordStore, name: &'static str) -> Self {
        Self::with_seed(store, name, Vec::new())
    }

    /// A collection whose first access persists `seed`
    pub fn with_seed(store: RecordStore, name: &'static str, seed: Vec<T>) -> Self {
        Self {
            store,
            name,
            seed: Arc::new(seed),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current records in stored (insertion) order
    pub fn all(&self) -> StoreResult<Vec<T>> {
        if self.seed.is_empty() {
            Ok(self.store.load(self.name)?)
        } else {
            Ok(self.store.load_or_init(self.name, &self.seed)?)
        }
    }

    /// Run a mutation under the collection's write lock.
    ///
    /// The closure sees the freshly loaded array; if it returns an error
    /// nothing is saved and the stored collection is unchanged.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> StoreResult<R>) -> StoreResult<R> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.all()?;
        let out = f(&mut records)?;
        self.store.save(self.name, &records)?;
        Ok(out)
    }

    /// Append a record
    pub async fn insert(&self, record: T) -> StoreResult<T> {
        self.mutate(|records| {
            records.push(record.clone());
            Ok(record)
        })
        .await
    }

    /// Merge-update the record with the given id, returning the updated
    /// record. The closure may fail (e.g. a validation check against the
    /// merged state), in which case nothing is persisted.
    pub async fn update_with(
        &self,
        id: &str,
        f: impl FnOnce(&mut T) -> StoreResult<()>,
    ) -> StoreResult<T> {
        let name = self.name;
        self.mutate(|records| {
            let record = records
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| StoreError::NotFound(format!("{name}: record {id} not found")))?;
            f(record)?;
            Ok(record.clone())
        })
        .await
    }

    /// Remove the record with the given id
    pub async fn remove(&self, id: &str) -> StoreResult<T> {
        let name = self.name;
        self.mutate(|records| {
            let pos = records
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| StoreError::NotFound(format!("{name}: record {id} not found")))?;
            Ok(records.remove(pos))
        })
        .await
    }

    /// Soft-miss lookup: `None` for an unknown id, never an error
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.all()?.into_iter().find(|r| r.id() == id))
    }
}

impl<T: DatedRecord> Collection<T> {
    /// Records sorted newest-first by the record's date-like key.
    ///
    /// The sort is stable: records with equal keys keep insertion order.
    pub fn list(&self) -> StoreResult<Vec<T>> {
        let mut records = self.all()?;
        records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        stamp: i64,
    }

    impl Record for Entry {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl DatedRecord for Entry {
        type SortKey = i64;

        fn sort_key(&self) -> i64 {
            self.stamp
        }
    }

    fn entry(id: &str, stamp: i64) -> Entry {
        Entry {
            id: id.to_string(),
            stamp,
        }
    }

    fn collection() -> Collection<Entry> {
        Collection::new(RecordStore::open_in_memory().unwrap(), "entries")
    }

    #[tokio::test]
    async fn list_is_newest_first_and_stable() {
        let coll = collection();
        coll.insert(entry("a", 10)).await.unwrap();
        coll.insert(entry("b", 30)).await.unwrap();
        coll.insert(entry("c", 20)).await.unwrap();
        // Same stamp as "b": must stay after it (insertion order)
        coll.insert(entry("d", 30)).await.unwrap();

        let listed = coll.list().unwrap();
        let ids: Vec<String> = listed.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, ["b", "d", "c", "a"]);
    }

    #[tokio::test]
    async fn list_twice_without_mutation_is_equal() {
        let coll = collection();
        coll.insert(entry("a", 1)).await.unwrap();
        coll.insert(entry("b", 2)).await.unwrap();

        assert_eq!(coll.list().unwrap(), coll.list().unwrap());
    }

    #[tokio::test]
    async fn get_by_id_soft_misses() {
        let coll = collection();
        coll.insert(entry("a", 1)).await.unwrap();

        assert!(coll.get_by_id("a").unwrap().is_some());
        assert!(coll.get_by_id("nonexistent").unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_remove_hard_miss() {
        let coll = collection();

        let err = coll.update_with("ghost", |_| Ok(())).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        let err = coll.remove("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn failed_mutation_leaves_collection_unchanged() {
        let coll = collection();
        coll.insert(entry("a", 1)).await.unwrap();

        let err = coll
            .mutate(|records| {
                records.clear();
                Err::<(), _>(StoreError::Validation("rejected".into()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(coll.all().unwrap(), vec![entry("a", 1)]);
    }

    #[tokio::test]
    async fn seeded_collection_initializes_once() {
        let store = RecordStore::open_in_memory().unwrap();
        let coll = Collection::with_seed(store.clone(), "entries", vec![entry("s", 1)]);

        assert_eq!(coll.all().unwrap(), vec![entry("s", 1)]);
        coll.insert(entry("a", 2)).await.unwrap();

        // Re-handle over the same store: seed must not reapply
        let coll = Collection::with_seed(store, "entries", vec![entry("s", 1)]);
        assert_eq!(coll.all().unwrap().len(), 2);
    }
}
