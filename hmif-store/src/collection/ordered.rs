//! Ordered collection manager
//!
//! Maintains a dense 1-based `order` rank across a collection: creation
//! appends at rank `N + 1`, deletion compacts the survivors back to
//! `1..=N-1` preserving relative sequence, and a move shifts every record
//! between the old and new rank by exactly one. After every operation the
//! order values are a permutation of `1..=N`.

use super::{Collection, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

/// A record carrying a dense 1-based display rank
pub trait OrderedRecord: Record {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// Collection manager for records with user-controlled display sequence
#[derive(Clone)]
pub struct OrderedCollection<T: OrderedRecord> {
    inner: Collection<T>,
}

impl<T: OrderedRecord> OrderedCollection<T> {
    pub fn new(store: RecordStore, name: &'static str) -> Self {
        Self {
            inner: Collection::new(store, name),
        }
    }

    pub fn with_seed(store: RecordStore, name: &'static str, seed: Vec<T>) -> Self {
        Self {
            inner: Collection::with_seed(store, name, seed),
        }
    }

    /// Records sorted ascending by rank
    pub fn list(&self) -> StoreResult<Vec<T>> {
        let mut records = self.inner.all()?;
        records.sort_by_key(|r| r.order());
        Ok(records)
    }

    /// Append a record at rank `N + 1`. The closure receives the assigned
    /// rank and builds the record.
    pub async fn create_with(&self, build: impl FnOnce(u32) -> T) -> StoreResult<T> {
        self.inner
            .mutate(|records| {
                let record = build(records.len() as u32 + 1);
                records.push(record.clone());
                Ok(record)
            })
            .await
    }

    /// Merge-update non-rank fields; rank only changes through
    /// [`move_record`](Self::move_record)
    pub async fn update_with(
        &self,
        id: &str,
        f: impl FnOnce(&mut T) -> StoreResult<()>,
    ) -> StoreResult<T> {
        self.inner.update_with(id, f).await
    }

    /// Remove a record and compact the survivors to `1..=N-1`, keeping
    /// their relative sequence
    pub async fn delete(&self, id: &str) -> StoreResult<T> {
        let name = self.inner.name();
        self.inner
            .mutate(|records| {
                let pos = records
                    .iter()
                    .position(|r| r.id() == id)
                    .ok_or_else(|| StoreError::NotFound(format!("{name}: record {id} not found")))?;
                let removed = records.remove(pos);
                for record in records.iter_mut() {
                    if record.order() > removed.order() {
                        record.set_order(record.order() - 1);
                    }
                }
                tracing::debug!(collection = %name, id = %id, "Deleted record, ranks compacted");
                Ok(removed)
            })
            .await
    }

    /// Move a record to `new_order`, shifting everything between its old
    /// and new rank by one:
    ///
    /// - moving down (`new > old`): ranks in `(old, new]` decrement
    /// - moving up (`new < old`): ranks in `[new, old)` increment
    ///
    /// `new_order` must already be a valid rank in `1..=N`; an
    /// out-of-range target is rejected rather than clamped, so the dense
    /// permutation can never be broken from the outside.
    pub async fn move_record(&self, id: &str, new_order: u32) -> StoreResult<T> {
        let name = self.inner.name();
        self.inner
            .mutate(|records| {
                let len = records.len() as u32;
                let pos = records
                    .iter()
                    .position(|r| r.id() == id)
                    .ok_or_else(|| StoreError::NotFound(format!("{name}: record {id} not found")))?;
                if new_order < 1 || new_order > len {
                    return Err(StoreError::Validation(format!(
                        "target rank {new_order} outside 1..={len}"
                    )));
                }

                let old_order = records[pos].order();
                if new_order == old_order {
                    return Ok(records[pos].clone());
                }

                for record in records.iter_mut() {
                    let order = record.order();
                    if new_order > old_order && order > old_order && order <= new_order {
                        record.set_order(order - 1);
                    } else if new_order < old_order && order >= new_order && order < old_order {
                        record.set_order(order + 1);
                    }
                }
                records[pos].set_order(new_order);

                tracing::debug!(
                    collection = %name,
                    id = %id,
                    from = old_order,
                    to = new_order,
                    "Moved record"
                );
                Ok(records[pos].clone())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Slide {
        id: String,
        order: u32,
    }

    impl Record for Slide {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl OrderedRecord for Slide {
        fn order(&self) -> u32 {
            self.order
        }

        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn collection() -> OrderedCollection<Slide> {
        OrderedCollection::new(RecordStore::open_in_memory().unwrap(), "slides")
    }

    async fn with_n(coll: &OrderedCollection<Slide>, n: u32) {
        for i in 1..=n {
            coll.create_with(|order| Slide {
                id: format!("s{i}"),
                order,
            })
            .await
            .unwrap();
        }
    }

    fn assert_dense(coll: &OrderedCollection<Slide>) {
        let listed = coll.list().unwrap();
        let orders: Vec<u32> = listed.iter().map(|s| s.order).collect();
        let expected: Vec<u32> = (1..=listed.len() as u32).collect();
        assert_eq!(orders, expected);
    }

    #[tokio::test]
    async fn create_appends_at_end() {
        let coll = collection();
        with_n(&coll, 3).await;

        let listed = coll.list().unwrap();
        assert_eq!(listed[2].id, "s3");
        assert_eq!(listed[2].order, 3);
        assert_dense(&coll);
    }

    #[tokio::test]
    async fn move_down_shifts_interval_left() {
        // The canonical case: 5 records, move the one at rank 2 to rank 4.
        // Records originally at 3 and 4 shift to 2 and 3, others unchanged.
        let coll = collection();
        with_n(&coll, 5).await;

        coll.move_record("s2", 4).await.unwrap();

        let listed = coll.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s3", "s4", "s2", "s5"]);
        assert_dense(&coll);
    }

    #[tokio::test]
    async fn move_up_shifts_interval_right() {
        let coll = collection();
        with_n(&coll, 5).await;

        coll.move_record("s4", 2).await.unwrap();

        let listed = coll.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s4", "s2", "s3", "s5"]);
        assert_dense(&coll);
    }

    #[tokio::test]
    async fn move_to_own_rank_is_a_no_op() {
        let coll = collection();
        with_n(&coll, 3).await;

        let moved = coll.move_record("s2", 2).await.unwrap();
        assert_eq!(moved.order, 2);

        let listed = coll.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn move_out_of_range_is_rejected() {
        let coll = collection();
        with_n(&coll, 3).await;

        let err = coll.move_record("s1", 0).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        let err = coll.move_record("s1", 4).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert_dense(&coll);
    }

    #[tokio::test]
    async fn delete_compacts_ranks() {
        let coll = collection();
        with_n(&coll, 4).await;

        coll.delete("s2").await.unwrap();

        let listed = coll.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s3", "s4"]);
        assert_dense(&coll);
    }

    #[tokio::test]
    async fn ranks_stay_dense_across_mixed_operations() {
        let coll = collection();
        with_n(&coll, 5).await;
        assert_dense(&coll);

        coll.move_record("s5", 1).await.unwrap();
        assert_dense(&coll);

        coll.delete("s3").await.unwrap();
        assert_dense(&coll);

        coll.create_with(|order| Slide {
            id: "s6".to_string(),
            order,
        })
        .await
        .unwrap();
        assert_dense(&coll);

        coll.move_record("s6", 3).await.unwrap();
        assert_dense(&coll);

        coll.delete("s1").await.unwrap();
        assert_dense(&coll);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let coll = collection();
        with_n(&coll, 2).await;

        let err = coll.move_record("ghost", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = coll.delete("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
