//! Organization Member Repository

use shared::models::{OrgMember, OrgMemberCreate, OrgMemberUpdate};
use shared::util::record_token;

use crate::collection::{OrderedCollection, OrderedRecord, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "organization_members";

impl Record for OrgMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl OrderedRecord for OrgMember {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Clone)]
pub struct OrgMemberRepository {
    coll: OrderedCollection<OrgMember>,
}

impl OrgMemberRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            coll: OrderedCollection::new(store, COLLECTION),
        }
    }

    pub fn with_seed(store: RecordStore, seed: Vec<OrgMember>) -> Self {
        Self {
            coll: OrderedCollection::with_seed(store, COLLECTION, seed),
        }
    }

    /// Roster sorted by display rank (structure-screen sequence)
    pub fn list(&self) -> StoreResult<Vec<OrgMember>> {
        self.coll.list()
    }

    pub async fn create(&self, data: OrgMemberCreate) -> StoreResult<OrgMember> {
        for (value, label) in [(&data.name, "name"), (&data.position, "position")] {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!("member {label} is required")));
            }
        }

        self.coll
            .create_with(|order| OrgMember {
                id: record_token(),
                name: data.name,
                position: data.position,
                division: data.division,
                photo: data.photo,
                email: data.email,
                nim: data.nim,
                phone: data.phone,
                order,
            })
            .await
    }

    pub async fn update(&self, id: &str, data: OrgMemberUpdate) -> StoreResult<OrgMember> {
        for (value, label) in [(&data.name, "name"), (&data.position, "position")] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(StoreError::Validation(format!("member {label} is required")));
            }
        }

        self.coll
            .update_with(id, |member| {
                if let Some(name) = data.name {
                    member.name = name;
                }
                if let Some(position) = data.position {
                    member.position = position;
                }
                if let Some(division) = data.division {
                    member.division = division;
                }
                if let Some(photo) = data.photo {
                    member.photo = photo;
                }
                if let Some(email) = data.email {
                    member.email = email;
                }
                if let Some(nim) = data.nim {
                    member.nim = nim;
                }
                if let Some(phone) = data.phone {
                    member.phone = phone;
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.coll.delete(id).await?;
        Ok(())
    }

    /// Move a roster entry to the given rank (`1..=N`)
    pub async fn move_to(&self, id: &str, new_order: u32) -> StoreResult<OrgMember> {
        self.coll.move_record(id, new_order).await
    }
}
