//! In-Memory Store Module
//!
//! Holds every piece of mutable server state: session tokens, vehicle list
//! metadata and record sequences.
//!
//! # Architecture
//!
//! - **`tokens`** - Session token table (`TokenStore`)
//! - **`vehicles`** - List and record tables (`VehicleStore`)
//!
//! Both tables are plain structs. [`Store`] owns them behind a single
//! `std::sync::Mutex`, so every operation is linearized with respect to every
//! other one, across both tables. The lock is held only for the map work of
//! one call and never across an `.await`; callers get owned snapshots back.
//!
//! # Example
//!
//! ```rust
//! use kpam::backend::store::Store;
//! use kpam::shared::vehicle::Record;
//!
//! let store = Store::new();
//! store.append_record(1, Record::new(10, "ABC123", "Car"));
//! assert_eq!(store.records(1).unwrap().len(), 1);
//! ```

/// Session token table
pub mod tokens;

/// Vehicle list and record tables
pub mod vehicles;

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{TimeDelta, Utc};

use crate::shared::vehicle::{ListId, Record, RecordId, VehicleList};

pub use tokens::{IssuedToken, OwnerId, SessionEntry, TokenRejection, TokenStore};
pub use vehicles::{DeleteError, VehicleStore};

#[derive(Debug, Default)]
struct StoreInner {
    tokens: TokenStore,
    vehicles: VehicleStore,
}

/// Shared store for tokens, lists and records
///
/// Construct one per server (or per test) and share it as `Arc<Store>`.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, StoreInner> {
        // No operation leaves the maps half-updated, so poison is ignored.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a session token for `owner_id` that expires `ttl` from now
    pub fn create_token(&self, owner_id: OwnerId, ttl: TimeDelta) -> IssuedToken {
        self.guard().tokens.issue(owner_id, ttl, Utc::now())
    }

    /// Resolve a session token to its owner
    pub fn validate_token(&self, token: &str) -> Result<OwnerId, TokenRejection> {
        self.guard().tokens.validate(token, Utc::now())
    }

    /// Drop every expired session token, returning how many were removed
    pub fn purge_expired_tokens(&self) -> usize {
        self.guard().tokens.purge_expired(Utc::now())
    }

    /// Synthesize a fresh owner identity for a login
    pub fn allocate_owner_id(&self) -> OwnerId {
        self.guard().tokens.allocate_owner_id(Utc::now())
    }

    pub fn token_count(&self) -> usize {
        self.guard().tokens.len()
    }

    pub fn insert_list(&self, list: VehicleList) -> Option<VehicleList> {
        self.guard().vehicles.insert_list(list)
    }

    pub fn lists(&self) -> Vec<VehicleList> {
        self.guard().vehicles.lists()
    }

    pub fn insert_records(&self, list_id: ListId, records: Vec<Record>) {
        self.guard().vehicles.insert_records(list_id, records);
    }

    pub fn records(&self, list_id: ListId) -> Option<Vec<Record>> {
        self.guard().vehicles.records(list_id)
    }

    pub fn append_record(&self, list_id: ListId, record: Record) -> usize {
        self.guard().vehicles.append_record(list_id, record)
    }

    pub fn delete_record(&self, list_id: ListId, record_id: RecordId) -> Result<Record, DeleteError> {
        self.guard().vehicles.delete_record(list_id, record_id)
    }
}
