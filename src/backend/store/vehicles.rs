/**
 * Vehicle List and Record Tables
 *
 * Two independent maps keyed by list id: one holds list metadata, the other
 * the ordered record sequence of each list. Either may have an entry the
 * other lacks; a list with no records entry reads as "not found" on the
 * record routes, and records may be created for a list id with no metadata.
 */

use std::collections::HashMap;

use thiserror::Error;

use crate::shared::vehicle::{ListId, Record, RecordId, VehicleList};

/// Why a record could not be deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("list {0} not found")]
    UnknownList(ListId),
    #[error("record {record_id} not found in list {list_id}")]
    UnknownRecord { list_id: ListId, record_id: RecordId },
}

#[derive(Debug, Default)]
pub struct VehicleStore {
    lists: HashMap<ListId, VehicleList>,
    records: HashMap<ListId, Vec<Record>>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace list metadata, returning the previous entry
    pub fn insert_list(&mut self, list: VehicleList) -> Option<VehicleList> {
        self.lists.insert(list.id, list)
    }

    /// Snapshot of all lists, ordered by id
    pub fn lists(&self) -> Vec<VehicleList> {
        let mut lists: Vec<VehicleList> = self.lists.values().cloned().collect();
        lists.sort_by_key(|list| list.id);
        lists
    }

    /// Replace the whole record sequence of a list
    pub fn insert_records(&mut self, list_id: ListId, records: Vec<Record>) {
        self.records.insert(list_id, records);
    }

    /// Snapshot of a list's records, or `None` if the list has no sequence
    pub fn records(&self, list_id: ListId) -> Option<Vec<Record>> {
        self.records.get(&list_id).cloned()
    }

    /// Append a record, creating the list's sequence if needed
    ///
    /// Returns the sequence length after the append.
    pub fn append_record(&mut self, list_id: ListId, record: Record) -> usize {
        let records = self.records.entry(list_id).or_default();
        records.push(record);
        records.len()
    }

    /// Remove the first record with `record_id`, keeping the rest in order
    pub fn delete_record(&mut self, list_id: ListId, record_id: RecordId) -> Result<Record, DeleteError> {
        let records = self
            .records
            .get_mut(&list_id)
            .ok_or(DeleteError::UnknownList(list_id))?;

        let position = records
            .iter()
            .position(|record| record.id == record_id)
            .ok_or(DeleteError::UnknownRecord { list_id, record_id })?;

        Ok(records.remove(position))
    }
}
