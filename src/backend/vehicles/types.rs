//! Response bodies of the vehicle list endpoints.

use serde::{Deserialize, Serialize};

use crate::shared::vehicle::{Record, VehicleList};

/// Page size reported in list metadata
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Paging metadata of the list index
///
/// No paging is applied; offset is always 0 and all lists are returned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub offset: usize,
    pub limit: usize,
    pub total_count: usize,
}

/// Body of `GET /api/v1/vehiclelists`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleListsResponse {
    pub entries: Vec<VehicleList>,
    #[serde(rename = "_metadata")]
    pub metadata: ListMetadata,
}

impl VehicleListsResponse {
    pub fn new(entries: Vec<VehicleList>) -> Self {
        let total_count = entries.len();
        Self {
            entries,
            metadata: ListMetadata {
                offset: 0,
                limit: DEFAULT_PAGE_LIMIT,
                total_count,
            },
        }
    }
}

/// Body of `GET /api/v1/vehiclelist/record`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordsResponse {
    pub entries: Vec<Record>,
}
