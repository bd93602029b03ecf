//! Vehicle List and Record Types
//!
//! These are the two entities served by the `/api/v1` endpoints. Both are
//! encoded with camelCase keys to match what the web client sends and expects.
//!
//! Missing fields decode to their zero values, so `{"id": 7}` is a valid
//! record with an empty plate and vehicle type.

use serde::{Deserialize, Serialize};

/// Identifier of a vehicle list
///
/// The same id keys both the list metadata and the list's record sequence.
pub type ListId = i64;

/// Identifier of a record inside a vehicle list
pub type RecordId = i64;

/// A named, colored list of vehicles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleList {
    /// Unique list id
    pub id: ListId,
    /// Human-readable title shown in the client
    pub display_name: String,
    /// Machine name
    pub name: String,
    /// Display color (free-form, e.g. `#ff0000`)
    pub color: String,
    /// Sort position in the client
    pub order: i32,
    /// Opaque status code
    pub status: i32,
}

/// A single vehicle entry belonging to a [`VehicleList`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub id: RecordId,
    pub plate: String,
    pub vehicle_type: String,
}

impl Record {
    pub fn new(id: RecordId, plate: impl Into<String>, vehicle_type: impl Into<String>) -> Self {
        Self {
            id,
            plate: plate.into(),
            vehicle_type: vehicle_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_uses_camel_case_keys() {
        let record = Record::new(100, "ABC123", "Car");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 100, "plate": "ABC123", "vehicleType": "Car"})
        );
    }

    #[test]
    fn test_vehicle_list_uses_camel_case_keys() {
        let list = VehicleList {
            id: 1,
            display_name: "Test List".to_string(),
            name: "testList".to_string(),
            color: "#00ff00".to_string(),
            order: 2,
            status: 1,
        };
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["displayName"], "Test List");
        assert_eq!(value["order"], 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: Record = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record, Record::new(7, "", ""));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"id": "seven"}"#);
        assert!(result.is_err());
    }
}
