//! Property-based tests for the record store

use kpam::backend::store::Store;
use kpam::shared::vehicle::Record;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = Record> {
    (0..8i64, "[A-Z]{1,3}-[0-9]{1,4}", "(car|van|truck|motorcycle)")
        .prop_map(|(id, plate, vehicle_type)| Record::new(id, plate, vehicle_type))
}

proptest! {
    #[test]
    fn test_delete_removes_first_match_and_keeps_order(
        records in prop::collection::vec(record_strategy(), 0..20),
        target in 0..8i64,
    ) {
        let store = Store::new();
        store.insert_records(1, records.clone());

        let result = store.delete_record(1, target);
        let after = store.records(1).unwrap();

        match records.iter().position(|r| r.id == target) {
            Some(position) => {
                let mut expected = records.clone();
                let removed = expected.remove(position);
                prop_assert_eq!(result.unwrap(), removed);
                prop_assert_eq!(after, expected);
            }
            None => {
                prop_assert!(result.is_err());
                prop_assert_eq!(after, records);
            }
        }
    }

    #[test]
    fn test_record_json_round_trip(record in record_strategy(), id in any::<i64>()) {
        let record = Record { id, ..record };
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn test_appends_preserve_count(records in prop::collection::vec(record_strategy(), 0..30)) {
        let store = Store::new();
        for record in &records {
            store.append_record(4, record.clone());
        }
        prop_assert_eq!(store.records(4).unwrap_or_default(), records);
    }
}
