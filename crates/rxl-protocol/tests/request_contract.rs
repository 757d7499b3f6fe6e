//! The four request paths driven end to end against an in-memory ledger.

use rxl_ledger::{DrugLedger, LedgerConfig};
use rxl_protocol::{handle_path, ProtocolError, Request, Response, ResponseStatus, NOT_FOUND_SENTINEL};
use rxl_store::{InMemoryRecordStore, RecordStore};
use rxl_types::{NewDrug, RecordKey};
use serde_json::Value;

fn json(response: &Response) -> Value {
    serde_json::from_str(&response.to_json().unwrap()).unwrap()
}

#[test]
fn create_get_transfer_get() {
    let ledger = DrugLedger::in_memory(&LedgerConfig::empty()).unwrap();

    let created = handle_path(&ledger, "/add_drug/D1-12.1,%2045.2-2024-01-01-Acme-PharmaCo").unwrap();
    assert_eq!(json(&created)["holder"], "Acme");
    assert_eq!(json(&created)["key"], 1);

    let fetched = handle_path(&ledger, "/get_drug/D1").unwrap();
    assert_eq!(json(&fetched)["holder"], "Acme");

    let moved = handle_path(&ledger, "/change_holder/D1-Hospital").unwrap();
    assert_eq!(moved.status(), ResponseStatus::Ok);

    let fetched = handle_path(&ledger, "/get_drug/D1").unwrap();
    let value = json(&fetched);
    assert_eq!(value["holder"], "Hospital");
    assert_eq!(value["location"], "12.1, 45.2");
    assert_eq!(value["timestamp"], "2024-01-01");
}

#[test]
fn not_found_sentinel_is_shared() {
    let ledger = DrugLedger::in_memory(&LedgerConfig::default()).unwrap();
    let query = handle_path(&ledger, "/get_drug/ghost").unwrap();
    let transfer = handle_path(&ledger, "/change_holder/ghost-Hospital").unwrap();

    assert_eq!(query, Response::NotFound);
    assert_eq!(transfer, Response::NotFound);
    assert_eq!(json(&query), Value::String(NOT_FOUND_SENTINEL.into()));
    assert_eq!(query.to_json().unwrap(), transfer.to_json().unwrap());
}

#[test]
fn listing_is_numeric_through_the_contract() {
    let store = InMemoryRecordStore::new();
    for n in [2u64, 10, 1] {
        let drug = NewDrug::new(format!("D{n}"), "1, 2", "t", "h", "m");
        store
            .put(RecordKey::new(n), &drug.to_payload().unwrap())
            .unwrap();
    }
    let ledger = DrugLedger::new(store);

    let value = json(&handle_path(&ledger, "/get_all_drug/").unwrap());
    let keys: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["Key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["1", "2", "10"]);
}

#[test]
fn store_failure_maps_to_503() {
    let store = InMemoryRecordStore::new();
    store.set_read_only(true);
    let ledger = DrugLedger::new(store);

    let err = handle_path(&ledger, "/add_drug/D1-1,%202-t-h-m").unwrap_err();
    assert_eq!(err.code(), 503);
}

#[test]
fn request_paths_round_trip_through_parse() {
    let ledger = DrugLedger::in_memory(&LedgerConfig::empty()).unwrap();
    let request = Request::AddDrug {
        encoded: "D9--45.0945, 0.7949-1496105425-RX Health-P490".into(),
    };
    let created = handle_path(&ledger, &request.path()).unwrap();
    assert_eq!(json(&created)["location"], "-45.0945, 0.7949");
}

#[test]
fn unknown_route_is_404() {
    let ledger = DrugLedger::in_memory(&LedgerConfig::empty()).unwrap();
    let err = handle_path(&ledger, "/remove_drug/D1").unwrap_err();
    assert!(matches!(err, ProtocolError::UnknownRoute(_)));
    assert_eq!(err.code(), 404);
}
