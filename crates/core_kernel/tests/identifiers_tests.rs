//! Unit tests for opaque identifier newtypes

use core_kernel::{CategoryId, ClientId, InvoiceId, PaymentId, ProductId};

#[test]
fn test_ids_wrap_server_strings_verbatim() {
    let id = InvoiceId::new("ckw9x2l3f0001");
    assert_eq!(id.as_str(), "ckw9x2l3f0001");
    assert_eq!(id.to_string(), "ckw9x2l3f0001");
}

#[test]
fn test_ids_serialize_transparently() {
    let id = PaymentId::from("pay_9f8e7d");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"pay_9f8e7d\"");

    let back: PaymentId = serde_json::from_str("\"pay_9f8e7d\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_ids_accept_any_server_format() {
    // The backend's id scheme is opaque; uuids, cuids, and plain integers
    // as strings all pass through untouched.
    let uuid_style = ClientId::new("550e8400-e29b-41d4-a716-446655440000");
    let numeric_style = ProductId::new("12345");
    assert!(!uuid_style.is_empty());
    assert_eq!(numeric_style.as_str(), "12345");
}

#[test]
fn test_empty_id_detectable() {
    let id = CategoryId::new("");
    assert!(id.is_empty());
}

#[test]
fn test_ids_usable_as_map_keys() {
    use std::collections::HashMap;

    let mut totals: HashMap<InvoiceId, u32> = HashMap::new();
    totals.insert(InvoiceId::new("a"), 1);
    totals.insert(InvoiceId::new("b"), 2);
    assert_eq!(totals.get(&InvoiceId::new("a")), Some(&1));
}
