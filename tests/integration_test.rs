//! Lookups against a running order server.
//!
//! Requires the server at `ORDERVIEW_BASE_URL` (default
//! `http://localhost:8080`) with the sample order loaded.
//! Run with: `cargo test --features integration-tests`

#![cfg(feature = "integration-tests")]

use orderview::config::fetch_config;
use orderview::lookup::{HttpTransport, LookupOutcome, lookup};
use orderview::models::OrderId;

const SAMPLE_ORDER_UID: &str = "b563feb7b2b84b6test";

fn transport() -> HttpTransport {
    let config = fetch_config().expect("Failed to load config");
    HttpTransport::new(&config.orders.base_url).expect("Invalid base url")
}

#[tokio::test]
async fn test_sample_order_is_found() {
    let order_id = OrderId::new(SAMPLE_ORDER_UID).unwrap();
    match lookup(&transport(), order_id).await {
        LookupOutcome::Found(order) => {
            assert_eq!(order.order_uid.as_str(), Some(SAMPLE_ORDER_UID));
        }
        other => panic!("Expected the sample order, got {}", other.label()),
    }
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let order_id = OrderId::new("no-such-order-uid").unwrap();
    let outcome = lookup(&transport(), order_id).await;
    assert!(matches!(outcome, LookupOutcome::NotFound(_)));
}
