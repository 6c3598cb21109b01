//! # Message Pipeline Tests
//!
//! End-to-end checks of the public API against an in-memory sender:
//!
//! 1. **Reference vector** - byte-exact body and signature for a known payload
//! 2. **Round-trip** - gunzip + parse of the sent body reproduces the payload
//! 3. **Sharing** - many messages sent concurrently from one client

use std::io::Read;
use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use flate2::read::GzDecoder;
use game_analytics::test_utils::RecordingSender;
use game_analytics::{Client, EventCategory, Message};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn make_client() -> Client<RecordingSender> {
    Client::with_sender("aaaaa", "bbbbb", RecordingSender::new()).unwrap()
}

fn gunzip_json(body: &[u8]) -> Value {
    let mut plain = Vec::new();
    GzDecoder::new(body).read_to_end(&mut plain).unwrap();
    serde_json::from_slice(&plain).unwrap()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

// =============================================================================
// REFERENCE VECTOR
// =============================================================================

#[tokio::test]
async fn test_reference_body_and_signature() {
    let client = make_client();
    let mut message = Message::new("http://www.example.com/", &client);
    message.set_field("foo", "bar");

    let response = message.send().await.unwrap();
    assert_eq!(response.status, 200);

    let requests = client.sender().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        general_purpose::STANDARD.encode(requests[0].body()),
        "H4sIAAAAAAAAA6tWSsvPV7JSSkosUqoFAO/1K/4NAAAA"
    );
    assert_eq!(
        requests[0].header("Authorization"),
        Some("2Isi0VhuV8oniANJzAZVBEZ3DSAKmP0hQrVh3jbUNaQ=")
    );
}

#[test]
fn test_build_request_matches_sent_request() {
    let client = make_client();
    let message = client.progression().with_field("event_id", "Complete:World01");

    let built = message.build_request().unwrap();
    runtime().block_on(message.send()).unwrap();

    assert_eq!(client.sender().requests(), vec![built]);
}

// =============================================================================
// ENDPOINTS & CATEGORIES
// =============================================================================

#[test]
fn test_every_category_targets_events() {
    let client = make_client();

    for category in EventCategory::ALL {
        let message = client.event_category(category);
        assert_eq!(
            message.endpoint(),
            "https://api.gameanalytics.com/v2/aaaaa/events"
        );
        assert_eq!(*message.payload(), json!({ "category": category.as_str() }));
    }
}

#[test]
fn test_sandbox_is_captured_at_creation() {
    let client = make_client();
    let before = client.resource();
    client.set_sandbox(true);
    let after = client.resource();
    client.set_sandbox(false);

    assert!(before.endpoint().starts_with("https://api.gameanalytics.com/"));
    assert!(after.endpoint().starts_with("https://sandbox-api.gameanalytics.com/"));
}

// =============================================================================
// SHARING
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sends_from_shared_client() {
    let client = Arc::new(make_client());

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client
                .design()
                .with_field("event_id", format!("Level:{i}"))
                .send()
                .await
                .map(|response| response.status)
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 200);
    }

    let mut event_ids: Vec<String> = client
        .sender()
        .requests()
        .iter()
        .map(|request| gunzip_json(request.body())["event_id"].as_str().unwrap().to_string())
        .collect();
    event_ids.sort();
    let mut expected: Vec<String> = (0..16).map(|i| format!("Level:{i}")).collect();
    expected.sort();
    assert_eq!(event_ids, expected);
}

// =============================================================================
// ROUND-TRIP
// =============================================================================

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sent_body_round_trips_to_payload(
        fields in proptest::collection::vec(("[a-z_]{1,10}", json_value()), 0..8)
    ) {
        let client = make_client();
        let message = client.init().with_fields(fields);
        let expected = message.payload().to_value();

        runtime().block_on(message.send()).unwrap();

        let requests = client.sender().requests();
        prop_assert_eq!(requests.len(), 1);
        prop_assert_eq!(gunzip_json(requests[0].body()), expected);
    }
}
