// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Remote routine store workflow tests.
//!
//! A mocked PostgREST-style backend stands in for the hosted database.

use serde_json::json;
use vigil_core::{BackendError, RemoteConfig, RoutineItem, RoutineSlot, Vigil};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{fixed_clock, setup_temp_state, test_config, test_draft, zoned};

const TABLE_PATH: &str = "/rest/v1/routine_items";
const API_KEY: &str = "anon-key";
const ITEM_ID: &str = "3f2a9c1e-5b7d-4e8f-9a01-23456789abcd";
const OTHER_ID: &str = "3f2b0000-1111-4222-8333-444455556666";

async fn remote_vigil(server: &MockServer) -> (Vigil, crate::common::TempState) {
    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.remote = Some(RemoteConfig {
        url: server.uri(),
        api_key: API_KEY.to_string(),
        timeout_secs: 5,
    });
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(config, clock).await.unwrap();
    (vigil, temp_state)
}

fn remote_item(id: &str, title: &str, slot: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "tester",
        "title": title,
        "note": null,
        "slot": slot,
        "completed_on": null,
        "created_at": created_at,
    })
}

#[tokio::test]
async fn remote_list_sends_credentials_and_sorts() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("user_id", "eq.tester"))
        .and(query_param("order", "created_at.asc"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            remote_item("b", "Compline", "night", "2025-03-01T08:00:00Z"),
            remote_item("a", "Lauds", "morning", "2025-03-02T08:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    // Act
    let items = vigil.list_routine().await.unwrap();

    // Assert
    let titles: Vec<_> = items.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Lauds", "Compline"]);
    assert_eq!(items[0].slot, RoutineSlot::Morning);
}

#[tokio::test]
async fn remote_add_posts_merge_upsert() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(header("prefer", "resolution=merge-duplicates"))
        .and(header("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    // Act
    let item = vigil
        .add_routine(test_draft("Angelus", RoutineSlot::Midday))
        .await
        .unwrap();

    // Assert
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Vec<RoutineItem> = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, vec![item]);
}

#[tokio::test]
async fn remote_done_fetches_then_upserts_completion() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("user_id", "eq.tester"))
        .and(query_param("id", format!("eq.{ITEM_ID}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([remote_item(
            ITEM_ID,
            "Examen",
            "night",
            "2025-03-01T08:00:00Z"
        )])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    // Act
    let done = vigil.complete_routine(ITEM_ID).await.unwrap();

    // Assert
    assert!(done.is_done_on(vigil.today()));
    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|a| a.method.as_str() == "POST")
        .unwrap();
    let sent: Vec<RoutineItem> = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(sent[0].completed_on, Some(jiff::civil::date(2025, 3, 10)));
}

#[tokio::test]
async fn remote_done_by_prefix_matches_listed_items() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("user_id", "eq.tester"))
        .and(query_param("order", "created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            remote_item(ITEM_ID, "Vespers", "evening", "2025-03-01T08:00:00Z"),
            remote_item(OTHER_ID, "Lauds", "morning", "2025-03-02T08:00:00Z"),
        ])))
        .mount(&server)
        .await;
    // a uuid column rejects anything but a full uuid
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("id", "eq.3f2a9c1e"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("invalid input syntax for type uuid"),
        )
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    // Act
    let done = vigil.complete_routine(&ITEM_ID[..8]).await.unwrap();
    let ambiguous = vigil.complete_routine("3f2").await;

    // Assert
    assert_eq!(done.id, ITEM_ID);
    assert_eq!(done.title, "Vespers");
    assert!(matches!(ambiguous, Err(BackendError::Ambiguous(_))));
}

#[tokio::test]
async fn remote_remove_deletes_with_representation() {
    // Arrange
    let server = MockServer::start().await;
    let item = remote_item(ITEM_ID, "Rosary", "evening", "2025-03-01T08:00:00Z");
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(query_param("id", format!("eq.{ITEM_ID}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([item.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .and(query_param("user_id", "eq.tester"))
        .and(query_param("id", format!("eq.{ITEM_ID}").as_str()))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([item])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    // Act
    let removed = vigil.remove_routine(ITEM_ID).await.unwrap();
    let again = vigil.remove_routine(ITEM_ID).await;

    // Assert
    assert_eq!(removed.title, "Rosary");
    assert!(matches!(again, Err(BackendError::NotFound(_))));
}

#[tokio::test]
async fn remote_status_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;
    let (vigil, _temp_state) = remote_vigil(&server).await;

    let result = vigil.list_routine().await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
