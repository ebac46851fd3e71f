// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Daily readings workflow tests.
//!
//! The feed is fetched at most once per local day. Failures fall back to
//! placeholder readings, which are never cached.

use std::sync::Arc;

use serde_json::json;
use vigil_core::{DailyCache, MemoryDailyCache, ReadingsConfig, Vigil};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{fixed_clock, setup_temp_state, test_config, zoned};

fn easter_sunday() -> serde_json::Value {
    json!({
        "date": "2025-04-20",
        "first_reading": { "reference": "Acts 10:34a, 37-43", "text": "Peter proceeded to speak." },
        "psalm": { "reference": "Ps 118:1-2, 16-17, 22-23", "text": "This is the day the Lord has made." },
        "second_reading": { "reference": "Col 3:1-4", "text": "Seek what is above." },
        "gospel": { "reference": "Jn 20:1-9", "text": "On the first day of the week." }
    })
}

fn easter_monday() -> serde_json::Value {
    json!({
        "date": "2025-04-21",
        "first_reading": { "reference": "Acts 2:14, 22-33", "text": "Then Peter stood up." },
        "psalm": { "reference": "Ps 16:1-2a, 5, 7-11", "text": "Keep me safe, O God." },
        "gospel": { "reference": "Mt 28:8-15", "text": "Mary Magdalene and the other Mary went away quickly." }
    })
}

fn feed_config(server: &MockServer) -> ReadingsConfig {
    ReadingsConfig {
        url: format!("{}/readings", server.uri()),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn readings_fetched_once_per_day() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .and(query_param("date", "2025-04-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(easter_sunday()))
        .expect(1)
        .mount(&server)
        .await;

    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.readings = Some(feed_config(&server));
    let clock = fixed_clock(zoned(2025, 4, 20, 6));
    let vigil = Vigil::with_clock(config, clock).await.unwrap();

    // Act
    let first = vigil.readings().await;
    let second = vigil.readings().await;

    // Assert
    assert!(!first.placeholder);
    assert_eq!(first.gospel.reference, "Jn 20:1-9");
    assert!(first.second_reading.is_some());
    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn readings_refetched_after_day_rollover() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .and(query_param("date", "2025-04-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(easter_sunday()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .and(query_param("date", "2025-04-21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(easter_monday()))
        .expect(1)
        .mount(&server)
        .await;

    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.readings = Some(feed_config(&server));
    let clock = fixed_clock(zoned(2025, 4, 20, 20));
    let vigil = Vigil::with_clock(config, clock.clone()).await.unwrap();

    // Act
    let sunday = vigil.readings().await;
    clock.advance_days(1).unwrap();
    let monday = vigil.readings().await;
    let monday_again = vigil.readings().await;

    // Assert
    assert_eq!(sunday.gospel.reference, "Jn 20:1-9");
    assert_eq!(monday.gospel.reference, "Mt 28:8-15");
    assert_eq!(monday.second_reading, None);
    assert_eq!(monday, monday_again);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn readings_placeholder_on_server_error_is_not_cached() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .and(query_param("date", "2025-04-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(easter_sunday()))
        .mount(&server)
        .await;

    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.readings = Some(feed_config(&server));
    let clock = fixed_clock(zoned(2025, 4, 20, 6));
    let vigil = Vigil::with_clock(config, clock).await.unwrap();

    // Act
    let failed = vigil.readings().await;
    let retried = vigil.readings().await;

    // Assert
    assert!(failed.placeholder);
    assert_eq!(failed.date, vigil.today());
    assert!(!retried.placeholder);
    assert_eq!(retried.gospel.reference, "Jn 20:1-9");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn readings_placeholder_on_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.readings = Some(feed_config(&server));
    let clock = fixed_clock(zoned(2025, 4, 20, 6));
    let vigil = Vigil::with_clock(config, clock).await.unwrap();

    let readings = vigil.readings().await;

    assert!(readings.placeholder);
    assert_eq!(readings.passages().len(), 3);
}

#[tokio::test]
async fn readings_placeholder_without_feed() {
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 12, 25, 9));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();

    let readings = vigil.readings().await;

    assert!(readings.placeholder);
    assert_eq!(readings.date, jiff::civil::date(2025, 12, 25));
}

#[tokio::test]
async fn readings_stored_in_injected_cache() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(easter_sunday()))
        .expect(1)
        .mount(&server)
        .await;

    let temp_state = setup_temp_state().await.unwrap();
    let mut config = test_config(&temp_state.state_dir);
    config.readings = Some(feed_config(&server));
    let clock = fixed_clock(zoned(2025, 4, 20, 6));
    let cache = Arc::new(MemoryDailyCache::new());
    let vigil = Vigil::with_clock(config, clock)
        .await
        .unwrap()
        .with_cache(cache.clone());

    // Act
    let readings = vigil.readings().await;

    // Assert
    let cached = cache.get("readings", vigil.today()).await.unwrap().unwrap();
    let decoded: vigil_core::DailyReadings = serde_json::from_str(&cached).unwrap();
    assert_eq!(decoded, readings);
    assert_eq!(vigil.readings().await, readings);
}
