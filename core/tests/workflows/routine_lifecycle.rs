// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Routine lifecycle workflow tests.
//!
//! These tests drive routine items through add, check off, reopen and
//! remove against the local database.

use jiff::civil::date;
use vigil_core::{BackendError, RoutineSlot, Vigil};

use crate::common::{fixed_clock, setup_temp_state, test_config, test_draft, zoned};

#[tokio::test]
async fn routine_add_then_list_in_slot_order() {
    // Arrange
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock.clone())
        .await
        .unwrap();

    // Act
    let compline = vigil
        .add_routine(test_draft("Compline", RoutineSlot::Night))
        .await
        .unwrap();
    let lauds = vigil
        .add_routine(test_draft("Lauds", RoutineSlot::Morning))
        .await
        .unwrap();

    // Assert
    let items = vigil.list_routine().await.unwrap();
    let ids: Vec<_> = items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec![lauds.id.as_str(), compline.id.as_str()]);
    assert!(items.iter().all(|a| a.user_id == "tester"));
    assert!(items.iter().all(|a| !a.is_done_on(vigil.today())));
}

#[tokio::test]
async fn routine_rejects_empty_title() {
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();

    let result = vigil
        .add_routine(test_draft("   ", RoutineSlot::Morning))
        .await;

    assert!(result.is_err());
    assert!(vigil.list_routine().await.unwrap().is_empty());
}

#[tokio::test]
async fn routine_done_resets_on_next_day() {
    // Arrange
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 22));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock.clone())
        .await
        .unwrap();
    let item = vigil
        .add_routine(test_draft("Examen", RoutineSlot::Night))
        .await
        .unwrap();

    // Act
    let done = vigil.complete_routine(&item.id).await.unwrap();

    // Assert - checked off on the local day, even though UTC already rolled over
    assert_eq!(done.completed_on, Some(date(2025, 3, 10)));
    let stored = vigil.get_routine(&item.id).await.unwrap();
    assert!(stored.is_done_on(vigil.today()));

    // Act - a new day begins
    clock.advance_days(1).unwrap();

    // Assert
    let stored = vigil.get_routine(&item.id).await.unwrap();
    assert!(!stored.is_done_on(vigil.today()));
    assert_eq!(stored.completed_on, Some(date(2025, 3, 10)));
}

#[tokio::test]
async fn routine_undo_clears_check_mark() {
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();
    let item = vigil
        .add_routine(test_draft("Angelus", RoutineSlot::Midday))
        .await
        .unwrap();
    vigil.complete_routine(&item.id).await.unwrap();

    let reopened = vigil.reopen_routine(&item.id).await.unwrap();

    assert_eq!(reopened.completed_on, None);
    let stored = vigil.get_routine(&item.id).await.unwrap();
    assert!(!stored.is_done_on(vigil.today()));
}

#[tokio::test]
async fn routine_resolves_unique_id_prefix() {
    // Arrange
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();
    let item = vigil
        .add_routine(test_draft("Rosary", RoutineSlot::Evening))
        .await
        .unwrap();

    // Act
    let found = vigil.get_routine(&item.id[..8]).await.unwrap();

    // Assert
    assert_eq!(found.id, item.id);
    assert!(matches!(
        vigil.get_routine("zzzz").await,
        Err(BackendError::NotFound(_))
    ));
}

#[tokio::test]
async fn routine_remove_deletes_item() {
    // Arrange
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();
    let keep = vigil
        .add_routine(test_draft("Lauds", RoutineSlot::Morning))
        .await
        .unwrap();
    let vespers = vigil
        .add_routine(test_draft("Vespers", RoutineSlot::Evening))
        .await
        .unwrap();

    // Act
    let removed = vigil.remove_routine(&vespers.id).await.unwrap();

    // Assert
    assert_eq!(removed.title, "Vespers");
    let items = vigil.list_routine().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, keep.id);
    assert!(matches!(
        vigil.remove_routine(&vespers.id).await,
        Err(BackendError::NotFound(_))
    ));
}

#[tokio::test]
async fn routine_persists_across_restarts() {
    // Arrange
    let temp_state = setup_temp_state().await.unwrap();
    let clock = fixed_clock(zoned(2025, 3, 10, 7));
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock.clone())
        .await
        .unwrap();
    let item = vigil
        .add_routine(test_draft("Lectio", RoutineSlot::Morning))
        .await
        .unwrap();
    vigil.complete_routine(&item.id).await.unwrap();
    vigil.close().await.unwrap();

    // Act
    let vigil = Vigil::with_clock(test_config(&temp_state.state_dir), clock)
        .await
        .unwrap();

    // Assert
    let items = vigil.list_routine().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Lectio");
    assert!(items[0].is_done_on(vigil.today()));
}
