// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end card lifecycle tests.
//!
//! These tests drive a card the way a host does: state updates come in,
//! rows are drawn, and taps are dispatched against the last drawn row.

use jiff::Timestamp;
use serde_json::json;
use shoplist_core::{
    Card, CardError, ConfigError, Gesture, ItemConfig, Mutation, RemoteEntry, RowState,
    TapOutcome,
};

use crate::common::{MemoryList, test_config, test_quantity_config};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[tokio::test]
async fn card_lifecycle_toggle_flow() {
    // Arrange
    let list = MemoryList::with_entries(&["Bread"]);
    let card = Card::new(test_config("Milk"), list.clone()).unwrap();

    // Act - first state update draws the row
    let view = card
        .on_snapshot_changed(ts("2026-03-01T10:00:00Z"))
        .await
        .unwrap()
        .expect("first update should render");

    // Assert
    assert_eq!(view.state, RowState::Off);
    assert_eq!(view.icon, "mdi:plus");
    assert_eq!(view.title, "Milk");
    assert!(!view.busy);

    // Act - tap adds it
    let outcome = card.tap(&view, Gesture::Row).await.unwrap();
    assert_eq!(
        outcome,
        TapOutcome::Applied(Mutation::Add {
            text: "Milk".to_string()
        })
    );
    assert_eq!(list.texts().await, vec!["Bread", "Milk"]);

    // Assert - the next update renders even with a timestamp already seen
    let view = card
        .on_snapshot_changed(ts("2026-03-01T10:00:00Z"))
        .await
        .unwrap()
        .expect("update after a tap should render");
    assert_eq!(view.state, RowState::On);
    assert_eq!(view.icon, "mdi:check");

    // Act - tap again removes it
    card.tap(&view, Gesture::Row).await.unwrap();
    assert_eq!(list.texts().await, vec!["Bread"]);
}

#[tokio::test]
async fn card_lifecycle_skips_seen_updates() {
    // Arrange
    let list = MemoryList::with_entries(&["Milk"]);
    let card = Card::new(test_config("Milk"), list.clone()).unwrap();
    let t1 = ts("2026-03-01T10:00:00Z");
    let t2 = ts("2026-03-01T10:05:00Z");

    // Act & Assert
    assert!(card.on_snapshot_changed(t1).await.unwrap().is_some());
    assert_eq!(list.list_calls(), 1);

    assert!(card.on_snapshot_changed(t1).await.unwrap().is_none());
    assert_eq!(list.list_calls(), 1, "seen update must not fetch");

    assert!(card.on_snapshot_changed(t2).await.unwrap().is_some());
    assert_eq!(list.list_calls(), 2);

    // an explicit render always fetches
    card.render().await.unwrap();
    assert_eq!(list.list_calls(), 3);
}

#[tokio::test]
async fn card_lifecycle_fetch_failure_draws_nothing() {
    // Arrange
    let list = MemoryList::with_entries(&["Milk"]);
    list.fail_list(true);
    let card = Card::new(test_config("Milk"), list.clone()).unwrap();

    // Act
    let err = card
        .on_snapshot_changed(ts("2026-03-01T10:00:00Z"))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, CardError::SnapshotUnavailable(_)));
    assert!(err.to_string().starts_with("Error fetching items"), "{err}");
    assert!(list.mutations().await.is_empty());

    // a later update renders once the list is reachable again
    list.fail_list(false);
    let view = card
        .on_snapshot_changed(ts("2026-03-01T10:01:00Z"))
        .await
        .unwrap()
        .expect("new timestamp should render");
    assert!(view.is_on());
}

#[tokio::test]
async fn card_lifecycle_quantity_flow() {
    // Arrange
    let list = MemoryList::with_entries(&[]);
    let mut config = test_quantity_config("Eggs");
    config.subtitle = Some("Large".to_string());
    let card = Card::new(config, list.clone()).unwrap();
    assert_eq!(card.display_name(), "Eggs - Large");

    // Act & Assert - add, then walk the quantity up and down
    let view = card.render().await.unwrap();
    assert_eq!(view.quantity, None);
    card.tap(&view, Gesture::Row).await.unwrap();

    let view = card.render().await.unwrap();
    let controls = view.quantity.expect("present item shows controls");
    assert_eq!(controls.quantity, 1);
    assert!(!controls.decrement);

    card.tap(&view, Gesture::Increment).await.unwrap();
    let view = card.render().await.unwrap();
    assert_eq!(view.matched.matched_entry.as_deref(), Some("Eggs - Large (2)"));
    assert!(view.quantity.unwrap().decrement);

    // the row does nothing while more than one is on the list
    let outcome = card.tap(&view, Gesture::Row).await.unwrap();
    assert_eq!(outcome, TapOutcome::Ignored);

    card.tap(&view, Gesture::Decrement).await.unwrap();
    let view = card.render().await.unwrap();
    assert_eq!(list.texts().await, vec!["Eggs - Large"]);

    card.tap(&view, Gesture::Row).await.unwrap();
    assert!(list.texts().await.is_empty());
}

#[tokio::test]
async fn card_lifecycle_keeps_foreign_casing_and_entries() {
    // Arrange
    let list = MemoryList::with_entries(&[]);
    list.set_entries(vec![
        RemoteEntry::Other(json!(null)),
        RemoteEntry::from("MILK (3)"),
        RemoteEntry::Other(json!({"summary": "Milk"})),
    ])
    .await;
    let card = Card::new(test_quantity_config("Milk"), list.clone()).unwrap();

    // Act
    let view = card.render().await.unwrap();
    card.tap(&view, Gesture::Increment).await.unwrap();

    // Assert - the stored text is used as-is, the new text from the config
    assert_eq!(
        list.mutations().await,
        vec![Mutation::Rename {
            from: "MILK (3)".to_string(),
            to: "Milk (4)".to_string(),
        }]
    );
    assert_eq!(list.entries().await.len(), 3);
}

#[tokio::test]
async fn card_lifecycle_surfaces_tap_failures() {
    // Arrange
    let list = MemoryList::with_entries(&[]);
    let card = Card::new(test_config("Milk"), list.clone()).unwrap();
    let view = card.render().await.unwrap();

    // Act
    list.fail_mutations(true);
    let err = card.tap(&view, Gesture::Row).await.unwrap_err();

    // Assert
    assert!(matches!(err, CardError::Tap(_)));
    assert!(!card.is_busy());
}

#[tokio::test]
async fn card_lifecycle_signals_refresh() {
    let list = MemoryList::with_entries(&[]);
    let card = Card::new(test_config("Milk"), list.clone()).unwrap();
    let mut refresh = card.subscribe_refresh();

    let view = card.render().await.unwrap();
    card.tap(&view, Gesture::Row).await.unwrap();

    assert!(refresh.has_changed().unwrap());
    assert_eq!(*refresh.borrow_and_update(), 1);
}

#[tokio::test]
async fn card_lifecycle_rejects_invalid_config() {
    let list = MemoryList::with_entries(&[]);

    let err = Card::new(ItemConfig::new("", "todo.test_list"), list.clone()).unwrap_err();
    assert!(matches!(err, CardError::Config(ConfigError::MissingTitle)));
    assert_eq!(err.to_string(), "You must define a title.");

    let err = Card::new(ItemConfig::new("Milk", ""), list.clone()).unwrap_err();
    assert!(matches!(
        err,
        CardError::Config(ConfigError::MissingListSource)
    ));
    assert_eq!(err.to_string(), "You must define a todo_list entity_id.");
}
