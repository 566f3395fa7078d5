// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! At most one mutation in flight per controller.

use std::sync::Arc;
use std::time::Duration;

use shoplist_core::{Gesture, InteractionController, MatchResult, Mutation, TapError, TapOutcome};

use crate::common::{MemoryList, present, wait_until_busy};

#[tokio::test]
async fn single_flight_drops_second_tap() {
    // Arrange
    let list = MemoryList::with_entries(&["Milk (2)"]);
    list.hold().await;
    let controller = Arc::new(InteractionController::new(
        list.clone(),
        "todo.test_list",
        true,
    ));

    // Act - first tap parks inside the list call
    let first = tokio::spawn({
        let controller = controller.clone();
        async move {
            controller
                .handle_tap(Gesture::Increment, &present("Milk (2)", 2), "Milk")
                .await
        }
    });
    wait_until_busy(&controller).await;

    let second = controller
        .handle_tap(Gesture::Decrement, &present("Milk (2)", 2), "Milk")
        .await
        .unwrap();

    // Assert - dropped, not queued
    assert_eq!(second, TapOutcome::Busy);
    assert_eq!(list.mutations().await.len(), 1);

    list.release().await;
    let first = first.await.unwrap().unwrap();
    assert!(matches!(first, TapOutcome::Applied(Mutation::Rename { .. })));
    assert!(!controller.is_busy());
    assert_eq!(list.mutations().await.len(), 1);
    assert_eq!(list.texts().await, vec!["Milk (3)"]);
}

#[tokio::test]
async fn single_flight_drops_no_op_taps_too() {
    let list = MemoryList::with_entries(&[]);
    list.hold().await;
    let controller = Arc::new(InteractionController::new(
        list.clone(),
        "todo.test_list",
        false,
    ));

    let first = tokio::spawn({
        let controller = controller.clone();
        async move {
            controller
                .handle_tap(Gesture::Row, &MatchResult::absent(), "Milk")
                .await
        }
    });
    wait_until_busy(&controller).await;

    for gesture in [Gesture::Row, Gesture::Increment, Gesture::Decrement] {
        let outcome = controller
            .handle_tap(gesture, &MatchResult::absent(), "Milk")
            .await
            .unwrap();
        assert_eq!(outcome, TapOutcome::Busy);
    }

    list.release().await;
    first.await.unwrap().unwrap();
    assert_eq!(list.texts().await, vec!["Milk"]);
}

#[tokio::test]
async fn single_flight_releases_lock_on_failure() {
    // Arrange
    let list = MemoryList::with_entries(&["Milk"]);
    list.fail_mutations(true);
    let controller = InteractionController::new(list.clone(), "todo.test_list", false);

    // Act
    let err = controller
        .handle_tap(Gesture::Row, &present("Milk", 1), "Milk")
        .await
        .unwrap_err();

    // Assert - error surfaced, list untouched, lock free
    assert!(matches!(err, TapError::Source(_)), "{err}");
    assert!(!controller.is_busy());
    assert_eq!(list.texts().await, vec!["Milk"]);

    // the next tap is accepted
    list.fail_mutations(false);
    let outcome = controller
        .handle_tap(Gesture::Row, &present("Milk", 1), "Milk")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        TapOutcome::Applied(Mutation::Remove {
            text: "Milk".to_string()
        })
    );
    assert_eq!(list.mutations().await.len(), 2);
    assert!(list.texts().await.is_empty());
}

#[tokio::test]
async fn single_flight_releases_lock_on_timeout() {
    let list = MemoryList::with_entries(&[]);
    list.hold().await;
    let controller = InteractionController::new(list.clone(), "todo.test_list", false)
        .with_timeout(Some(Duration::from_millis(20)));

    let err = controller
        .handle_tap(Gesture::Row, &MatchResult::absent(), "Milk")
        .await
        .unwrap_err();
    assert!(matches!(err, TapError::TimedOut(d) if d == Duration::from_millis(20)));
    assert!(!controller.is_busy());

    list.release().await;
    let outcome = controller
        .handle_tap(Gesture::Row, &MatchResult::absent(), "Milk")
        .await
        .unwrap();
    assert!(matches!(outcome, TapOutcome::Applied(Mutation::Add { .. })));
}

#[tokio::test]
async fn single_flight_releases_lock_when_tap_is_dropped() {
    let list = MemoryList::with_entries(&[]);
    list.hold().await;
    let controller = Arc::new(InteractionController::new(
        list.clone(),
        "todo.test_list",
        false,
    ));

    let task = tokio::spawn({
        let controller = controller.clone();
        async move {
            controller
                .handle_tap(Gesture::Row, &MatchResult::absent(), "Milk")
                .await
        }
    });
    wait_until_busy(&controller).await;

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(!controller.is_busy());
}
