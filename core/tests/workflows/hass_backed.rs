// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Cards talking to a mocked Home Assistant instance.

use std::sync::Arc;

use serde_json::json;
use shoplist_core::{Card, CardError, Gesture, Mutation, RowState, TapOutcome};
use shoplist_hass::{HassClient, HassConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_quantity_config;

fn client(server: &MockServer) -> Arc<HassClient> {
    let config = HassConfig {
        base_url: server.uri(),
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    Arc::new(HassClient::new(config).unwrap())
}

async fn mount_items(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/services/todo/get_items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "changed_states": [],
            "service_response": {
                "todo.test_list": { "items": items }
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn hass_backed_increment_renames_item() {
    // Arrange
    let server = MockServer::start().await;
    mount_items(
        &server,
        json!([
            {"summary": "Bread", "uid": "1", "status": "needs_action"},
            {"summary": "milk (2)", "uid": "2", "status": "needs_action"}
        ]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/services/todo/update_item"))
        .and(body_json(json!({
            "entity_id": "todo.test_list",
            "item": "milk (2)",
            "rename": "Milk (3)"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let card = Card::new(test_quantity_config("Milk"), client(&server)).unwrap();

    // Act
    let view = card.render().await.unwrap();
    let outcome = card.tap(&view, Gesture::Increment).await.unwrap();

    // Assert
    assert_eq!(view.state, RowState::On);
    assert_eq!(view.quantity.unwrap().quantity, 2);
    assert_eq!(
        outcome,
        TapOutcome::Applied(Mutation::Rename {
            from: "milk (2)".to_string(),
            to: "Milk (3)".to_string(),
        })
    );
}

#[tokio::test]
async fn hass_backed_row_adds_missing_item() {
    // Arrange
    let server = MockServer::start().await;
    mount_items(&server, json!([{"summary": null, "uid": "1", "status": "completed"}])).await;
    Mock::given(method("POST"))
        .and(path("/api/services/todo/add_item"))
        .and(body_json(json!({"entity_id": "todo.test_list", "item": "Milk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let card = Card::new(test_quantity_config("Milk"), client(&server)).unwrap();

    // Act
    let view = card.render().await.unwrap();
    let outcome = card.tap(&view, Gesture::Row).await.unwrap();

    // Assert
    assert_eq!(view.state, RowState::Off);
    assert!(matches!(outcome, TapOutcome::Applied(Mutation::Add { .. })));
}

#[tokio::test]
async fn hass_backed_service_error_surfaces() {
    // Arrange
    let server = MockServer::start().await;
    mount_items(&server, json!([{"summary": "Milk", "uid": "1", "status": "needs_action"}]))
        .await;
    Mock::given(method("POST"))
        .and(path("/api/services/todo/remove_item"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Unable to find to-do list item"))
        .mount(&server)
        .await;

    let card = Card::new(test_quantity_config("Milk"), client(&server)).unwrap();

    // Act
    let view = card.render().await.unwrap();
    let err = card.tap(&view, Gesture::Row).await.unwrap_err();

    // Assert
    assert!(matches!(err, CardError::Tap(_)));
    assert!(!card.is_busy());
}

#[tokio::test]
async fn hass_backed_unreachable_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/todo/get_items"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let card = Card::new(test_quantity_config("Milk"), client(&server)).unwrap();
    let err = card.render().await.unwrap_err();
    assert!(matches!(err, CardError::SnapshotUnavailable(_)));
}
