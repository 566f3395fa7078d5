// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Home Assistant client for to-do list operations.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};

use crate::config::HassConfig;
use crate::error::HassError;
use crate::http::HttpClient;
use crate::types::{EntityId, EntityState, TodoItem};

/// Home Assistant client for reading and editing to-do list entities.
///
/// # Example
///
/// ```ignore
/// use shoplist_hass::{HassClient, HassConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HassConfig {
///     base_url: "http://homeassistant.local:8123".to_string(),
///     token: Some("long-lived-token".to_string()),
///     ..Default::default()
/// };
///
/// let client = HassClient::new(config)?;
/// let items = client.get_items(&"todo.shopping_list".into()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HassClient {
    http: Arc<HttpClient>,
}

impl HassClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable or HTTP client
    /// initialization fails.
    pub fn new(config: HassConfig) -> Result<Self, HassError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Fetches the state object of an entity.
    ///
    /// Returns `None` if the entity does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn get_state(&self, entity: &EntityId) -> Result<Option<EntityState>, HassError> {
        let path = format!("/api/states/{entity}");
        let req = self.http.build_request(Method::GET, &path);
        let resp = match self.http.execute(req).await {
            Ok(resp) => resp,
            Err(HassError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let state = resp.json().await?;
        Ok(Some(state))
    }

    /// Lists all items of a to-do list entity, in the order the integration
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails or the response does not
    /// contain the items of `entity`.
    pub async fn get_items(&self, entity: &EntityId) -> Result<Vec<TodoItem>, HassError> {
        tracing::debug!(%entity, "fetching todo items");
        let resp = self
            .call_service("get_items?return_response", json!({ "entity_id": entity }))
            .await?;

        let body: Value = resp.json().await?;
        let items = body
            .get("service_response")
            .and_then(|a| a.get(entity.as_str()))
            .and_then(|a| a.get("items"))
            .cloned()
            .ok_or_else(|| {
                HassError::InvalidResponse(format!("no items for {entity} in service response"))
            })?;

        Ok(serde_json::from_value(items)?)
    }

    /// Adds a new item to a to-do list entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub async fn add_item(&self, entity: &EntityId, item: &str) -> Result<(), HassError> {
        tracing::debug!(%entity, item, "adding todo item");
        self.call_service("add_item", json!({ "entity_id": entity, "item": item }))
            .await?;
        Ok(())
    }

    /// Removes the item whose summary (or uid) is `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub async fn remove_item(&self, entity: &EntityId, item: &str) -> Result<(), HassError> {
        tracing::debug!(%entity, item, "removing todo item");
        self.call_service("remove_item", json!({ "entity_id": entity, "item": item }))
            .await?;
        Ok(())
    }

    /// Renames the item whose summary (or uid) is `item` to `rename`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub async fn update_item(
        &self,
        entity: &EntityId,
        item: &str,
        rename: &str,
    ) -> Result<(), HassError> {
        tracing::debug!(%entity, item, rename, "renaming todo item");
        self.call_service(
            "update_item",
            json!({ "entity_id": entity, "item": item, "rename": rename }),
        )
        .await?;
        Ok(())
    }

    /// Calls a service of the `todo` domain with a JSON body.
    async fn call_service(&self, service: &str, body: Value) -> Result<reqwest::Response, HassError> {
        let path = format!("/api/services/todo/{service}");
        let req = self.http.build_request(Method::POST, &path).json(&body);
        self.http.execute(req).await
    }
}
