// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! [`ListSource`] backed by the Home Assistant to-do services.

use async_trait::async_trait;
use shoplist_hass::{EntityId, HassClient};

use crate::source::{ListSource, RemoteEntry, SourceError};

#[async_trait]
impl ListSource for HassClient {
    async fn list_items(&self, list: &str) -> Result<Vec<RemoteEntry>, SourceError> {
        let items = self.get_items(&EntityId::from(list)).await?;
        Ok(items
            .into_iter()
            .map(|item| match item.summary_text() {
                Some(text) => RemoteEntry::from(text),
                None => RemoteEntry::Other(item.summary),
            })
            .collect())
    }

    async fn add_item(&self, list: &str, text: &str) -> Result<(), SourceError> {
        HassClient::add_item(self, &EntityId::from(list), text).await?;
        Ok(())
    }

    async fn remove_item(&self, list: &str, text: &str) -> Result<(), SourceError> {
        HassClient::remove_item(self, &EntityId::from(list), text).await?;
        Ok(())
    }

    async fn rename_item(&self, list: &str, old: &str, new: &str) -> Result<(), SourceError> {
        self.update_item(&EntityId::from(list), old, new).await?;
        Ok(())
    }
}
