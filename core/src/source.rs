// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use async_trait::async_trait;

/// Error returned by a [`ListSource`].
pub type SourceError = Box<dyn Error + Send + Sync>;

/// One entry of a remote list, as returned by the host.
///
/// Hosts are expected to return text, but nothing forces an integration to;
/// anything else is kept as [`RemoteEntry::Other`] and never matches.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RemoteEntry {
    /// A plain text summary.
    Text(String),

    /// Any non-string value.
    Other(serde_json::Value),
}

impl RemoteEntry {
    /// Returns the text of the entry, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RemoteEntry::Text(a) => Some(a),
            RemoteEntry::Other(_) => None,
        }
    }
}

impl From<String> for RemoteEntry {
    fn from(value: String) -> Self {
        RemoteEntry::Text(value)
    }
}

impl From<&str> for RemoteEntry {
    fn from(value: &str) -> Self {
        RemoteEntry::Text(value.to_owned())
    }
}

impl From<serde_json::Value> for RemoteEntry {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(a) => RemoteEntry::Text(a),
            other => RemoteEntry::Other(other),
        }
    }
}

/// A remote to-do list that entries can be read from and written to.
///
/// `list` is an opaque identifier understood by the implementation, e.g. an
/// entity id for Home Assistant.
#[async_trait]
pub trait ListSource: fmt::Debug + Send + Sync {
    /// Returns the current entries in the order the host keeps them.
    async fn list_items(&self, list: &str) -> Result<Vec<RemoteEntry>, SourceError>;

    /// Appends a new entry with exactly `text`.
    async fn add_item(&self, list: &str, text: &str) -> Result<(), SourceError>;

    /// Removes the entry whose text equals `text`.
    async fn remove_item(&self, list: &str, text: &str) -> Result<(), SourceError>;

    /// Replaces the entry `old` with `new`.
    async fn rename_item(&self, list: &str, old: &str, new: &str) -> Result<(), SourceError>;
}
