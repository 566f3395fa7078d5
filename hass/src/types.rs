// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use jiff::Timestamp;

/// Entity identifier.
///
/// An `EntityId` names one entity on the Home Assistant instance, such as
/// `todo.shopping_list`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new `EntityId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EntityId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The state object of an entity, as returned by `GET /api/states/<entity_id>`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct EntityState {
    /// Entity the state belongs to.
    pub entity_id: EntityId,
    /// State string; for to-do entities this is the number of open items.
    pub state: String,
    /// Last time the state or its attributes changed.
    pub last_updated: Timestamp,
}

/// One item of a to-do list entity.
///
/// `summary` is kept as a raw JSON value: integrations are free to return
/// anything there, and callers decide what to do with non-string summaries.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TodoItem {
    /// Item text.
    #[serde(default)]
    pub summary: serde_json::Value,
    /// Integration specific item id.
    #[serde(default)]
    pub uid: Option<String>,
    /// `needs_action` or `completed`.
    #[serde(default)]
    pub status: Option<String>,
}

impl TodoItem {
    /// Returns the summary if it is a string.
    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_str()
    }
}
