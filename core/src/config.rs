// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde::de;

use crate::palette::Palette;

/// The name of the application.
pub const APP_NAME: &str = "shoplist";

/// Configuration of one item row.
///
/// Field names follow the card configuration used by Home Assistant
/// dashboards, so a YAML card config can be pasted over as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemConfig {
    /// Primary text of the row, required.
    #[serde(default)]
    pub title: String,

    /// Secondary text of the row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Entity id of the backing to-do list, e.g. `todo.shopping_list`.
    #[serde(default)]
    pub todo_list: String,

    /// Whether the quantity controls are enabled.
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_quantity: bool,

    /// Icon shown while the item is on the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_icon: Option<String>,

    /// Icon shown while the item is not on the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_icon: Option<String>,

    /// Color name or `#rrggbb` used while the item is on the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_color: Option<String>,

    /// Color name or `#rrggbb` used while the item is not on the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_color: Option<String>,

    /// Upper bound on how long one list mutation may hold the interaction lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_timeout: Option<LockTimeout>,
}

impl ItemConfig {
    /// Creates a config with the given title and list, everything else default.
    pub fn new(title: impl Into<String>, todo_list: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            todo_list: todo_list.into(),
            enable_quantity: false,
            on_icon: None,
            off_icon: None,
            on_color: None,
            off_color: None,
            lock_timeout: None,
        }
    }

    /// The config offered for a freshly added item.
    pub fn stub() -> Self {
        Self::new("New Item", "")
    }

    /// The name this item is stored under on the list:
    /// `"{title} - {subtitle}"`, or just the title without a subtitle.
    pub fn display_name(&self) -> String {
        match self.subtitle() {
            Some(subtitle) => format!("{} - {}", self.title, subtitle),
            None => self.title.clone(),
        }
    }

    /// The subtitle, if set and non-empty.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|a| !a.is_empty())
    }

    /// Whether the quantity controls are enabled.
    pub fn quantity_enabled(&self) -> bool {
        self.enable_quantity
    }

    /// The configured lock timeout, if any.
    pub fn lock_timeout(&self) -> Option<Duration> {
        self.lock_timeout.map(|a| a.0)
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or the to-do list is missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingTitle);
        }
        if self.todo_list.trim().is_empty() {
            return Err(ConfigError::MissingListSource);
        }
        Ok(())
    }

    /// Returns a copy with every field that equals its default cleared, so
    /// that serializing it only emits what the user actually changed.
    #[must_use]
    pub fn to_minimal(&self, palette: &Palette) -> Self {
        fn non_default(value: Option<&String>, default: &str) -> Option<String> {
            value.filter(|a| !a.is_empty() && *a != default).cloned()
        }

        Self {
            title: self.title.clone(),
            subtitle: self.subtitle().map(str::to_owned),
            todo_list: self.todo_list.clone(),
            enable_quantity: self.enable_quantity,
            on_icon: non_default(self.on_icon.as_ref(), palette.on_icon),
            off_icon: non_default(self.off_icon.as_ref(), palette.off_icon),
            on_color: non_default(self.on_color.as_ref(), palette.on_color),
            off_color: non_default(self.off_color.as_ref(), palette.off_color),
            lock_timeout: self.lock_timeout,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(v: &bool) -> bool {
    !*v
}

/// Errors found while validating an [`ItemConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `title` is missing or blank.
    #[error("You must define a title.")]
    MissingTitle,

    /// `todo_list` is missing or blank.
    #[error("You must define a todo_list entity_id.")]
    MissingListSource,
}

/// A timeout for the interaction lock, written as `"HH:MM"`, `"2h"`,
/// `"30m"`, `"45s"` or `"500ms"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockTimeout(pub Duration);

impl serde::Serialize for LockTimeout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("{}ms", self.0.as_millis()))
    }
}

impl<'de> serde::Deserialize<'de> for LockTimeout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeoutVisitor;

        impl de::Visitor<'_> for TimeoutVisitor {
            type Value = LockTimeout;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a duration string like "HH:MM", "2h", "30m", "45s", or "500ms""#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(LockTimeout)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(TimeoutVisitor)
    }
}

/// Parse a duration string in the format "HH:MM" / "2h" / "30m" / "45s" / "500ms".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn Error>> {
    // Try to parse "HH:MM" format
    let secs = if let Some((h, m)) = s.split_once(':') {
        let hours: u64 = h.trim().parse()?;
        let minutes: u64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|a| a.checked_add(minutes))
            .and_then(|a| a.checked_mul(60))
    }
    // Match suffix-based formats, "ms" before "m" and "s"
    else if let Some(rest) = s.strip_suffix("ms") {
        let millis: u64 = rest.trim().parse()?;
        return Ok(Duration::from_millis(millis));
    } else if let Some(rest) = s.strip_suffix('h') {
        let hours: u64 = rest.trim().parse()?;
        hours.checked_mul(3600)
    } else if let Some(rest) = s.strip_suffix('m') {
        let minutes: u64 = rest.trim().parse()?;
        minutes.checked_mul(60)
    } else if let Some(rest) = s.strip_suffix('s') {
        Some(rest.trim().parse()?)
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };

    secs.map(Duration::from_secs)
        .ok_or_else(|| format!("Duration out of range: {s}").into())
}
