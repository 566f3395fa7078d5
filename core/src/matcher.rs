// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Locating an item on a remote list.
//!
//! An item is stored under its display name, optionally followed by a
//! quantity suffix: `Milk`, `Milk (2)`, `Milk (3)`. Quantity 1 is always
//! stored without a suffix.

use regex::{Regex, RegexBuilder};

use crate::source::RemoteEntry;

/// Where, and how many of, an item sits on a list snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MatchResult {
    /// Whether the item is on the list.
    pub present: bool,

    /// Encoded quantity, 0 when absent.
    pub quantity: u32,

    /// The stored text that matched, with its original casing.
    pub matched_entry: Option<String>,
}

impl MatchResult {
    /// The result for an item that is not on the list.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Errors raised while building an [`ItemMatcher`].
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// The display name was empty.
    #[error("display name must not be empty")]
    EmptyName,

    /// The regex engine refused the pattern, e.g. because it is too large.
    #[error("failed to build item pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Finds one display name in list snapshots.
#[derive(Debug, Clone)]
pub struct ItemMatcher {
    display_name: String,
    regex: Regex,
}

impl ItemMatcher {
    /// Compiles a matcher for `display_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the pattern cannot be built.
    pub fn new(display_name: &str) -> Result<Self, MatcherError> {
        if display_name.is_empty() {
            return Err(MatcherError::EmptyName);
        }

        let pattern = format!(r"^{}(?: \(([0-9]+)\))?$", regex::escape(display_name));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self {
            display_name: display_name.to_owned(),
            regex,
        })
    }

    /// The display name this matcher looks for.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Matches a single text against the item, returning its quantity.
    pub fn quantity_of(&self, text: &str) -> Option<u32> {
        let caps = self.regex.captures(text)?;
        let quantity = match caps.get(1) {
            // only digits get here, so parsing fails on overflow alone
            Some(n) => n.as_str().parse().unwrap_or(u32::MAX),
            None => 1,
        };
        Some(quantity)
    }

    /// Scans `snapshot` in order and reports the first entry that matches.
    /// Non-text entries are skipped.
    pub fn find<'a>(&self, snapshot: impl IntoIterator<Item = &'a RemoteEntry>) -> MatchResult {
        snapshot
            .into_iter()
            .filter_map(RemoteEntry::as_text)
            .find_map(|text| {
                self.quantity_of(text).map(|quantity| MatchResult {
                    present: true,
                    quantity,
                    matched_entry: Some(text.to_owned()),
                })
            })
            .unwrap_or_default()
    }
}

/// One-shot helper: compiles a matcher for `display_name` and applies it.
///
/// # Errors
///
/// Returns an error if the matcher cannot be built, see [`ItemMatcher::new`].
pub fn match_item(
    display_name: &str,
    snapshot: &[RemoteEntry],
) -> Result<MatchResult, MatcherError> {
    Ok(ItemMatcher::new(display_name)?.find(snapshot))
}
