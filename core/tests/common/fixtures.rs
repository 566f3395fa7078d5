// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use shoplist_core::{ItemConfig, MatchResult};

/// List id used by every fixture.
pub const TEST_LIST: &str = "todo.test_list";

/// Creates a config for `title` on the test list, quantity disabled.
#[must_use]
pub fn test_config(title: &str) -> ItemConfig {
    ItemConfig::new(title, TEST_LIST)
}

/// Creates a config for `title` on the test list, quantity enabled.
#[must_use]
pub fn test_quantity_config(title: &str) -> ItemConfig {
    let mut config = test_config(title);
    config.enable_quantity = true;
    config
}

/// A match for `entry` with the given quantity.
#[must_use]
pub fn present(entry: &str, quantity: u32) -> MatchResult {
    MatchResult {
        present: true,
        quantity,
        matched_entry: Some(entry.to_string()),
    }
}
