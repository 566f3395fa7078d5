// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keep one item on a remote to-do list: find it, toggle it, count it.

mod card;
mod config;
mod controller;
mod matcher;
mod palette;
mod remote;
mod render;
mod source;

pub use crate::card::{Card, CardError};
pub use crate::config::{APP_NAME, ConfigError, ItemConfig, LockTimeout};
pub use crate::controller::{
    Gesture, InteractionController, Mutation, TapError, TapOutcome, decide, encode_quantity,
};
pub use crate::matcher::{ItemMatcher, MatchResult, MatcherError, match_item};
pub use crate::palette::{Palette, hex_to_rgb, to_rgba};
pub use crate::render::{QuantityControls, RowRenderer, RowState, RowView};
pub use crate::source::{ListSource, RemoteEntry, SourceError};
