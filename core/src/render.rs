// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::ItemConfig;
use crate::matcher::MatchResult;
use crate::palette::{Palette, to_rgba};

const BACKGROUND_ALPHA: f32 = 0.2;

/// Whether the item is on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    /// On the list.
    On,

    /// Not on the list.
    Off,
}

/// Quantity controls shown next to an item that is on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct QuantityControls {
    /// Current quantity.
    pub quantity: u32,

    /// Whether the "-" control is shown. Hidden at quantity 1.
    pub decrement: bool,

    /// Whether the "+" control is shown.
    pub increment: bool,
}

/// Everything needed to draw one row, and to dispatch a tap against it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RowView {
    pub state: RowState,
    pub icon: String,
    /// Icon and accent color, usually `#rrggbb`.
    pub foreground: String,
    /// Icon background, `rgba()` of the foreground when it is hex.
    pub background: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub quantity: Option<QuantityControls>,
    /// Name the item is stored under.
    pub display_name: String,
    /// Match this row was drawn from.
    pub matched: MatchResult,
    /// Whether a mutation was in flight when the row was drawn.
    pub busy: bool,
}

impl RowView {
    /// Whether the item is on the list.
    pub fn is_on(&self) -> bool {
        self.state == RowState::On
    }
}

/// Builds [`RowView`]s from match results.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowRenderer {
    palette: Palette,
}

impl RowRenderer {
    /// Draws the row for `config` given this cycle's match.
    pub fn render(&self, config: &ItemConfig, matched: MatchResult, busy: bool) -> RowView {
        let p = &self.palette;
        let (state, icon, color, fallback) = if matched.present {
            let icon = config.on_icon.as_deref().unwrap_or(p.on_icon);
            let color = config.on_color.as_deref().unwrap_or(p.on_color);
            (RowState::On, icon, color, p.on_fallback)
        } else {
            let icon = config.off_icon.as_deref().unwrap_or(p.off_icon);
            let color = config.off_color.as_deref().unwrap_or(p.off_color);
            (RowState::Off, icon, color, p.off_fallback)
        };

        let foreground = p.resolve(color).unwrap_or_else(|| fallback.to_owned());
        let background = to_rgba(&foreground, BACKGROUND_ALPHA);

        let quantity = (matched.present && config.quantity_enabled()).then_some(QuantityControls {
            quantity: matched.quantity,
            decrement: matched.quantity > 1,
            increment: true,
        });

        RowView {
            state,
            icon: icon.to_owned(),
            foreground,
            background,
            title: config.title.clone(),
            subtitle: config.subtitle().map(str::to_owned),
            quantity,
            display_name: config.display_name(),
            matched,
            busy,
        }
    }
}
