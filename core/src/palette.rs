// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Named colors and default icons used when drawing a row.

/// Read-only lookup tables for row appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Named colors, `(name, "#rrggbb")`.
    pub colors: &'static [(&'static str, &'static str)],
    /// Icon used while the item is on the list.
    pub on_icon: &'static str,
    /// Icon used while the item is not on the list.
    pub off_icon: &'static str,
    /// Color name used while the item is on the list.
    pub on_color: &'static str,
    /// Color name used while the item is not on the list.
    pub off_color: &'static str,
    /// Hex used when the on color resolves to nothing.
    pub on_fallback: &'static str,
    /// Hex used when the off color resolves to nothing.
    pub off_fallback: &'static str,
}

impl Palette {
    /// The Material Design palette shipped with Home Assistant.
    pub const MATERIAL: Palette = Palette {
        colors: &[
            ("red", "#F44336"),
            ("pink", "#E91E63"),
            ("purple", "#9C27B0"),
            ("deep-purple", "#673AB7"),
            ("indigo", "#3F51B5"),
            ("blue", "#2196F3"),
            ("light-blue", "#03A9F4"),
            ("cyan", "#00BCD4"),
            ("teal", "#009688"),
            ("green", "#4CAF50"),
            ("lime", "#CDDC39"),
            ("yellow", "#FFEB3B"),
            ("amber", "#FFC107"),
            ("orange", "#FF9800"),
            ("brown", "#795548"),
            ("grey", "#9E9E9E"),
            ("blue-grey", "#607D8B"),
        ],
        on_icon: "mdi:check",
        off_icon: "mdi:plus",
        on_color: "green",
        off_color: "grey",
        on_fallback: "#4CAF50",
        off_fallback: "#808080",
    };

    /// Looks up a named color.
    pub fn hex(&self, name: &str) -> Option<&'static str> {
        self.colors
            .iter()
            .find_map(|(k, v)| (*k == name).then_some(*v))
    }

    /// Resolves a configured color value.
    ///
    /// Hex values pass through, known names map to their hex, anything else
    /// is handed to the frontend untouched. Empty values resolve to `None`.
    pub fn resolve(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else if value.starts_with('#') {
            Some(value.to_owned())
        } else {
            Some(self.hex(value).unwrap_or(value).to_owned())
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MATERIAL
    }
}

/// Parses `#rrggbb` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Formats `hex` as a CSS `rgba()` with the given alpha, or returns it
/// unchanged if it is not a `#rrggbb` value.
pub fn to_rgba(hex: &str, alpha: f32) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => hex.to_owned(),
    }
}
