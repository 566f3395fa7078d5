// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use colored::Color;
use shoplist_core::hex_to_rgb;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_item(required: bool) -> Arg {
    let help = if required {
        "Key of the item in the config"
    } else {
        "Key of the item in the config, all items if omitted"
    };
    arg!(item: [ITEM]).help(help).required(required)
}

pub fn get_item(matches: &ArgMatches) -> Option<String> {
    matches.get_one("item").cloned()
}

/// Terminal color for a resolved row color. Anything that is not `#rrggbb`,
/// e.g. a CSS variable, gets no color.
pub fn terminal_color(color: &str) -> Option<Color> {
    hex_to_rgb(color).map(|(r, g, b)| Color::TrueColor { r, g, b })
}
