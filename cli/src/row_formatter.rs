// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use shoplist_core::{RowState, RowView};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, terminal_color};

/// One configured item, drawn or not.
#[derive(Debug, serde::Serialize)]
pub struct ItemRow {
    /// Key of the item in the config.
    pub name: String,

    #[serde(flatten)]
    pub view: Option<RowView>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemRow {
    pub fn drawn(name: impl Into<String>, view: RowView) -> Self {
        Self {
            name: name.into(),
            view: Some(view),
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            view: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct RowFormatter {
    columns: Vec<RowColumn>,
    format: ArgOutputFormat,
}

impl RowFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                RowColumn::State,
                RowColumn::Name,
                RowColumn::Quantity,
                RowColumn::Title,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [ItemRow]) -> Display<'a> {
        Display { inner: self, rows }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    inner: &'a RowFormatter,
    rows: &'a [ItemRow],
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                let table = Table {
                    columns: &self.inner.columns,
                    separator: " ",
                    padding: true,
                    data: self.rows,
                };
                write!(f, "{table}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RowColumn {
    State,
    Name,
    Quantity,
    Title,
}

impl Column<ItemRow> for RowColumn {
    fn format(&self, data: &ItemRow) -> String {
        let Some(view) = &data.view else {
            return match self {
                RowColumn::State => "!".to_string(),
                RowColumn::Name => data.name.clone(),
                RowColumn::Quantity => String::new(),
                RowColumn::Title => data.error.clone().unwrap_or_default(),
            };
        };

        match self {
            RowColumn::State => match (view.state, view.busy) {
                (_, true) => "…",
                (RowState::On, false) => "✔",
                (RowState::Off, false) => "+",
            }
            .to_string(),
            RowColumn::Name => data.name.clone(),
            RowColumn::Quantity => view
                .quantity
                .map(|q| {
                    let dec = if q.decrement { "-" } else { " " };
                    let inc = if q.increment { "+" } else { " " };
                    format!("{dec} {} {inc}", q.quantity)
                })
                .unwrap_or_default(),
            RowColumn::Title => match &view.subtitle {
                Some(subtitle) => format!("{} ({subtitle})", view.title),
                None => view.title.clone(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            RowColumn::Quantity => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &ItemRow) -> Option<Color> {
        match (self, &data.view) {
            (_, None) => Some(Color::Yellow),
            (RowColumn::State, Some(view)) => terminal_color(&view.foreground),
            (RowColumn::Title, Some(view)) if !view.is_on() => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
