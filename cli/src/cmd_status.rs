// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use futures::future::join_all;

use crate::cli::Context;
use crate::row_formatter::RowFormatter;
use crate::util::{ArgOutputFormat, arg_item, get_item};

#[derive(Debug, Clone)]
pub struct CmdStatus {
    pub item: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl Default for CmdStatus {
    fn default() -> Self {
        Self {
            item: None,
            output_format: ArgOutputFormat::Table,
        }
    }
}

impl CmdStatus {
    pub const NAME: &str = "status";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Show items and whether they are on their lists")
            .arg(arg_item(false))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            item: get_item(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "drawing item rows...");

        let items = ctx.config.select(self.item.as_deref())?;
        let rows = join_all(items.into_iter().map(|(name, item)| ctx.draw(name, item))).await;

        let formatter = RowFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}
