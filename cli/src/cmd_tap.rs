// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use shoplist_core::{Gesture, Mutation, TapOutcome};

use crate::cli::Context;
use crate::row_formatter::{ItemRow, RowFormatter};
use crate::util::{ArgOutputFormat, arg_item, get_item};

#[derive(Debug, Clone)]
pub struct CmdTap {
    pub item: String,
    pub gesture: Gesture,
    pub output_format: ArgOutputFormat,
}

impl CmdTap {
    pub const NAME: &str = "tap";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("t")
            .about("Tap an item: toggle it on or off the list, or change its quantity")
            .arg(arg_item(true))
            .arg(arg!(--increment "Tap the \"+\" quantity control").conflicts_with("decrement"))
            .arg(arg!(--decrement "Tap the \"-\" quantity control"))
            .arg(
                arg!(--gesture <GESTURE> "What to tap")
                    .value_parser(value_parser!(Gesture))
                    .conflicts_with_all(["increment", "decrement"])
                    .hide(true),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let gesture = if matches.get_flag("increment") {
            Gesture::Increment
        } else if matches.get_flag("decrement") {
            Gesture::Decrement
        } else {
            matches.get_one("gesture").copied().unwrap_or_default()
        };

        Self {
            item: get_item(matches).expect("item is required"),
            gesture,
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "tapping item...");

        let item = ctx.config.item(&self.item)?;
        ctx.list_state(item).await?;
        let card = ctx.card(item)?;

        let view = card.render().await?;
        let outcome = card.tap(&view, self.gesture).await?;
        if self.output_format == ArgOutputFormat::Table {
            println!("{}", describe(&outcome, self.gesture, view.is_on()));
        }

        let rows = [ItemRow::drawn(&self.item, card.render().await?)];
        let formatter = RowFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}

/// One line telling what a tap did.
pub fn describe(outcome: &TapOutcome, gesture: Gesture, present: bool) -> String {
    match outcome {
        TapOutcome::Busy => format!("{} another change is still in flight", "Busy:".yellow()),
        TapOutcome::Ignored => {
            let reason = match (gesture, present) {
                (_, false) => "the item is not on the list",
                (Gesture::Row, true) => "lower the quantity to 1 first",
                (_, true) => "the quantity is already 1, tap the row to remove it",
            };
            format!("{} {reason}", "Nothing to do:".yellow())
        }
        TapOutcome::Applied(Mutation::Add { text }) => {
            format!("{} {text}", "Added:".green())
        }
        TapOutcome::Applied(Mutation::Remove { text }) => {
            format!("{} {text}", "Removed:".green())
        }
        TapOutcome::Applied(Mutation::Rename { from, to }) => {
            format!("{} {from} → {to}", "Renamed:".green())
        }
    }
}
