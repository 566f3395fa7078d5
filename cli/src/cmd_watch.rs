// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, sync::Arc, time::Duration};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use futures::future::select_all;
use jiff::Zoned;
use shoplist_core::{Card, Gesture};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::cli::Context;
use crate::cmd_tap::describe;
use crate::row_formatter::{ItemRow, RowFormatter};
use crate::util::{arg_item, get_item};

#[derive(Debug, Clone)]
pub struct CmdWatch {
    pub item: Option<String>,
    pub interval: Duration,
}

impl CmdWatch {
    pub const NAME: &str = "watch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Follow items as their lists change, tapping them from stdin")
            .long_about(
                "\
Follow items as their lists change. Rows are redrawn whenever Home Assistant reports a new \
state for their list. Type an item key to tap its row, or append + or - to tap its quantity \
controls. Press Ctrl-C to quit.",
            )
            .arg(arg_item(false))
            .arg(
                arg!(-i --interval <SECS> "Seconds between polls")
                    .value_parser(value_parser!(u64).range(1..))
                    .default_value("5"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let secs = matches.get_one::<u64>("interval").copied().unwrap_or(5);
        Self {
            item: get_item(matches),
            interval: Duration::from_secs(secs),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "watching items...");

        let mut cards = Vec::new();
        for (name, item) in ctx.config.select(self.item.as_deref())? {
            cards.push((name.to_owned(), Arc::new(ctx.card(item)?)));
        }
        let mut refresh: Vec<_> = cards.iter().map(|(_, c)| c.subscribe_refresh()).collect();

        let formatter = RowFormatter::new();
        let mut ticker = tokio::time::interval(self.interval);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let mut taps = JoinSet::new();

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("interrupted, stop watching");
                    break;
                }

                _ = ticker.tick() => {
                    for (name, card) in &cards {
                        if let Some(row) = poll(ctx, name, card).await {
                            print_row(&formatter, row);
                        }
                    }
                }

                // goes through the poll so the next tick skips the same update
                Some(i) = next_refresh(&mut refresh) => {
                    let (name, card) = &cards[i];
                    if let Some(row) = poll(ctx, name, card).await {
                        print_row(&formatter, row);
                    }
                }

                Some(joined) = taps.join_next(), if !taps.is_empty() => {
                    if let Err(e) = joined {
                        tracing::warn!(err = %e, "tap task failed");
                    }
                }

                line = lines.next_line(), if stdin_open => match line {
                    Ok(Some(line)) => tap_from_line(&mut taps, &cards, &line),
                    Ok(None) => stdin_open = false,
                    Err(e) => {
                        tracing::warn!(err = %e, "failed to read stdin, taps disabled");
                        stdin_open = false;
                    }
                },
            }
        }

        drain_taps(&mut taps).await;
        Ok(())
    }
}

/// Checks the list state of one card and draws it if the list changed since
/// the last poll.
async fn poll(ctx: &Context, name: &str, card: &Card) -> Option<ItemRow> {
    let state = match ctx.list_state(card.config()).await {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(name, err = %e, "failed to poll list state");
            return Some(ItemRow::failed(name, e));
        }
    };

    match card.on_snapshot_changed(state.last_updated).await {
        Ok(view) => view.map(|view| ItemRow::drawn(name, view)),
        Err(e) => Some(ItemRow::failed(name, e)),
    }
}

/// Waits for the first card whose controller signals a refresh.
async fn next_refresh(receivers: &mut [watch::Receiver<u64>]) -> Option<usize> {
    if receivers.is_empty() {
        return std::future::pending().await;
    }

    let changed = receivers.iter_mut().map(|a| Box::pin(a.changed()));
    let (result, i, _) = select_all(changed).await;
    result.ok().map(|()| i)
}

/// Taps the card named on `line` without waiting for the list call, so that
/// taps typed while a change is in flight are reported busy.
fn tap_from_line(taps: &mut JoinSet<()>, cards: &[(String, Arc<Card>)], line: &str) {
    let Some((name, gesture)) = parse_tap(line) else {
        return;
    };
    let Some((name, card)) = cards.iter().find(|(n, _)| n == name) else {
        println!("{} no item named `{name}` is watched", "Error:".red());
        return;
    };

    let name = name.clone();
    let card = card.clone();
    taps.spawn(async move {
        let view = match card.render().await {
            Ok(view) => view,
            Err(e) => return println!("{} {name}: {e}", "Error:".red()),
        };
        match card.tap(&view, gesture).await {
            Ok(outcome) => println!("{name}: {}", describe(&outcome, gesture, view.is_on())),
            Err(e) => println!("{} {name}: {e}", "Error:".red()),
        }
    });
}

/// Waits for taps still in flight so that no list change is cut off.
async fn drain_taps(taps: &mut JoinSet<()>) {
    if !taps.is_empty() {
        tracing::info!(count = taps.len(), "waiting for taps in flight");
    }
    while let Some(joined) = taps.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(err = %e, "tap task failed");
        }
    }
}

/// Splits `milk +` into the item key and the gesture. A bare key taps the row.
fn parse_tap(line: &str) -> Option<(&str, Gesture)> {
    let line = line.trim();
    let (name, gesture) = match line.rsplit_once(char::is_whitespace) {
        Some((name, "+")) => (name.trim_end(), Gesture::Increment),
        Some((name, "-")) => (name.trim_end(), Gesture::Decrement),
        _ => (line, Gesture::Row),
    };
    (!name.is_empty()).then_some((name, gesture))
}

fn print_row(formatter: &RowFormatter, row: ItemRow) {
    let now = Zoned::now().strftime("%H:%M:%S");
    println!("{} {}", now.to_string().dimmed(), formatter.format(&[row]));
}
