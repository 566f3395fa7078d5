// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, sync::Arc};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use shoplist_core::{APP_NAME, Card, ItemConfig};
use shoplist_hass::{EntityId, EntityState, HassClient};
use tracing_subscriber::EnvFilter;

use crate::cmd_init::CmdInit;
use crate::cmd_status::CmdStatus;
use crate::cmd_tap::CmdTap;
use crate::cmd_watch::CmdWatch;
use crate::config::{Config, parse_config};
use crate::row_formatter::ItemRow;

/// Run the shoplist command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep single items on a Home Assistant to-do list, with quantities.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to status
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/shoplist/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/shoplist/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdStatus::command())
            .subcommand(CmdTap::command())
            .subcommand(CmdWatch::command())
            .subcommand(CmdInit::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdStatus::NAME, matches)) => Status(CmdStatus::from(matches)),
            Some((CmdTap::NAME, matches)) => Tap(CmdTap::from(matches)),
            Some((CmdWatch::NAME, matches)) => Watch(CmdWatch::from(matches)),
            Some((CmdInit::NAME, matches)) => Init(CmdInit::from(matches)),
            None => Status(CmdStatus::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show items and whether they are on their lists
    Status(CmdStatus),

    /// Tap an item row or one of its quantity controls
    Tap(CmdTap),

    /// Follow items as their lists change
    Watch(CmdWatch),

    /// Print a starter configuration
    Init(CmdInit),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Status(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Tap(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Watch(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Init(a)   => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Context) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let client = HassClient::new(config.hass.clone())?;
        let ctx = Context {
            config,
            client: Arc::new(client),
        };

        f(&ctx).await
    }
}

/// What every command talking to Home Assistant works with.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub client: Arc<HassClient>,
}

impl Context {
    /// Builds a card for `item` on the shared client.
    pub fn card(&self, item: &ItemConfig) -> Result<Card, Box<dyn Error>> {
        Ok(Card::new(item.clone(), self.client.clone())?)
    }

    /// Fetches the state of the list backing `item`, failing if Home
    /// Assistant does not know the entity.
    pub async fn list_state(&self, item: &ItemConfig) -> Result<EntityState, Box<dyn Error>> {
        let entity = EntityId::from(item.todo_list.as_str());
        self.client
            .get_state(&entity)
            .await?
            .ok_or_else(|| format!("Entity {entity} not found").into())
    }

    /// Builds the card for `item` and draws its row, turning any failure
    /// into an error row.
    pub async fn draw(&self, name: &str, item: &ItemConfig) -> ItemRow {
        let view = async {
            let card = self.card(item)?;
            Ok::<_, Box<dyn Error>>(card.render().await?)
        };

        match view.await {
            Ok(view) => ItemRow::drawn(name, view),
            Err(e) => {
                tracing::warn!(name, err = %e, "failed to draw item");
                ItemRow::failed(name, e)
            }
        }
    }
}
