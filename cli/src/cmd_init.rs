// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, error::Error};

use clap::{ArgMatches, Command};
use shoplist_core::{APP_NAME, ItemConfig, Palette};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdInit;

impl CmdInit {
    pub const NAME: &str = "init";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Print a starter configuration to stdout")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdInit
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing starter config...");
        print!("{}", Self::stub()?);
        Ok(())
    }

    /// A config with one freshly added item, ready to be filled in.
    pub fn stub() -> Result<String, toml::ser::Error> {
        #[derive(serde::Serialize)]
        struct Stub<'a> {
            hass: StubHass<'a>,
            items: BTreeMap<&'a str, ItemConfig>,
        }

        #[derive(serde::Serialize)]
        struct StubHass<'a> {
            base_url: &'a str,
            token: &'a str,
        }

        let stub = Stub {
            hass: StubHass {
                base_url: "http://homeassistant.local:8123",
                token: "",
            },
            items: BTreeMap::from([(
                "new_item",
                ItemConfig::stub().to_minimal(&Palette::default()),
            )]),
        };

        let body = toml::to_string(&stub)?;
        Ok(format!(
            "# {APP_NAME} configuration, set `token` to a long-lived access token\n\n{body}"
        ))
    }
}
