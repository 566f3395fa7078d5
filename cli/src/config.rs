// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use shoplist_core::{APP_NAME, ItemConfig};
use shoplist_hass::HassConfig;

const SHOPLIST_CONFIG_ENV: &str = "SHOPLIST_CONFIG";
const SHOPLIST_DEV_ENV: &str = "SHOPLIST_DEV";

const SHOPLIST_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const SHOPLIST_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SHOPLIST_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({SHOPLIST_DEV_ENV} is set): config must be explicitly specified via --config or {SHOPLIST_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!(
                "No config found at: {}, run `{APP_NAME} init` to get started",
                config.display()
            )
            .into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration of the command-line front end.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Home Assistant connection.
    pub hass: HassConfig,

    /// Item rows, keyed by the name used on the command line.
    #[serde(default)]
    pub items: BTreeMap<String, ItemConfig>,
}

impl Config {
    /// Looks up one item by key.
    pub fn item(&self, name: &str) -> Result<&ItemConfig, Box<dyn Error>> {
        self.items.get(name).ok_or_else(|| {
            let known = self.items.keys().cloned().collect::<Vec<_>>().join(", ");
            format!("No item named `{name}` in config, known items: {known}").into()
        })
    }

    /// Selects one item, or every item when `name` is `None`.
    pub fn select<'a>(&'a self, name: Option<&'a str>) -> Result<Vec<(&'a str, &'a ItemConfig)>, Box<dyn Error>> {
        match name {
            Some(name) => Ok(vec![(name, self.item(name)?)]),
            None if self.items.is_empty() => Err("No items configured".into()),
            None => Ok(self
                .items
                .iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect()),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(SHOPLIST_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if SHOPLIST_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if SHOPLIST_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            SHOPLIST_DEV_ENV,
            val,
            SHOPLIST_DEV_VALID_TRUE.join(", "),
            SHOPLIST_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
