// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Home Assistant server configuration.
#[derive(Clone, serde::Deserialize)]
pub struct HassConfig {
    /// Base URL of the Home Assistant instance, e.g. `http://homeassistant.local:8123`.
    pub base_url: String,
    /// Long-lived access token.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// The token never shows up in debug output.
impl std::fmt::Debug for HassConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HassConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("shoplist-hass/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HassConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
