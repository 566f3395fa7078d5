// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Home Assistant client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HassError {
    /// HTTP layer error, including unexpected status codes.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The token was missing or rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Entity or endpoint not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server answered with a body we could not interpret.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for HassError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for HassError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
