// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer authentication and status mapping.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::HassConfig;
use crate::error::HassError;

/// HTTP client for Home Assistant REST calls.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: HassConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client creation fails.
    pub fn new(config: HassConfig) -> Result<Self, HassError> {
        if config.base_url.trim().is_empty() {
            return Err(HassError::Config("base_url must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request against `path` with the authorization header set.
    pub fn build_request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let req = self.client.request(method, url);
        match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, HassError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        tracing::debug!(%status, body = %text, "request rejected");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(HassError::Auth(format!("{status}: {text}")))
            }
            StatusCode::NOT_FOUND => Err(HassError::NotFound(text)),
            status => Err(HassError::Http(format!("{status}: {text}"))),
        }
    }
}
