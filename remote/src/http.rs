// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and revision-header handling.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::{AuthMethod, RemoteConfig};
use crate::error::ApiError;
use crate::wire::ErrorBody;

/// Header carrying the caller's last known list revision.
pub const REVISION_HEADER: &str = "X-Last-Known-Revision";

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: RemoteConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: RemoteConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        match &self.config.auth {
            AuthMethod::Basic { username, password } => {
                req = req.basic_auth(username, Some(password));
            }
            AuthMethod::Bearer { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }

    /// Adds the `X-Last-Known-Revision` header for optimistic concurrency.
    pub fn with_revision(req: RequestBuilder, revision: i64) -> RequestBuilder {
        req.header(REVISION_HEADER, revision.to_string())
    }

    /// Executes a request and classifies error responses.
    ///
    /// 2xx responses pass through. For anything else the body is read and
    /// decoded as `{"message": ...}` when possible, and the result is a
    /// classified [`ApiError`].
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| format!("server returned {status}"));
        tracing::debug!(%status, message, "request rejected");
        Err(ApiError::classify(status, message))
    }
}
