// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed gateway to the backend's task-list endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use tusk_model::Task;

use crate::config::RemoteConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::wire::{ElementBody, ElementEnvelope, ListBody, ListEnvelope};

const LIST_PATH: &str = "/todo/list";

/// The backend's task-list operations.
///
/// This is the seam the sync engine is written against; the production
/// implementation is [`RemoteTodoGateway`].
#[async_trait]
pub trait TodoGateway {
    /// Fetches the full authoritative list.
    async fn fetch_list(&self) -> Result<ListEnvelope, ApiError>;

    /// Replaces the whole server list; used for dirty-state recovery.
    async fn replace_list(&self, tasks: &[Task], revision: i64) -> Result<ListEnvelope, ApiError>;

    /// Fetches a single task by id.
    async fn fetch_item(&self, id: Uuid) -> Result<ElementEnvelope, ApiError>;

    /// Creates one task on the server.
    async fn add_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError>;

    /// Replaces one task on the server, keyed by its id.
    async fn update_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError>;

    /// Deletes one task by id.
    async fn delete_item(&self, id: Uuid, revision: i64) -> Result<ElementEnvelope, ApiError>;
}

/// Gateway implementation over HTTPS.
///
/// # Example
///
/// ```ignore
/// use tusk_remote::{AuthMethod, RemoteConfig, RemoteTodoGateway, TodoGateway};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RemoteConfig {
///     base_url: "https://hive.example.com".to_string(),
///     auth: AuthMethod::Bearer {
///         token: "secret".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let gateway = RemoteTodoGateway::new(config)?;
/// let envelope = gateway.fetch_list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteTodoGateway {
    http: Arc<HttpClient>,
    config: RemoteConfig,
}

impl RemoteTodoGateway {
    /// Creates a new gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: RemoteConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Builds a full URL from a path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn item_url(&self, id: Uuid) -> String {
        self.full_url(&format!("{LIST_PATH}/{id}"))
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TodoGateway for RemoteTodoGateway {
    async fn fetch_list(&self) -> Result<ListEnvelope, ApiError> {
        let url = self.full_url(LIST_PATH);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        Self::decode(resp).await
    }

    async fn replace_list(&self, tasks: &[Task], revision: i64) -> Result<ListEnvelope, ApiError> {
        let url = self.full_url(LIST_PATH);
        let body = serde_json::to_string(&ListBody { list: tasks })?;

        let resp = self
            .http
            .execute(HttpClient::with_revision(
                self.http
                    .build_request(Method::PATCH, &url)
                    .header("Content-Type", "application/json")
                    .body(body),
                revision,
            ))
            .await?;

        Self::decode(resp).await
    }

    async fn fetch_item(&self, id: Uuid) -> Result<ElementEnvelope, ApiError> {
        let url = self.item_url(id);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        Self::decode(resp).await
    }

    async fn add_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let url = self.full_url(LIST_PATH);
        let body = serde_json::to_string(&ElementBody { element: task })?;

        let resp = self
            .http
            .execute(HttpClient::with_revision(
                self.http
                    .build_request(Method::POST, &url)
                    .header("Content-Type", "application/json")
                    .body(body),
                revision,
            ))
            .await?;

        Self::decode(resp).await
    }

    async fn update_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let url = self.item_url(task.id);
        let body = serde_json::to_string(&ElementBody { element: task })?;

        let resp = self
            .http
            .execute(HttpClient::with_revision(
                self.http
                    .build_request(Method::PUT, &url)
                    .header("Content-Type", "application/json")
                    .body(body),
                revision,
            ))
            .await?;

        Self::decode(resp).await
    }

    async fn delete_item(&self, id: Uuid, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let url = self.item_url(id);
        let resp = self
            .http
            .execute(HttpClient::with_revision(
                self.http.build_request(Method::DELETE, &url),
                revision,
            ))
            .await?;

        Self::decode(resp).await
    }
}
