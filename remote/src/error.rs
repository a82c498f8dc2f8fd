// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Sync failure, classified into a closed taxonomy.
///
/// The first five variants carry the human-readable message the server put
/// in its error body (or a generic description when the body did not
/// decode). [`Transport`](Self::Transport) covers network and decoding
/// failures that never produced a structured server message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request was malformed, including a stale revision header.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The bearer token was missing or rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// No task with the requested id on the server.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server failed internally.
    #[error("server error: {0}")]
    Server(String),

    /// Any other non-2xx response.
    #[error("unknown error: {0}")]
    Unknown(String),

    /// Network or decoding failure; no structured server message.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Maps an HTTP status to its classified variant.
    ///
    /// `message` should be the decoded error-body message when available,
    /// else a generic description of the response.
    #[must_use]
    pub fn classify(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::INTERNAL_SERVER_ERROR => Self::Server(message),
            _ => Self::Unknown(message),
        }
    }

    /// The carried message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(m)
            | Self::Unauthorized(m)
            | Self::NotFound(m)
            | Self::Server(m)
            | Self::Unknown(m)
            | Self::Transport(m) => m,
        }
    }

    /// Whether this is a transport-level failure rather than a classified
    /// server response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(format!("decode error: {e}"))
    }
}
