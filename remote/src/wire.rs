// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request and response envelopes for the `/todo/list` endpoints.

use tusk_model::Task;

/// Response to whole-list operations (fetch, replace).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListEnvelope {
    /// Server status string, `"ok"` on success.
    pub status: String,
    /// The full authoritative task list.
    pub list: Vec<Task>,
    /// Revision assigned by the server to this state of the list.
    pub revision: i64,
}

/// Response to single-element operations (add, update, delete, get).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ElementEnvelope {
    /// Server status string, `"ok"` on success.
    pub status: String,
    /// The affected task as the server now knows it.
    pub element: Task,
    /// Revision assigned by the server after the operation.
    pub revision: i64,
}

/// Body of a whole-list replace request.
#[derive(Debug, serde::Serialize)]
pub(crate) struct ListBody<'a> {
    pub list: &'a [Task],
}

/// Body of a single-element request.
#[derive(Debug, serde::Serialize)]
pub(crate) struct ElementBody<'a> {
    pub element: &'a Task,
}

/// Error body the server attaches to any non-2xx response.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
