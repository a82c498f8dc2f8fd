// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A scripted in-memory [`TodoGateway`] for engine tests.
//!
//! Records every call (and the revision header each mutating call
//! carried) and can be flipped into failure modes mid-test through the
//! shared state handle.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use tusk_core::Task;
use tusk_remote::{ApiError, ElementEnvelope, ListEnvelope, TodoGateway};

use super::fixtures;

/// Shared, scriptable gateway state.
#[derive(Debug, Default)]
pub struct MockState {
    /// Gateway method names, in call order.
    pub calls: Vec<String>,
    /// The `X-Last-Known-Revision` value of each revision-carrying call.
    pub passed_revisions: Vec<i64>,
    /// Fail every call with a server error.
    pub fail_all: bool,
    /// Fail only `replace_list` with a server error.
    pub fail_replace: bool,
    /// The list served by fetch responses.
    pub list: Vec<Task>,
    /// The revision stamped on every successful response.
    pub revision: i64,
}

impl MockState {
    /// How many times the named gateway method was called.
    pub fn count(&self, op: &str) -> usize {
        self.calls.iter().filter(|c| c.as_str() == op).count()
    }
}

/// Scripted gateway; clone-cheap, state shared across clones.
#[derive(Debug, Clone)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
    fallback: Task,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            fallback: fixtures::task("fallback element"),
        }
    }

    /// A handle for scripting and inspecting the gateway mid-test.
    pub fn state(&self) -> Arc<Mutex<MockState>> {
        Arc::clone(&self.state)
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    fn failure() -> ApiError {
        ApiError::Server("database unavailable".to_string())
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoGateway for MockGateway {
    async fn fetch_list(&self) -> Result<ListEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("fetch_list".to_string());
        if st.fail_all {
            return Err(Self::failure());
        }
        Ok(ListEnvelope {
            status: "ok".to_string(),
            list: st.list.clone(),
            revision: st.revision,
        })
    }

    async fn replace_list(&self, tasks: &[Task], revision: i64) -> Result<ListEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("replace_list".to_string());
        st.passed_revisions.push(revision);
        if st.fail_all || st.fail_replace {
            return Err(Self::failure());
        }
        st.list = tasks.to_vec();
        Ok(ListEnvelope {
            status: "ok".to_string(),
            list: tasks.to_vec(),
            revision: st.revision,
        })
    }

    async fn fetch_item(&self, id: Uuid) -> Result<ElementEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("fetch_item".to_string());
        if st.fail_all {
            return Err(Self::failure());
        }
        let element = st
            .list
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("no such element".to_string()))?;
        Ok(ElementEnvelope {
            status: "ok".to_string(),
            element,
            revision: st.revision,
        })
    }

    async fn add_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("add_item".to_string());
        st.passed_revisions.push(revision);
        if st.fail_all {
            return Err(Self::failure());
        }
        st.list.push(task.clone());
        Ok(ElementEnvelope {
            status: "ok".to_string(),
            element: task.clone(),
            revision: st.revision,
        })
    }

    async fn update_item(&self, task: &Task, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("update_item".to_string());
        st.passed_revisions.push(revision);
        if st.fail_all {
            return Err(Self::failure());
        }
        if let Some(slot) = st.list.iter_mut().find(|t| t.id == task.id) {
            *slot = task.clone();
        }
        Ok(ElementEnvelope {
            status: "ok".to_string(),
            element: task.clone(),
            revision: st.revision,
        })
    }

    async fn delete_item(&self, id: Uuid, revision: i64) -> Result<ElementEnvelope, ApiError> {
        let st = &mut *self.lock();
        st.calls.push("delete_item".to_string());
        st.passed_revisions.push(revision);
        if st.fail_all {
            return Err(Self::failure());
        }
        let element = match st.list.iter().position(|t| t.id == id) {
            Some(pos) => st.list.remove(pos),
            None => self.fallback.clone(),
        };
        Ok(ElementEnvelope {
            status: "ok".to_string(),
            element,
            revision: st.revision,
        })
    }
}
