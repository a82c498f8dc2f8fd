// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The synchronization engine.
//!
//! Every operation follows the same shape: if the collection is dirty,
//! best-effort push the whole list first; apply the intent to the local
//! index so the caller sees it immediately; then drive the gateway round
//! trip through a bounded retry loop. Success updates the acknowledged
//! revision and clears the dirty flag; an exhausted retry budget sets it
//! and surfaces [`SyncError::Exhausted`]. The optimistic local mutation
//! stays in place either way.

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use uuid::Uuid;

use tusk_model::{Task, TaskPatch};
use tusk_remote::{ApiError, ElementEnvelope, ListEnvelope, TodoGateway};

use crate::index::{LocalIndex, SortOption};
use crate::revision::RevisionStore;

/// Retry bounds and backoff pacing for sync round trips.
///
/// The delay before attempt `n + 1` is `base_delay * 2^n`, one policy for
/// every operation.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// How many attempts each round trip gets.
    pub max_attempts: u32,
    /// Base unit of the exponential backoff.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    fn delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Terminal sync failure.
///
/// Classified and transport errors are retried inside the engine; this is
/// the only error that crosses its boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The retry budget is spent. The optimistic local mutation is left in
    /// place and the collection is marked dirty for later reconciliation.
    #[error("sync failed after {attempts} attempts: {message}")]
    Exhausted {
        /// How many attempts were made.
        attempts: u32,
        /// The last error message recorded during the round trips.
        message: String,
    },
}

#[derive(Clone, Copy)]
enum ListCall<'a> {
    Fetch,
    Replace(&'a [Task]),
}

#[derive(Clone, Copy)]
enum ElementCall<'a> {
    Add(&'a Task),
    Update(&'a Task),
    Delete(Uuid),
}

/// Reconciles the local task collection with the remote authoritative
/// list.
///
/// One engine is constructed per session and owns all sync state: the
/// [`LocalIndex`], the acknowledged revision, the dirty flag, and the last
/// user-displayable error message. All mutating operations take
/// `&mut self`, confining the state to a single logical owner; operations
/// are not cancellable mid-retry-loop.
#[derive(Debug)]
pub struct SyncEngine<G> {
    gateway: G,
    index: LocalIndex,
    revision: RevisionStore,
    dirty: bool,
    last_error: Option<String>,
    retry: RetryPolicy,
    device: String,
}

impl<G: TodoGateway> SyncEngine<G> {
    /// Creates an engine with the default retry policy.
    pub fn new(gateway: G, device: impl Into<String>) -> Self {
        Self::with_retry(gateway, device, RetryPolicy::default())
    }

    /// Creates an engine with an explicit retry policy.
    pub fn with_retry(gateway: G, device: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            gateway,
            index: LocalIndex::new(),
            revision: RevisionStore::new(),
            dirty: false,
            last_error: None,
            retry,
            device: device.into(),
        }
    }

    /// Pulls the full server list, **replacing** the local collection.
    ///
    /// This is not a merge: optimistic local state that never reached the
    /// server is overwritten. Pending dirty state is pushed first via the
    /// usual recovery step, which is what keeps that window small.
    pub async fn fetch(&mut self) -> Result<(), SyncError> {
        self.recover_if_dirty().await;

        let envelope = self.run_list(ListCall::Fetch, "fetch list").await?;
        self.index.replace_all(envelope.list);
        Ok(())
    }

    /// Adds a task: locally at once, remotely through the retry loop.
    pub async fn add(&mut self, task: Task) -> Result<(), SyncError> {
        self.recover_if_dirty().await;
        self.index.insert(task.clone());

        let envelope = self.run_element(ElementCall::Add(&task), "add item").await?;
        self.index.upsert(envelope.element);
        Ok(())
    }

    /// Replaces a task: locally at once, remotely through the retry loop.
    ///
    /// A task whose id is not in the local collection is a no-op: the
    /// gateway is not called and no error is raised.
    pub async fn update(&mut self, task: Task) -> Result<(), SyncError> {
        if !self.index.contains(&task.id) {
            tracing::error!(id = %task.id, "no such task to update");
            return Ok(());
        }

        self.recover_if_dirty().await;
        self.index.upsert(task.clone());

        let envelope = self
            .run_element(ElementCall::Update(&task), "update item")
            .await?;
        self.index.upsert(envelope.element);
        Ok(())
    }

    /// Deletes a task by id.
    ///
    /// Idempotent: deleting an id that is not present is a no-op, with no
    /// gateway call and no error.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), SyncError> {
        if !self.index.contains(&id) {
            return Ok(());
        }

        self.recover_if_dirty().await;
        self.index.remove(&id);

        self.run_element(ElementCall::Delete(id), "delete item")
            .await?;
        Ok(())
    }

    /// Flips a task's completion flag and syncs the edit.
    pub async fn toggle_done(&mut self, id: Uuid) -> Result<(), SyncError> {
        let Some(task) = self.index.get(&id) else {
            return Ok(());
        };

        let patch = TaskPatch {
            done: Some(!task.done),
            ..TaskPatch::default()
        };
        let updated = patch.apply_to(task, Utc::now(), &self.device);
        self.update(updated).await
    }

    /// Pushes the whole local collection to the server.
    ///
    /// This is the dirty-recovery round trip; on success the server's
    /// returned list replaces the local one and the dirty flag clears.
    pub async fn push_all(&mut self) -> Result<(), SyncError> {
        let snapshot = self.index.tasks().to_vec();
        let envelope = self
            .run_list(ListCall::Replace(&snapshot), "replace list")
            .await?;
        self.index.replace_all(envelope.list);
        Ok(())
    }

    /// The last acknowledged server revision.
    #[must_use]
    pub fn revision(&self) -> i64 {
        self.revision.get()
    }

    /// Whether local state is known to be out of sync with the server.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The last sync error message, retained for display.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The full local collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.index.tasks()
    }

    /// The filtered, sorted view list.
    #[must_use]
    pub fn view(&self) -> &[Task] {
        self.index.view()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.index.get(id)
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.index.completed_count()
    }

    /// Switches the view sort mode.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.index.set_sort(sort);
    }

    /// Toggles completed-task visibility in the view.
    pub fn set_show_completed(&mut self, show: bool) {
        self.index.set_show_completed(show);
    }

    /// Best-effort reconciliation before a primary operation.
    ///
    /// A failure here is logged and swallowed; the primary operation
    /// proceeds regardless and will set the dirty flag again if it also
    /// exhausts its budget.
    async fn recover_if_dirty(&mut self) {
        if !self.dirty {
            return;
        }

        tracing::debug!("local state dirty, attempting full reconciliation");
        if let Err(err) = self.push_all().await {
            tracing::error!(%err, "failed to push the task list");
        }
    }

    async fn run_list(
        &mut self,
        call: ListCall<'_>,
        op: &'static str,
    ) -> Result<ListEnvelope, SyncError> {
        for attempt in 1..=self.retry.max_attempts {
            let revision = self.revision.get();
            let result = match call {
                ListCall::Fetch => self.gateway.fetch_list().await,
                ListCall::Replace(tasks) => self.gateway.replace_list(tasks, revision).await,
            };

            match result {
                Ok(envelope) => {
                    self.acknowledge(op, envelope.revision);
                    return Ok(envelope);
                }
                Err(err) => self.note_failure(op, attempt, &err).await,
            }
        }

        self.give_up(op)
    }

    async fn run_element(
        &mut self,
        call: ElementCall<'_>,
        op: &'static str,
    ) -> Result<ElementEnvelope, SyncError> {
        for attempt in 1..=self.retry.max_attempts {
            let revision = self.revision.get();
            let result = match call {
                ElementCall::Add(task) => self.gateway.add_item(task, revision).await,
                ElementCall::Update(task) => self.gateway.update_item(task, revision).await,
                ElementCall::Delete(id) => self.gateway.delete_item(id, revision).await,
            };

            match result {
                Ok(envelope) => {
                    self.acknowledge(op, envelope.revision);
                    return Ok(envelope);
                }
                Err(err) => self.note_failure(op, attempt, &err).await,
            }
        }

        self.give_up(op)
    }

    fn acknowledge(&mut self, op: &'static str, revision: i64) {
        self.revision.set(revision);
        self.dirty = false;
        tracing::info!(op, revision, "sync round trip succeeded");
    }

    async fn note_failure(&mut self, op: &'static str, attempt: u32, err: &ApiError) {
        tracing::error!(op, attempt, %err, "sync attempt failed");
        self.last_error = Some(err.to_string());

        if attempt < self.retry.max_attempts {
            sleep(self.retry.delay(attempt)).await;
        }
    }

    fn give_up<T>(&mut self, op: &'static str) -> Result<T, SyncError> {
        self.dirty = true;
        let attempts = self.retry.max_attempts;
        let message = self
            .last_error
            .clone()
            .unwrap_or_else(|| "no error recorded".to_string());
        tracing::error!(op, attempts, "retry budget exhausted, marking dirty");
        Err(SyncError::Exhausted { attempts, message })
    }
}
