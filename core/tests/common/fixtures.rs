// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::time::Duration;

use chrono::{TimeZone, Utc};

use tusk_core::{Importance, RetryPolicy, Task, TaskDraft};

/// Creates a pending basic-importance task created at a fixed instant.
pub fn task(text: &str) -> Task {
    task_at(text, 1_721_296_200)
}

/// Creates a pending basic-importance task with an explicit creation time.
pub fn task_at(text: &str, created_secs: i64) -> Task {
    let now = Utc.timestamp_opt(created_secs, 0).unwrap();
    TaskDraft::new(text)
        .into_task(now, "test-device")
        .expect("fixture text must not be empty")
}

/// Creates a pending important task.
pub fn important_task(text: &str) -> Task {
    let now = Utc.timestamp_opt(1_721_296_200, 0).unwrap();
    let mut draft = TaskDraft::new(text);
    draft.importance = Importance::Important;
    draft
        .into_task(now, "test-device")
        .expect("fixture text must not be empty")
}

/// Creates a completed task.
pub fn done_task(text: &str) -> Task {
    let mut task = task(text);
    task.done = true;
    task
}

/// The default retry budget with no backoff sleeping, for fast tests.
pub fn no_delay() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::ZERO,
    }
}
