// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default display tint for tasks that never picked a color.
pub const WHITE_HEX: &str = "#FFFFFF";

/// Errors raised when building a [`Task`] from user intent.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,
}

/// How much a task matters, from least to most.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Can wait.
    Low,
    /// The everyday default.
    #[default]
    Basic,
    /// Should be dealt with first.
    Important,
}

const IMPORTANCE_LOW: &str = "low";
const IMPORTANCE_BASIC: &str = "basic";
const IMPORTANCE_IMPORTANT: &str = "important";

impl AsRef<str> for Importance {
    fn as_ref(&self) -> &str {
        match self {
            Importance::Low => IMPORTANCE_LOW,
            Importance::Basic => IMPORTANCE_BASIC,
            Importance::Important => IMPORTANCE_IMPORTANT,
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Importance {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            IMPORTANCE_LOW => Ok(Importance::Low),
            IMPORTANCE_BASIC => Ok(Importance::Basic),
            IMPORTANCE_IMPORTANT => Ok(Importance::Important),
            _ => Err(()),
        }
    }
}

/// A single to-do item.
///
/// Tasks are immutable values: every edit produces a whole new `Task` (see
/// [`TaskPatch::apply_to`]), never a partial in-place field patch. `id` is
/// generated client-side and stays stable for the task's lifetime;
/// `changed_at >= created_at` always holds.
///
/// The serde representation is the backend wire shape: string UUID,
/// lowercase importance, unix-second timestamps (sub-second precision is
/// truncated on encode), and explicit `null` for absent optional fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation.
    pub id: Uuid,
    /// Display text, trimmed of surrounding whitespace.
    pub text: String,
    /// Importance level.
    pub importance: Importance,
    /// Optional due date. Absent means "no deadline".
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub deadline: Option<DateTime<Utc>>,
    /// Completion flag.
    pub done: bool,
    /// Display tint as a hex string.
    #[serde(default)]
    pub color: Option<String>,
    /// Creation timestamp, immutable after creation.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp, restamped on every edit.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub changed_at: DateTime<Utc>,
    /// Device/author identifier of the last writer.
    pub last_updated_by: String,
    /// Optional ordered attachment references.
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

/// User intent for creating a new [`Task`].
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    /// Display text; trimmed on build, must not end up empty.
    pub text: String,
    /// Importance level.
    pub importance: Importance,
    /// Optional due date.
    pub deadline: Option<DateTime<Utc>>,
    /// Display tint; [`WHITE_HEX`] when not picked.
    pub color: Option<String>,
    /// Optional attachment references.
    pub files: Option<Vec<String>>,
}

impl TaskDraft {
    /// Creates a draft with the given text and everything else defaulted.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builds the task: a fresh v4 id, `created_at = changed_at = now`.
    pub fn into_task(self, now: DateTime<Utc>, device: &str) -> Result<Task, TaskError> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        Ok(Task {
            id: Uuid::new_v4(),
            text,
            importance: self.importance,
            deadline: self.deadline,
            done: false,
            color: Some(self.color.unwrap_or_else(|| WHITE_HEX.to_string())),
            created_at: now,
            changed_at: now,
            last_updated_by: device.to_string(),
            files: self.files,
        })
    }
}

/// Partial update for a task, allowing field-wise edits.
///
/// Applying a patch never mutates the original: it yields a new [`Task`]
/// with `changed_at` restamped. Double-`Option` fields distinguish "leave
/// alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New display text, if any; trimmed on apply.
    pub text: Option<String>,
    /// New importance, if any.
    pub importance: Option<Importance>,
    /// New deadline; `Some(None)` removes it.
    pub deadline: Option<Option<DateTime<Utc>>>,
    /// New completion flag, if any.
    pub done: Option<bool>,
    /// New display tint, if any.
    pub color: Option<String>,
    /// New attachment list; `Some(None)` removes it.
    pub files: Option<Option<Vec<String>>>,
}

impl TaskPatch {
    /// Is this patch empty, meaning no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.importance.is_none()
            && self.deadline.is_none()
            && self.done.is_none()
            && self.color.is_none()
            && self.files.is_none()
    }

    /// Applies the patch, producing the replacement value.
    ///
    /// `created_at` and `id` carry over untouched; `changed_at` becomes
    /// `now` and `last_updated_by` becomes `device`.
    #[must_use]
    pub fn apply_to(&self, task: &Task, now: DateTime<Utc>, device: &str) -> Task {
        Task {
            id: task.id,
            text: self
                .text
                .as_ref()
                .map_or_else(|| task.text.clone(), |t| t.trim().to_string()),
            importance: self.importance.unwrap_or(task.importance),
            deadline: self.deadline.unwrap_or(task.deadline),
            done: self.done.unwrap_or(task.done),
            color: self.color.clone().or_else(|| task.color.clone()),
            created_at: task.created_at,
            changed_at: now,
            last_updated_by: device.to_string(),
            files: self.files.clone().unwrap_or_else(|| task.files.clone()),
        }
    }
}
