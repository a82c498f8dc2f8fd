// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tusk application core: a local task collection kept in sync with a
//! remote authoritative list.
//!
//! The [`SyncEngine`] owns all sync state (the task index, the last
//! acknowledged server revision, and the dirty flag) and reconciles local
//! intent with the backend under an optimistic-concurrency scheme:
//! mutations apply locally first, round trips retry with exponential
//! backoff, and an exhausted retry budget marks the collection dirty so a
//! later operation pushes the whole list back up.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod cache;
mod config;
mod engine;
mod index;
mod revision;

pub use tusk_model::{Importance, Task, TaskDraft, TaskError, TaskPatch};

pub use crate::cache::{CacheError, CsvCached, FileCache, JsonCached};
pub use crate::config::{APP_NAME, Config};
pub use crate::engine::{RetryPolicy, SyncEngine, SyncError};
pub use crate::index::{LocalIndex, SortOption};
pub use crate::revision::RevisionStore;
