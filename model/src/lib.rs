// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Task value type and codecs for the Tusk task manager.
//!
//! The wire shape (JSON with unix-second timestamps) is what the backend's
//! `/todo/list` endpoints speak; the CSV line format is the flat local
//! export format.

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
    clippy::pedantic
)]
#![allow(clippy::option_option, clippy::missing_errors_doc)]

mod csv;
mod task;

pub use crate::task::{Importance, Task, TaskDraft, TaskError, TaskPatch, WHITE_HEX};
