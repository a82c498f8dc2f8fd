// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed HTTP client for the Tusk backend's `/todo/list` endpoints.
//!
//! Every mutating request carries the caller's last known list revision in
//! the `X-Last-Known-Revision` header; the server rejects stale writers,
//! which surfaces here as a classified [`ApiError`].

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
#![allow(clippy::missing_errors_doc, clippy::single_match_else)]

mod config;
mod error;
mod gateway;
mod http;
mod wire;

pub use crate::config::{AuthMethod, RemoteConfig};
pub use crate::error::ApiError;
pub use crate::gateway::{RemoteTodoGateway, TodoGateway};
pub use crate::http::{HttpClient, REVISION_HEADER};
pub use crate::wire::{ElementEnvelope, ListEnvelope};
