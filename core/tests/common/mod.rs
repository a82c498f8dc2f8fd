// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure: task fixtures and a
//! scripted in-memory gateway for driving the sync engine without a
//! server.

#![allow(dead_code, unused_imports)]

mod fixtures;
mod mock_gateway;

pub use fixtures::{done_task, important_task, no_delay, task, task_at};
pub use mock_gateway::{MockGateway, MockState};
