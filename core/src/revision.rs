// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Last list revision acknowledged by the server.
///
/// Owned by the sync engine and mutated only after a successful round
/// trip. The server is the source of truth for revision ordering, so no
/// validation happens here; within a session the value never decreases
/// except through a full resync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevisionStore(i64);

impl RevisionStore {
    /// Creates a store starting at revision 0.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// The last acknowledged revision.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Records a server-acknowledged revision.
    pub fn set(&mut self, revision: i64) {
        self.0 = revision;
    }
}
