// Copyright 2025 the Spline Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for control points.
//!
//! Each `PointId` is a monotonically increasing `u64` handed out by a
//! `PointIdAllocator`. The allocator is owned by the editor controller, so
//! ids are unique for the lifetime of that editor and are assigned in
//! creation order. They are never reused, so a deleted point leaves no
//! dangling reference in the active-object tracker.

/// A unique identifier for a control point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u64);

impl PointId {
    /// Raw numeric value, used for logging and ordering checks
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh point ids in creation order
#[derive(Debug, Clone)]
pub struct PointIdAllocator {
    next: u64,
}

impl PointIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id. Never returns an id twice.
    pub fn next_id(&mut self) -> PointId {
        let id = PointId(self.next);
        self.next += 1;
        id
    }
}

impl Default for PointIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
