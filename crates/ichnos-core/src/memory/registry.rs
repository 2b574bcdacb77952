// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Constant-time allocation registry keyed by object identity.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// An opaque, stable handle naming one tracked in-memory entity.
///
/// Identity is decoupled from any language-level reference equality: a
/// driver either lets the registry mint fresh handles via
/// [`AllocationRegistry::mint`], or derives them from its own arena
/// indices through [`ObjectId::from_raw`]. Two handles compare equal only
/// if they name the same entity; structurally equal but distinct objects
/// get distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Creates a handle from a raw value managed by the caller.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value backing this handle.
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Metadata recorded for a single tracked allocation.
///
/// Owned exclusively by the [`AllocationRegistry`] that created it; a
/// later [`AllocationRegistry::track`] call with the same [`ObjectId`]
/// replaces it wholesale.
#[derive(Debug, Clone)]
pub struct AllocationRecord {
    /// Best-effort size of the tracked object, in bytes.
    pub size_estimate: usize,
    /// A short, ordered snippet of the call stack that performed the
    /// allocation (outermost frame first).
    pub call_stack: Vec<String>,
    /// When the record was (re-)created.
    pub created_at: Instant,
}

/// A snapshot of aggregate registry statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegistryStats {
    /// The number of distinct identities currently recorded.
    pub count: usize,
    /// The sum of size estimates over the current records.
    pub total_bytes: usize,
    /// The total number of `track` calls ever made. Counts calls, not
    /// distinct live objects, so it never decreases even when a record
    /// is overwritten.
    pub total_allocated: u64,
}

/// A constant-time store of [`AllocationRecord`]s keyed by [`ObjectId`].
///
/// Insertion order is irrelevant; keys are unique. The registry upholds
/// `stats().count <= stats().total_allocated` at all times.
#[derive(Debug, Default)]
pub struct AllocationRegistry {
    records: HashMap<ObjectId, AllocationRecord>,
    total_allocated: u64,
    next_id: u64,
}

impl AllocationRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh, never-before-issued [`ObjectId`].
    ///
    /// Minting does not insert a record; it only reserves the handle.
    pub fn mint(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts or overwrites the record for `id`.
    ///
    /// If `id` already has a record, the old record is replaced
    /// (re-allocation semantics) and the lifetime counter still
    /// increments. This operation has no failure condition.
    pub fn track(&mut self, id: ObjectId, size_estimate: usize, call_stack: Vec<String>) {
        let record = AllocationRecord {
            size_estimate,
            call_stack,
            created_at: Instant::now(),
        };
        if self.records.insert(id, record).is_some() {
            log::trace!("re-tracked object {id:?}; previous record replaced");
        }
        self.total_allocated += 1;
        // Minting stays ahead of caller-derived raw ids so the two
        // handle sources never collide.
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }

    /// Returns the current record for `id`, if one exists.
    pub fn record(&self, id: ObjectId) -> Option<&AllocationRecord> {
        self.records.get(&id)
    }

    /// Returns a snapshot of aggregate statistics.
    ///
    /// The byte sum is computed over the current records, so this is
    /// O(count); the other two fields are maintained incrementally.
    pub fn stats(&self) -> RegistryStats {
        let total_bytes = self.records.values().map(|r| r.size_estimate).sum();
        RegistryStats {
            count: self.records.len(),
            total_bytes,
            total_allocated: self.total_allocated,
        }
    }
}
