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

//! Allocation tracking primitives.
//!
//! The [`registry::AllocationRegistry`] records per-object allocation
//! metadata keyed by an opaque [`registry::ObjectId`] handle, and
//! [`frames::FrameSampler`] turns its aggregate statistics into a
//! per-frame time series for demo and chart drivers.
//!
//! Nothing in this module hooks an actual allocator; sizes are
//! best-effort estimates supplied by the caller.

pub mod frames;
pub mod registry;

pub use frames::{FrameSample, FrameSampler};
pub use registry::{AllocationRecord, AllocationRegistry, ObjectId, RegistryStats};
