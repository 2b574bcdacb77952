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

//! Per-frame sampling of registry statistics.

use crate::memory::registry::AllocationRegistry;
use serde::Serialize;

/// One sampled frame of aggregate allocation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSample {
    /// The 1-based frame number this sample was taken at.
    pub frame: u64,
    /// The number of live records at sampling time.
    pub allocations: usize,
    /// The summed size estimates at sampling time, in bytes.
    pub bytes: usize,
}

/// Accumulates a time series of [`FrameSample`]s from a registry.
///
/// The sampler is pure glue over [`AllocationRegistry::stats`]; it keeps
/// no reference to the registry and imposes no cadence. Drivers call
/// [`FrameSampler::advance`] once per frame (or per benchmark
/// iteration) and serialize the collected samples themselves.
#[derive(Debug, Default)]
pub struct FrameSampler {
    samples: Vec<FrameSample>,
    current_frame: u64,
}

impl FrameSampler {
    /// Creates a new sampler with no recorded frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to the next frame, samples `registry`, and records the
    /// result. Returns the sample that was just recorded.
    pub fn advance(&mut self, registry: &AllocationRegistry) -> FrameSample {
        self.current_frame += 1;
        let stats = registry.stats();
        let sample = FrameSample {
            frame: self.current_frame,
            allocations: stats.count,
            bytes: stats.total_bytes,
        };
        self.samples.push(sample);
        sample
    }

    /// Returns all samples recorded so far, in frame order.
    pub fn samples(&self) -> &[FrameSample] {
        &self.samples
    }

    /// Returns the number of frames sampled so far.
    pub fn frame_count(&self) -> u64 {
        self.current_frame
    }
}
