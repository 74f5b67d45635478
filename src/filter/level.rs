// Copyright 2024 FastLabs Developers
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

use crate::Level;
use crate::LevelFilter;
use crate::config::DEFAULT_LEVEL;
use crate::config::STATIC_MAX_LEVEL;
use crate::filter::FilterResult;

/// A filter that checks if the log level is at most as verbose as the threshold.
///
/// From least to most verbose, the levels are:
///
/// - `Error`
/// - `Warn`
/// - `Info`
/// - `Debug`
/// - `Trace`
///
/// If the threshold is `Info`, it will allow `Error`, `Warn`, and `Info` logs.
///
/// If the threshold is `Off`, it will reject all logs.
///
/// Levels above the compile-time [`STATIC_MAX_LEVEL`] are rejected whatever the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGate(LevelFilter);

impl Default for LevelGate {
    fn default() -> Self {
        LevelGate(DEFAULT_LEVEL)
    }
}

impl LevelGate {
    pub fn new(threshold: LevelFilter) -> Self {
        LevelGate(threshold)
    }

    pub fn threshold(&self) -> LevelFilter {
        self.0
    }

    pub fn set_threshold(&mut self, threshold: LevelFilter) {
        self.0 = threshold;
    }

    pub fn admits(&self, level: Level) -> bool {
        level <= STATIC_MAX_LEVEL && level <= self.0
    }

    pub(crate) fn filter(&self, level: Level) -> FilterResult {
        if self.admits(level) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

impl From<LevelFilter> for LevelGate {
    fn from(threshold: LevelFilter) -> Self {
        LevelGate(threshold)
    }
}
