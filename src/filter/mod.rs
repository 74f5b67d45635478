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

//! Filters for log records.
//!
//! A record goes through the [`LevelGate`] first and the [`TagFilter`] second. Either one may
//! reject it; a record both pass on is admitted.

mod level;
mod tag;

pub use self::level::LevelGate;
pub use self::tag::FilterMode;
pub use self::tag::TagFilter;

/// The result of a filter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The record should not be processed.
    Reject,
    /// No objection, further filtering should occur.
    Neutral,
}
