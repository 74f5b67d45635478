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

use crate::config::MAX_TAG_FILTERS;
use crate::filter::FilterResult;
use crate::registry::Outcome;
use crate::registry::Registry;

/// How a [`TagFilter`] interprets its entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Every tag passes; there are no entries.
    #[default]
    AllowAll,
    /// Only tags with an entry pass.
    Whitelist,
    /// Tags with an entry are rejected.
    Blacklist,
}

/// A filter that admits or rejects records by tag.
///
/// The filter starts in [`FilterMode::AllowAll`]. The first [`enable`](TagFilter::enable) turns
/// it into a whitelist and the first [`disable`](TagFilter::disable) into a blacklist. After that,
/// calls that go against the mode remove entries instead of switching modes: enabling a
/// blacklisted tag takes it off the blacklist, and disabling a whitelisted tag takes it off the
/// whitelist.
///
/// At most `N` tags are tracked. Once full, enabling or disabling an unseen tag reports
/// [`Outcome::Saturated`] and leaves the entries as they were, so that tag is decided by the mode
/// alone.
///
/// # Examples
///
/// ```
/// use clogforth::filter::FilterMode;
/// use clogforth::filter::TagFilter;
///
/// let mut filter = TagFilter::<16>::new();
/// filter.enable("Database");
///
/// assert_eq!(filter.mode(), FilterMode::Whitelist);
/// assert!(filter.is_enabled("Database"));
/// assert!(!filter.is_enabled("Network"));
/// ```
#[derive(Debug, Clone)]
pub struct TagFilter<const N: usize = MAX_TAG_FILTERS> {
    mode: FilterMode,
    entries: Registry<(), N>,
}

impl<const N: usize> Default for TagFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TagFilter<N> {
    pub fn new() -> Self {
        TagFilter {
            mode: FilterMode::AllowAll,
            entries: Registry::new(),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Number of tags currently listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Let `tag` through.
    ///
    /// An empty tag is ignored and does not switch modes.
    pub fn enable(&mut self, tag: &str) -> Outcome {
        if tag.is_empty() {
            return Outcome::Ignored;
        }

        match self.mode {
            FilterMode::AllowAll => {
                self.mode = FilterMode::Whitelist;
                self.entries.upsert(tag, ())
            }
            FilterMode::Whitelist => self.entries.upsert(tag, ()),
            FilterMode::Blacklist => self.entries.remove(tag),
        }
    }

    /// Hold `tag` back.
    ///
    /// An empty tag is ignored and does not switch modes.
    pub fn disable(&mut self, tag: &str) -> Outcome {
        if tag.is_empty() {
            return Outcome::Ignored;
        }

        match self.mode {
            FilterMode::AllowAll => {
                self.mode = FilterMode::Blacklist;
                self.entries.upsert(tag, ())
            }
            FilterMode::Blacklist => self.entries.upsert(tag, ()),
            FilterMode::Whitelist => self.entries.remove(tag),
        }
    }

    /// Let every tag through and forget all entries.
    pub fn enable_all(&mut self) {
        self.mode = FilterMode::AllowAll;
        self.entries.clear();
    }

    /// Hold every tag back: an empty whitelist.
    pub fn disable_all(&mut self) {
        self.mode = FilterMode::Whitelist;
        self.entries.clear();
    }

    /// Forget all entries, keeping the mode.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_enabled(&self, tag: &str) -> bool {
        match self.mode {
            FilterMode::AllowAll => true,
            FilterMode::Whitelist => self.entries.contains(tag),
            FilterMode::Blacklist => !self.entries.contains(tag),
        }
    }

    /// Iterate over the listed tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, ())| name)
    }

    pub(crate) fn filter(&self, tag: &str) -> FilterResult {
        if self.is_enabled(tag) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}
