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

//! Layouts for formatting log records on the direct-output path.

use std::fmt;

use crate::Color;
use crate::Error;
use crate::record::Record;

mod text;

pub use self::text::TextLayout;

/// Presentation decisions resolved by the logger for one record.
///
/// The logger looks these up in its registries before handing the record to a [`Layout`], so a
/// layout never needs access to logger state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    /// Whether the record's library identity should be shown.
    pub show_library: bool,
    /// Whether the output may contain ANSI colors at all.
    pub colored: bool,
    /// Color bound to the record's tag.
    pub tag_color: Color,
    /// Color bound to the record's library.
    pub library_color: Color,
}

/// A layout for formatting log records.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record into one line, without the trailing newline.
    fn format(&self, record: &Record, styling: &Styling) -> Result<Vec<u8>, Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
