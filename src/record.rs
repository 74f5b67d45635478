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

//! Log records.

pub use log::Level;
pub use log::LevelFilter;

use crate::config::MAX_LIBRARY_NAME_LENGTH;
use crate::str::truncate;

/// The fixed-width label of a level, as rendered on the direct-output line.
///
/// ```
/// use clogforth::Level;
/// use clogforth::record::level_label;
///
/// assert_eq!(level_label(Level::Warn), "WARN ");
/// assert_eq!(level_label(Level::Debug), "DEBUG");
/// ```
pub const fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Location<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Location { file, line }
    }

    pub const fn file(&self) -> &'a str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// An admitted log record.
///
/// Records only live for the duration of one log call. Sinks receive them with every field as
/// the caller supplied it; the message has already been rendered into a bounded buffer.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    tag: &'a str,
    message: &'a str,
    library: Option<&'a str>,
    location: Option<Location<'a>>,
}

impl<'a> Record<'a> {
    /// Create a record without library identity or location.
    pub const fn new(level: Level, tag: &'a str, message: &'a str) -> Self {
        Record {
            level,
            tag,
            message,
            library: None,
            location: None,
        }
    }

    /// Attach a library identity, truncated to
    /// [`MAX_LIBRARY_NAME_LENGTH`](crate::config::MAX_LIBRARY_NAME_LENGTH) bytes.
    pub fn with_library(mut self, library: Option<&'a str>) -> Self {
        self.library = library.map(|name| truncate(name, MAX_LIBRARY_NAME_LENGTH));
        self
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Option<Location<'a>>) -> Self {
        self.location = location;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The owning library, if one was supplied.
    pub fn library(&self) -> Option<&'a str> {
        self.library
    }

    pub fn location(&self) -> Option<Location<'a>> {
        self.location
    }
}
