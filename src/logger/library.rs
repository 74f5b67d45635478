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

use std::fmt::Arguments;

use crate::Level;
use crate::Logger;
use crate::config::MAX_LIBRARY_NAME_LENGTH;
use crate::record::Location;
use crate::record::Record;
use crate::str::BoundedStr;

/// A library's view of a [`Logger`].
///
/// Every record logged through the handle carries the library identity, which direct output
/// shows as `[<LIBRARY>]` when library tags are enabled and colors with the library's registered
/// color. The identity is bound to the handle, so libraries logging concurrently through the
/// same logger never see each other's name.
///
/// # Examples
///
/// ```
/// use clogforth::Color;
///
/// let logger = clogforth::builder().library_tags(true).build();
/// logger.set_library_color("DatabaseLib", Color::BrightCyan);
///
/// let db = logger.library("DatabaseLib");
/// clogforth::info!(db, "Init", "pool ready with {} connections", 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Library<'a> {
    logger: &'a Logger,
    name: BoundedStr<MAX_LIBRARY_NAME_LENGTH>,
}

impl<'a> Library<'a> {
    pub(crate) fn new(logger: &'a Logger, name: &str) -> Self {
        Self {
            logger,
            name: BoundedStr::from_truncated(name),
        }
    }

    /// The library identity.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    /// Log `record` under this library's identity, replacing any identity it carries.
    pub fn log(&self, record: &Record<'_>) {
        let record = record.with_library(Some(self.name()));
        self.logger.log(&record);
    }

    /// Log a formatted message.
    pub fn log_fmt(&self, level: Level, tag: &str, args: Arguments<'_>) {
        self.logger
            .log_args(level, tag, Some(self.name()), None, args);
    }

    pub fn error(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Error, tag, args);
    }

    pub fn warn(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Warn, tag, args);
    }

    pub fn info(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Info, tag, args);
    }

    pub fn debug(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Debug, tag, args);
    }

    pub fn trace(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Trace, tag, args);
    }

    #[doc(hidden)]
    pub fn __private_api_log(
        &self,
        level: Level,
        tag: &str,
        location: Option<Location<'_>>,
        args: Arguments<'_>,
    ) {
        self.logger
            .log_args(level, tag, Some(self.name()), location, args);
    }
}
