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

use std::env;
use std::fmt;
use std::sync::Arc;

use crate::Append;
use crate::Error;
use crate::Layout;
use crate::LevelFilter;
use crate::Logger;
use crate::Sink;
use crate::Trap;
use crate::append;
use crate::bridge::log::LogBridge;
use crate::config::DEFAULT_LEVEL;
use crate::filter::LevelGate;
use crate::filter::TagFilter;
use crate::layout::TextLayout;
use crate::logger::logger::State;
use crate::platform::Platform;
use crate::registry::ColorRegistry;
use crate::trap::DefaultTrap;

/// Create a new empty [`LoggerBuilder`].
///
/// The default logger writes colored text lines to stdout at [`LevelFilter::Info`], lets every
/// tag through, and hides library tags.
///
/// # Examples
///
/// ```
/// use clogforth::LevelFilter;
/// use clogforth::append;
///
/// let logger = clogforth::builder()
///     .level(LevelFilter::Debug)
///     .library_tags(true)
///     .append(append::Stderr::default())
///     .build();
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder::default()
}

/// A builder for configuring a [`Logger`]. See also [`builder`] for a fluent API.
#[must_use = "call `build` to construct the logger"]
pub struct LoggerBuilder {
    level: LevelFilter,
    sink: Option<Arc<dyn Sink>>,
    direct_output: bool,
    library_tags: bool,
    platform: Platform,
    layout: Box<dyn Layout>,
    append: Box<dyn Append>,
    trap: Box<dyn Trap>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            sink: None,
            direct_output: true,
            library_tags: false,
            platform: Platform::detect(),
            layout: Box::new(TextLayout::default()),
            append: Box::new(append::Stdout::default()),
            trap: Box::new(DefaultTrap::default()),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("level", &self.level)
            .field("sink", &self.sink.is_some())
            .field("direct_output", &self.direct_output)
            .field("library_tags", &self.library_tags)
            .field("platform", &self.platform)
            .field("layout", &self.layout)
            .field("append", &self.append)
            .field("trap", &self.trap)
            .finish()
    }
}

impl LoggerBuilder {
    /// Set the level threshold.
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Read the level threshold from the environment variable `name`.
    ///
    /// Accepts the level names understood by [`LevelFilter`]'s `FromStr` (`off`, `error`, ...,
    /// `trace`, case-insensitive) and the numbers `0` (off) to `5` (trace). An unset variable
    /// leaves the threshold unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but holds neither a level name nor a number in
    /// range, or is not valid unicode.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), clogforth::Error> {
    /// let logger = clogforth::builder().level_from_env("CLOG_LEVEL")?.build();
    /// # Ok(())
    /// # }
    /// ```
    pub fn level_from_env(mut self, name: &str) -> Result<Self, Error> {
        let value = match env::var(name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(self),
            Err(err) => {
                return Err(Error::new("failed to read log level")
                    .with_context("variable", name)
                    .with_source(err));
            }
        };

        self.level = parse_level(value.trim()).map_err(|err| {
            Error::new("invalid log level")
                .with_context("variable", name)
                .with_context("value", &value)
                .with_source(err)
        })?;
        Ok(self)
    }

    /// Route records to `sink` instead of direct output.
    pub fn sink(mut self, sink: impl Sink) -> Self {
        self.sink = Some(Arc::new(sink));
        self.direct_output = false;
        self
    }

    /// Turn direct output on or off. Default to on.
    pub fn direct_output(mut self, enabled: bool) -> Self {
        self.direct_output = enabled;
        self
    }

    /// Show the `[<LIBRARY>]` segment on direct output. Default to off.
    pub fn library_tags(mut self, enabled: bool) -> Self {
        self.library_tags = enabled;
        self
    }

    /// Override the detected platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the [`Layout`] for direct output. Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the [`Append`] for direct output. Default to [`Stdout`](append::Stdout).
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.append = append.into();
        self
    }

    /// Set the [`Trap`] receiving direct-output failures. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Construct the [`Logger`].
    pub fn build(self) -> Logger {
        let state = State {
            gate: LevelGate::new(self.level),
            tags: TagFilter::new(),
            tag_colors: ColorRegistry::new(),
            library_colors: ColorRegistry::new(),
            library_tags: self.library_tags,
            direct_output: self.direct_output,
            sink: self.sink,
            platform: self.platform,
        };
        Logger::new(state, self.layout, self.append, self.trap)
    }

    /// Construct the [`Logger`] and install it as the `log` crate's global logger.
    ///
    /// Records from `log::info!` and friends take their tag from the `log` target and their
    /// library identity from the crate name in the module path.
    ///
    /// # Errors
    ///
    /// Returns an error if a global `log` logger is already installed.
    pub fn try_setup_log_crate(self) -> Result<Arc<Logger>, Error> {
        let logger = Arc::new(self.build());
        log::set_boxed_logger(Box::new(LogBridge::new(logger.clone())))
            .map_err(|err| Error::new("failed to set up the global logger").with_source(err))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(logger)
    }

    /// Construct the [`Logger`] and install it as the `log` crate's global logger.
    ///
    /// # Panics
    ///
    /// Panics if a global `log` logger is already installed.
    pub fn setup_log_crate(self) -> Arc<Logger> {
        self.try_setup_log_crate().expect(
            "LoggerBuilder::setup_log_crate should not be called after the global logger initialized",
        )
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, log::ParseLevelError> {
    if let Ok(n) = value.parse::<usize>() {
        if let Some(level) = LevelFilter::iter().nth(n) {
            return Ok(level);
        }
    }
    value.parse()
}
