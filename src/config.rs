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

//! Compile-time configuration.
//!
//! Capacities are fixed when the crate is built. The bounded types ([`TagFilter`],
//! [`ColorRegistry`], [`MessageBuffer`]) take their capacity as a const generic parameter and
//! default to the values below.
//!
//! The level ceiling is selected with the `max-level-*` and `release-max-level-*` cargo features,
//! which are forwarded to the `log` crate. Calls above the ceiling made through the logging
//! macros are removed at compile time.
//!
//! [`TagFilter`]: crate::filter::TagFilter
//! [`ColorRegistry`]: crate::registry::ColorRegistry
//! [`MessageBuffer`]: crate::format::MessageBuffer

use std::fmt;

use crate::LevelFilter;

/// Level used by a freshly built logger.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// The compile-time level ceiling.
pub const STATIC_MAX_LEVEL: LevelFilter = log::STATIC_MAX_LEVEL;

/// Size in bytes of the buffer a log message is rendered into.
pub const MESSAGE_CAPACITY: usize = 512;

/// Number of tag filter entries.
pub const MAX_TAG_FILTERS: usize = 16;

/// Number of tag color bindings.
pub const MAX_TAG_COLORS: usize = 32;

/// Number of library color bindings.
pub const MAX_LIBRARY_COLORS: usize = 16;

/// Longest stored registry name, in bytes.
pub const MAX_NAME_LENGTH: usize = 31;

/// Longest library identity, in bytes.
pub const MAX_LIBRARY_NAME_LENGTH: usize = 32;

/// Whether colored output was compiled in.
pub const COLORS_ENABLED: bool = cfg!(feature = "colored");

/// Whether timestamps can be rendered.
pub const TIMESTAMPS_ENABLED: bool = cfg!(feature = "jiff");

/// Whether [`log_assert!`](crate::log_assert) emits records.
pub const ASSERTS_ENABLED: bool = cfg!(any(debug_assertions, feature = "asserts"));

const _: () = assert!(MESSAGE_CAPACITY >= 64, "message buffer must hold at least 64 bytes");
const _: () = assert!(MESSAGE_CAPACITY <= 4096, "message buffer must not exceed 4096 bytes");
const _: () = assert!(MAX_TAG_FILTERS >= 1);
const _: () = assert!(MAX_NAME_LENGTH >= 4);

/// A printable summary of the compile-time configuration.
///
/// # Examples
///
/// ```
/// println!("{}", clogforth::config::summary());
/// ```
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Summary {}

/// Return the [`Summary`] of this build.
pub fn summary() -> Summary {
    Summary {}
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn toggle(on: bool) -> &'static str {
            if on { "enabled" } else { "disabled" }
        }

        writeln!(f, "clogforth configuration:")?;
        writeln!(f, "  Default level: {DEFAULT_LEVEL}")?;
        writeln!(f, "  Static max level: {STATIC_MAX_LEVEL}")?;
        writeln!(f, "  Message buffer: {MESSAGE_CAPACITY} bytes")?;
        writeln!(f, "  Tag filters: {MAX_TAG_FILTERS}")?;
        writeln!(f, "  Tag colors: {MAX_TAG_COLORS}")?;
        writeln!(f, "  Library colors: {MAX_LIBRARY_COLORS}")?;
        writeln!(f, "  Max library name: {MAX_LIBRARY_NAME_LENGTH} bytes")?;
        writeln!(f, "  Colors: {}", toggle(COLORS_ENABLED))?;
        writeln!(f, "  Timestamps: {}", toggle(TIMESTAMPS_ENABLED))?;
        write!(f, "  Asserts: {}", toggle(ASSERTS_ENABLED))
    }
}
