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

//! Logging macros.
//!
//! Every macro takes the logging target first: a [`Logger`](crate::Logger), a
//! [`Library`](crate::Library) handle, or anything that derefs to one. The call site's file and
//! line travel with the record.
//!
//! Levels above [`STATIC_MAX_LEVEL`](crate::STATIC_MAX_LEVEL) are rejected before the arguments
//! are evaluated, and the optimizer drops the call entirely.

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// use clogforth::Level;
///
/// let logger = clogforth::Logger::default();
/// clogforth::log!(logger, Level::Warn, "Pool", "{} of {} connections busy", 9, 10);
/// ```
#[macro_export]
macro_rules! log {
    ($target:expr, $lvl:expr, $tag:expr, $($arg:tt)+) => {{
        let lvl: $crate::Level = $lvl;
        if lvl <= $crate::STATIC_MAX_LEVEL {
            ($target).__private_api_log(
                lvl,
                $tag,
                ::core::option::Option::Some($crate::record::Location::new(
                    ::core::file!(),
                    ::core::line!(),
                )),
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

/// Log a message at the error level.
///
/// ```
/// let logger = clogforth::Logger::default();
/// clogforth::error!(logger, "Network", "connection refused: {}", "10.0.0.1:80");
/// ```
#[macro_export]
macro_rules! error {
    ($target:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::Level::Error, $tag, $($arg)+)
    };
}

/// Log a message at the warn level.
#[macro_export]
macro_rules! warn {
    ($target:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::Level::Warn, $tag, $($arg)+)
    };
}

/// Log a message at the info level.
#[macro_export]
macro_rules! info {
    ($target:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::Level::Info, $tag, $($arg)+)
    };
}

/// Log a message at the debug level.
#[macro_export]
macro_rules! debug {
    ($target:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::Level::Debug, $tag, $($arg)+)
    };
}

/// Log a message at the trace level.
#[macro_export]
macro_rules! trace {
    ($target:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::Level::Trace, $tag, $($arg)+)
    };
}

/// Log an error if a condition does not hold.
///
/// The record reads `ASSERTION FAILED: <condition> - <message>`. Nothing is checked or logged
/// unless [`ASSERTS_ENABLED`](crate::config::ASSERTS_ENABLED) is set, which is the case in debug
/// builds and with the `asserts` feature. Execution continues either way.
///
/// # Examples
///
/// ```
/// let logger = clogforth::Logger::default();
/// let free = 3;
/// clogforth::log_assert!(logger, free > 0, "Pool", "no free connections");
/// ```
#[macro_export]
macro_rules! log_assert {
    ($target:expr, $cond:expr, $tag:expr, $($arg:tt)+) => {
        if $crate::config::ASSERTS_ENABLED && !$cond {
            $crate::log!(
                $target,
                $crate::Level::Error,
                $tag,
                "ASSERTION FAILED: {} - {}",
                ::core::stringify!($cond),
                ::core::format_args!($($arg)+)
            );
        }
    };
}
