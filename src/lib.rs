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

//! Clogforth is a small, tag-aware logging facility for applications composed of several
//! libraries.
//!
//! # Overview
//!
//! Every record carries a severity [`Level`], a short tag naming its subsystem, and optionally
//! the identity of the library that produced it. A [`Logger`] decides what gets through with a
//! level threshold and a three-mode tag filter (allow all, whitelist, blacklist), then either
//! hands the record to a user [`Sink`] or renders it as a text line for the console, colored per
//! level, per tag, and per library.
//!
//! All state is bounded: the tag filter and the color registries have fixed capacities, and the
//! formatted message is cut at [`MESSAGE_CAPACITY`](config::MESSAGE_CAPACITY) bytes. A full table
//! is reported through [`Outcome::Saturated`] instead of growing.
//!
//! # Examples
//!
//! Direct output with a whitelist:
//!
//! ```
//! use clogforth::LevelFilter;
//!
//! let logger = clogforth::builder().level(LevelFilter::Debug).build();
//!
//! logger.enable_tag("Database");
//! clogforth::debug!(logger, "Database", "query took {}ms", 3);
//! clogforth::info!(logger, "Network", "not shown: whitelist mode");
//! ```
//!
//! Libraries sharing one logger, each with its own identity and color:
//!
//! ```
//! use clogforth::Color;
//!
//! let logger = clogforth::builder().library_tags(true).build();
//! logger.set_library_color("DatabaseLib", Color::BrightCyan);
//! logger.set_library_color("NetworkLib", Color::BrightMagenta);
//!
//! let db = logger.library("DatabaseLib");
//! let net = logger.library("NetworkLib");
//! clogforth::info!(db, "Init", "pool ready");
//! clogforth::warn!(net, "Http", "retrying in {}s", 5);
//! ```
//!
//! Capturing records with a sink:
//!
//! ```
//! use clogforth::record::Record;
//!
//! let logger = clogforth::builder()
//!     .sink(|record: &Record| {
//!         eprintln!("{} {} {}", record.level(), record.tag(), record.message());
//!     })
//!     .build();
//!
//! clogforth::error!(logger, "Storage", "disk full");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod color;
pub mod config;
pub mod filter;
pub mod format;
pub mod layout;
pub mod platform;
pub mod record;
pub mod registry;
pub mod sink;
pub mod trap;

pub use append::Append;
pub use color::Color;
pub use config::STATIC_MAX_LEVEL;
pub use filter::FilterMode;
pub use layout::Layout;
pub use platform::Platform;
pub use record::Level;
pub use record::LevelFilter;
pub use registry::Outcome;
pub use sink::Sink;
pub use trap::Trap;

mod error;
pub use error::Error;

mod logger;
pub use logger::*;

mod macros;
mod str;
