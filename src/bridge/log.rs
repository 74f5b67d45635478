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

//! Forward records from the [`log`] crate facade.
//!
//! Usually installed through [`LoggerBuilder::setup_log_crate`](crate::LoggerBuilder::setup_log_crate).

use std::sync::Arc;

use crate::Logger;
use crate::record::Location;

/// A [`log::Log`] implementation that forwards records to a [`Logger`].
///
/// The `log` target becomes the tag, the crate name (the first `::` segment of the module path)
/// becomes the library identity, and the file and line become the record location.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use clogforth::bridge::log::LogBridge;
///
/// let logger = Arc::new(clogforth::builder().library_tags(true).build());
/// log::set_boxed_logger(Box::new(LogBridge::new(logger.clone()))).unwrap();
/// log::set_max_level(log::LevelFilter::Trace);
///
/// log::info!(target: "Init", "ready");
/// ```
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

fn crate_name(module_path: &str) -> &str {
    module_path.split("::").next().unwrap_or(module_path)
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(metadata.level(), metadata.target())
    }

    fn log(&self, record: &log::Record) {
        let library = record.module_path().map(crate_name);
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(Location::new(file, line)),
            _ => None,
        };

        self.logger.log_args(
            record.level(),
            record.target(),
            library,
            location,
            *record.args(),
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}
