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

//! Sinks receive admitted records instead of the console.

use crate::record::Record;

/// A consumer of admitted records.
///
/// A registered sink replaces direct output: the logger hands it every record that passes the
/// level gate and tag filter, unformatted. Rendering, storage and forwarding are up to the sink.
///
/// Sinks run synchronously on the logging thread, so they should return promptly. The logger
/// holds no lock while a sink runs; a sink may log through the same logger.
///
/// Any `Fn(&Record)` closure is a sink:
///
/// ```
/// use clogforth::record::Record;
///
/// let logger = clogforth::builder()
///     .sink(|record: &Record| {
///         println!("{} {}: {}", record.level(), record.tag(), record.message());
///     })
///     .build();
///
/// clogforth::warn!(logger, "Net", "retrying in {}s", 5);
/// ```
pub trait Sink: Send + Sync + 'static {
    /// Consume one record.
    fn log(&self, record: &Record<'_>);
}

impl<F> Sink for F
where
    F: Fn(&Record<'_>) + Send + Sync + 'static,
{
    fn log(&self, record: &Record<'_>) {
        self(record)
    }
}
