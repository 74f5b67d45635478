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

use crate::Error;
use crate::append::Append;

/// An appender that writes log lines that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// use clogforth::append::Testing;
///
/// let logger = clogforth::builder().append(Testing::default()).build();
/// clogforth::info!(logger, "Test", "captured by the harness");
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Testing {}

impl Append for Testing {
    fn append(&self, line: &[u8]) -> Result<(), Error> {
        eprintln!("{}", String::from_utf8_lossy(line));
        Ok(())
    }
}
