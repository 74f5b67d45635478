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

use clogforth::LevelFilter;
use clogforth::layout::TextLayout;

fn main() {
    let logger = clogforth::builder()
        .level(LevelFilter::Trace)
        .library_tags(true)
        .layout(TextLayout::default().file_line())
        .setup_log_crate();

    log::error!(target: "Network", "Hello error!");
    log::warn!(target: "Network", "Hello warn!");
    log::info!(target: "Storage", "Hello info!");
    log::debug!("Hello debug!");
    log::trace!("Hello trace!");

    logger.set_level(LevelFilter::Info);
    log::debug!("dropped after lowering the threshold");
}
