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

use clogforth::Color;
use clogforth::LevelFilter;

fn main() {
    println!("{}", clogforth::config::summary());

    let logger = clogforth::builder().level(LevelFilter::Trace).build();
    logger.init();
    logger.set_tag_color("Network", Color::BrightMagenta);

    clogforth::error!(logger, "Network", "Hello error!");
    clogforth::warn!(logger, "Network", "Hello warn!");
    clogforth::info!(logger, "Storage", "Hello info!");
    clogforth::debug!(logger, "Storage", "Hello debug!");
    clogforth::trace!(logger, "Storage", "Hello trace!");

    logger.enable_tag("Storage");
    clogforth::info!(logger, "Network", "hidden by the whitelist");
    clogforth::info!(logger, "Storage", "still shown");

    let connections = 0;
    clogforth::log_assert!(logger, connections > 0, "Storage", "pool is empty");
}
