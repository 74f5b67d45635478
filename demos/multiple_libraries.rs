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
use clogforth::Library;

fn connect(db: Library<'_>) {
    clogforth::info!(db, "Init", "pool ready with {} connections", 8);
    clogforth::warn!(db, "Pool", "{}/{} connections busy", 9, 10);
}

fn fetch(net: Library<'_>) {
    clogforth::info!(net, "Http", "GET /status");
    clogforth::error!(net, "Http", "connection refused");
}

fn main() {
    let logger = clogforth::builder().library_tags(true).build();
    logger.set_library_color("DatabaseLib", Color::BrightCyan);
    logger.set_library_color("NetworkLib", Color::BrightMagenta);
    logger.set_tag_color("Http", Color::Yellow);

    connect(logger.library("DatabaseLib"));
    fetch(logger.library("NetworkLib"));

    logger.enable_library_tags(false);
    clogforth::info!(logger.library("DatabaseLib"), "Init", "library tags hidden");
}
