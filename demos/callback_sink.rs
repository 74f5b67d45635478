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
use clogforth::record::Record;

fn main() {
    let logger = clogforth::builder()
        .level(LevelFilter::Debug)
        .sink(|record: &Record| {
            println!(
                "[sink] level={} library={} tag={} message={}",
                record.level(),
                record.library().unwrap_or("-"),
                record.tag(),
                record.message(),
            );
        })
        .build();

    clogforth::info!(logger, "Sensor", "temperature {:.1}C", 21.5);
    clogforth::debug!(logger.library("DriverLib"), "I2C", "read {} bytes", 4);

    logger.clear_sink();
    clogforth::info!(logger, "Sensor", "back on the console");
}
