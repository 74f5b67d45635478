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

//! Platform capabilities.

use std::fmt;

/// The platform a logger renders for.
///
/// [`Platform::detect`] picks the platform of the compilation target. A logger may be told to
/// behave as another platform with [`Logger::set_platform`](crate::Logger::set_platform), which
/// changes capability answers such as color support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Platform {
    /// A generic Arduino board.
    Arduino,
    /// ESP32 under the Arduino framework.
    Esp32,
    /// ESP8266 under the Arduino framework.
    Esp8266,
    /// RP2040 under the Arduino framework.
    Rp2040Arduino,
    /// RP2040 under the Pico SDK.
    Rp2040Sdk,
    /// ESP-IDF.
    EspIdf,
    /// Windows desktop.
    Windows,
    /// Linux desktop.
    Linux,
    /// macOS desktop.
    MacOs,
    /// Anything else.
    Unknown,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::detect()
    }
}

impl Platform {
    /// The platform of the compilation target.
    pub const fn detect() -> Platform {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "espidf") {
            Platform::EspIdf
        } else {
            Platform::Unknown
        }
    }

    /// Human readable platform name.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Arduino => "Arduino-AVR",
            Platform::Esp32 => "ESP32",
            Platform::Esp8266 => "ESP8266",
            Platform::Rp2040Arduino => "RP2040-Arduino",
            Platform::Rp2040Sdk => "RP2040-SDK",
            Platform::EspIdf => "ESP-IDF",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Unknown => "Unknown",
        }
    }

    pub const fn is_desktop(self) -> bool {
        matches!(self, Platform::Windows | Platform::Linux | Platform::MacOs)
    }

    pub const fn is_embedded(self) -> bool {
        matches!(
            self,
            Platform::Arduino
                | Platform::Esp32
                | Platform::Esp8266
                | Platform::Rp2040Arduino
                | Platform::Rp2040Sdk
                | Platform::EspIdf
        )
    }

    /// Whether the platform runs the Arduino framework.
    pub const fn is_arduino(self) -> bool {
        matches!(
            self,
            Platform::Arduino | Platform::Esp32 | Platform::Esp8266 | Platform::Rp2040Arduino
        )
    }

    /// Whether the platform console understands ANSI colors.
    pub const fn has_color_support(self) -> bool {
        self.is_desktop() || matches!(self, Platform::EspIdf)
    }

    /// Whether the platform console offers a native printf.
    pub const fn has_printf_support(self) -> bool {
        self.is_arduino() || matches!(self, Platform::EspIdf)
    }

    /// Suggested message buffer size for the platform.
    ///
    /// Advisory only: the logger always formats into [`MESSAGE_CAPACITY`] bytes. Use this to
    /// size a [`MessageBuffer`] of your own.
    ///
    /// [`MESSAGE_CAPACITY`]: crate::config::MESSAGE_CAPACITY
    /// [`MessageBuffer`]: crate::format::MessageBuffer
    pub const fn default_buffer_size(self) -> usize {
        if self.is_embedded() { 256 } else { 1024 }
    }

    /// Prepare the console for output.
    ///
    /// On Windows this turns on virtual terminal processing so ANSI colors render. Elsewhere it
    /// does nothing.
    pub fn init(self) {
        #[cfg(all(windows, feature = "colored"))]
        if matches!(self, Platform::Windows) {
            let _ = colored::control::set_virtual_terminal(true);
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
