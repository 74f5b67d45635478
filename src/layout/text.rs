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

use std::fmt::Write;

#[cfg(feature = "jiff")]
use jiff::Timestamp;
#[cfg(feature = "jiff")]
use jiff::tz::TimeZone;

use crate::Color;
use crate::Error;
use crate::color::LevelColor;
use crate::layout::Layout;
use crate::layout::Styling;
use crate::record::Record;
use crate::record::level_label;

/// A layout that formats log record as optionally colored text.
///
/// Output format:
///
/// ```text
/// [ERROR] [Network]: connection refused
/// [WARN ] [DatabaseLib][Pool]: 9/10 connections busy
/// [INFO ] [DatabaseLib][Init]: ready
/// ```
///
/// The `[DatabaseLib]` segment appears only when the logger shows library tags and the record
/// carries a non-empty library identity.
///
/// The level is colored from a fixed table (see [`LevelColor`]); tag and library are colored
/// with whatever the logger's registries bind to them. Nothing is colored when the platform
/// lacks color support or [`no_color`](TextLayout::no_color) is set.
///
/// # Examples
///
/// ```
/// use clogforth::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color().file_line();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
    file_line: bool,
    #[cfg(feature = "jiff")]
    timezone: Option<TimeZone>,
}

impl TextLayout {
    /// Customize the color of the error log level. Default to bright red.
    pub fn error_color(mut self, color: Color) -> Self {
        self.colors.error = color;
        self
    }

    /// Customize the color of the warn log level. Default to bright yellow.
    pub fn warn_color(mut self, color: Color) -> Self {
        self.colors.warn = color;
        self
    }

    /// Customize the color of the info log level. Default to bright green.
    pub fn info_color(mut self, color: Color) -> Self {
        self.colors.info = color;
        self
    }

    /// Customize the color of the debug log level. Default to bright blue.
    pub fn debug_color(mut self, color: Color) -> Self {
        self.colors.debug = color;
        self
    }

    /// Customize the color of the trace log level. Default to bright black.
    pub fn trace_color(mut self, color: Color) -> Self {
        self.colors.trace = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Append the call site to the tag, as in `[Init (src/db.rs:42)]`.
    pub fn file_line(mut self) -> Self {
        self.file_line = true;
        self
    }

    /// Prefix every line with a timestamp in the system timezone.
    #[cfg(feature = "jiff")]
    pub fn timestamps(self) -> Self {
        self.timezone(TimeZone::system())
    }

    /// Prefix every line with a timestamp in the given timezone.
    ///
    /// # Examples
    ///
    /// ```
    /// use clogforth::layout::TextLayout;
    /// use jiff::tz::TimeZone;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    #[cfg(feature = "jiff")]
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = Some(tz);
        self
    }
}

#[cfg_attr(not(feature = "colored"), allow(unused_variables))]
fn paint(out: &mut String, text: &str, color: Color, colored: bool) -> Result<(), Error> {
    #[cfg(feature = "colored")]
    if colored {
        if let Some(color) = color.to_colored() {
            use colored::Colorize;
            return write!(out, "{}", text.color(color)).map_err(Error::from_fmt_error);
        }
    }

    out.push_str(text);
    Ok(())
}

impl Layout for TextLayout {
    fn format(&self, record: &Record, styling: &Styling) -> Result<Vec<u8>, Error> {
        let colored = styling.colored && !self.no_color;
        let mut text = String::new();

        #[cfg(feature = "jiff")]
        if let Some(tz) = &self.timezone {
            let ts = Timestamp::now();
            write!(&mut text, "{:.6} ", ts.display_with_offset(tz.to_offset(ts)))
                .map_err(Error::from_fmt_error)?;
        }

        let level = record.level();
        text.push('[');
        paint(&mut text, level_label(level), self.colors.color_of(level), colored)?;
        text.push_str("] ");

        if styling.show_library {
            if let Some(library) = record.library().filter(|name| !name.is_empty()) {
                text.push('[');
                paint(&mut text, library, styling.library_color, colored)?;
                text.push(']');
            }
        }

        text.push('[');
        paint(&mut text, record.tag(), styling.tag_color, colored)?;
        if let Some(location) = record.location().filter(|_| self.file_line) {
            write!(&mut text, " ({}:{})", location.file(), location.line())
                .map_err(Error::from_fmt_error)?;
        }
        text.push_str("]: ");
        text.push_str(record.message());

        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::Level;
    use crate::record::Location;

    fn render(layout: &TextLayout, record: &Record, styling: &Styling) -> String {
        String::from_utf8(layout.format(record, styling).unwrap()).unwrap()
    }

    fn with_library() -> Styling {
        Styling {
            show_library: true,
            ..Styling::default()
        }
    }

    #[test]
    fn library_segment_when_enabled() {
        let record = Record::new(Level::Info, "Init", "ready").with_library(Some("DatabaseLib"));
        let line = render(&TextLayout::default(), &record, &with_library());
        assert_snapshot!(line, @"[INFO ] [DatabaseLib][Init]: ready");
    }

    #[test]
    fn no_library_segment_when_disabled() {
        let record = Record::new(Level::Info, "Init", "ready").with_library(Some("DatabaseLib"));
        let line = render(&TextLayout::default(), &record, &Styling::default());
        assert_snapshot!(line, @"[INFO ] [Init]: ready");
    }

    #[test]
    fn no_stray_brackets_without_identity() {
        let layout = TextLayout::default();
        let record = Record::new(Level::Warn, "Pool", "busy");
        assert_snapshot!(render(&layout, &record, &with_library()), @"[WARN ] [Pool]: busy");

        let record = record.with_library(Some(""));
        assert_snapshot!(render(&layout, &record, &with_library()), @"[WARN ] [Pool]: busy");
    }

    #[test]
    fn file_line_decorates_the_tag() {
        let record = Record::new(Level::Error, "Net", "refused")
            .with_location(Some(Location::new("src/net.rs", 42)));

        let plain = render(&TextLayout::default(), &record, &Styling::default());
        assert_snapshot!(plain, @"[ERROR] [Net]: refused");

        let located = render(&TextLayout::default().file_line(), &record, &Styling::default());
        assert_snapshot!(located, @"[ERROR] [Net (src/net.rs:42)]: refused");
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn timestamps_prefix_the_line() {
        let layout = TextLayout::default().timezone(TimeZone::UTC);
        let record = Record::new(Level::Debug, "Clock", "tick");
        let line = render(&layout, &record, &Styling::default());

        let (time, rest) = line.split_once(' ').unwrap();
        assert!(time.ends_with("+00:00"), "{time}");
        assert_eq!(rest, "[DEBUG] [Clock]: tick");
    }

    #[cfg(feature = "colored")]
    #[test]
    fn colors_follow_styling() {
        colored::control::set_override(true);

        let record = Record::new(Level::Info, "Init", "ready").with_library(Some("DatabaseLib"));
        let styling = Styling {
            show_library: true,
            colored: true,
            tag_color: Color::Default,
            library_color: Color::BrightCyan,
        };

        let line = render(&TextLayout::default(), &record, &styling);
        assert_eq!(
            line,
            "[\u{1b}[92mINFO \u{1b}[0m] [\u{1b}[96mDatabaseLib\u{1b}[0m][Init]: ready"
        );

        let line = render(&TextLayout::default().no_color(), &record, &styling);
        assert_eq!(line, "[INFO ] [DatabaseLib][Init]: ready");
    }
}
