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

use std::fmt;
use std::fmt::Arguments;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Append;
use crate::Color;
use crate::Layout;
use crate::Level;
use crate::LevelFilter;
use crate::Sink;
use crate::Trap;
use crate::config::COLORS_ENABLED;
use crate::config::MAX_LIBRARY_COLORS;
use crate::config::MAX_TAG_COLORS;
use crate::config::MESSAGE_CAPACITY;
use crate::filter::FilterMode;
use crate::filter::FilterResult;
use crate::filter::LevelGate;
use crate::filter::TagFilter;
use crate::format::MessageBuffer;
use crate::layout::Styling;
use crate::logger::Library;
use crate::platform::Platform;
use crate::record::Location;
use crate::record::Record;
use crate::registry::ColorRegistry;
use crate::registry::Outcome;
use crate::str::truncate;

/// A logging context.
///
/// A `Logger` owns everything that decides whether a record is emitted and what it looks like:
/// the level threshold, the tag filter, the tag and library color registries, the library-tag
/// switch, and the output route (a [`Sink`] or direct output through a [`Layout`] and an
/// [`Append`]). Contexts are independent of each other; create one with [`builder`] or
/// [`Logger::default`] and pass it to the code that logs.
///
/// All state sits behind a single mutex, so a `Logger` can be shared across threads in an
/// [`Arc`]. The lock is released before the message is formatted and before the sink or appender
/// runs.
///
/// # Examples
///
/// ```
/// use clogforth::LevelFilter;
///
/// let logger = clogforth::builder().level(LevelFilter::Debug).build();
///
/// logger.enable_tag("Database");
/// clogforth::debug!(logger, "Database", "connected in {}ms", 12);
/// clogforth::info!(logger, "Network", "filtered out by the whitelist");
/// ```
///
/// [`builder`]: crate::builder
pub struct Logger {
    state: Mutex<State>,
    layout: Box<dyn Layout>,
    append: Box<dyn Append>,
    trap: Box<dyn Trap>,
}

pub(crate) struct State {
    pub(crate) gate: LevelGate,
    pub(crate) tags: TagFilter,
    pub(crate) tag_colors: ColorRegistry<MAX_TAG_COLORS>,
    pub(crate) library_colors: ColorRegistry<MAX_LIBRARY_COLORS>,
    pub(crate) library_tags: bool,
    pub(crate) direct_output: bool,
    pub(crate) sink: Option<Arc<dyn Sink>>,
    pub(crate) platform: Platform,
}

enum Route {
    Sink(Arc<dyn Sink>),
    Direct(Styling),
}

impl State {
    fn enabled(&self, level: Level, tag: &str) -> bool {
        if self.gate.filter(level) == FilterResult::Reject {
            return false;
        }
        self.tags.filter(tag) != FilterResult::Reject
    }

    fn route(&self, tag: &str, library: Option<&str>) -> Option<Route> {
        if let Some(sink) = &self.sink {
            return Some(Route::Sink(Arc::clone(sink)));
        }
        if !self.direct_output {
            return None;
        }

        Some(Route::Direct(Styling {
            show_library: self.library_tags,
            colored: COLORS_ENABLED && self.platform.has_color_support(),
            tag_color: self.tag_colors.color(tag),
            library_color: library.map_or(Color::Default, |name| self.library_colors.color(name)),
        }))
    }
}

impl Default for Logger {
    fn default() -> Self {
        crate::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Logger")
            .field("level", &state.gate.threshold())
            .field("tags", &state.tags)
            .field("library_tags", &state.library_tags)
            .field("direct_output", &state.direct_output)
            .field("sink", &state.sink.is_some())
            .field("platform", &state.platform)
            .field("layout", &self.layout)
            .field("append", &self.append)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub(crate) fn new(
        state: State,
        layout: Box<dyn Layout>,
        append: Box<dyn Append>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            state: Mutex::new(state),
            layout,
            append,
            trap,
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The level threshold.
    pub fn level(&self) -> LevelFilter {
        self.state().gate.threshold()
    }

    /// Set the level threshold. Records more verbose than `level` are dropped.
    pub fn set_level(&self, level: LevelFilter) {
        self.state().gate.set_threshold(level);
    }

    /// Whether a record with this level and tag would be admitted.
    pub fn enabled(&self, level: Level, tag: &str) -> bool {
        self.state().enabled(level, tag)
    }

    /// The current tag filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.state().tags.mode()
    }

    /// Let `tag` through. See [`TagFilter::enable`].
    pub fn enable_tag(&self, tag: &str) -> Outcome {
        self.state().tags.enable(tag)
    }

    /// Hold `tag` back. See [`TagFilter::disable`].
    pub fn disable_tag(&self, tag: &str) -> Outcome {
        self.state().tags.disable(tag)
    }

    /// Let every tag through and forget the tag filter entries.
    pub fn enable_all_tags(&self) {
        self.state().tags.enable_all();
    }

    /// Switch to an empty whitelist: no tag passes until one is enabled.
    pub fn disable_all_tags(&self) {
        self.state().tags.disable_all();
    }

    /// Forget the tag filter entries, keeping the mode.
    pub fn clear_tag_filters(&self) {
        self.state().tags.clear();
    }

    pub fn is_tag_enabled(&self, tag: &str) -> bool {
        self.state().tags.is_enabled(tag)
    }

    /// Bind a display color to `tag`.
    pub fn set_tag_color(&self, tag: &str, color: Color) -> Outcome {
        self.state().tag_colors.upsert(tag, color)
    }

    pub fn clear_tag_color(&self, tag: &str) -> Outcome {
        self.state().tag_colors.remove(tag)
    }

    pub fn clear_all_tag_colors(&self) {
        self.state().tag_colors.clear();
    }

    /// The color bound to `tag`, or [`Color::Default`].
    pub fn tag_color(&self, tag: &str) -> Color {
        self.state().tag_colors.color(tag)
    }

    /// Bind a display color to a library identity.
    pub fn set_library_color(&self, library: &str, color: Color) -> Outcome {
        self.state().library_colors.upsert(library, color)
    }

    pub fn clear_library_color(&self, library: &str) -> Outcome {
        self.state().library_colors.remove(library)
    }

    pub fn clear_all_library_colors(&self) {
        self.state().library_colors.clear();
    }

    /// The color bound to `library`, or [`Color::Default`].
    pub fn library_color(&self, library: &str) -> Color {
        self.state().library_colors.color(library)
    }

    /// Show or hide the `[<LIBRARY>]` segment on direct output.
    pub fn enable_library_tags(&self, enabled: bool) {
        self.state().library_tags = enabled;
    }

    pub fn is_library_tags_enabled(&self) -> bool {
        self.state().library_tags
    }

    /// Route admitted records to `sink` instead of direct output.
    pub fn set_sink(&self, sink: impl Sink) {
        let mut state = self.state();
        state.sink = Some(Arc::new(sink));
        state.direct_output = false;
    }

    /// Remove the sink and go back to direct output.
    pub fn clear_sink(&self) {
        let mut state = self.state();
        state.sink = None;
        state.direct_output = true;
    }

    pub fn has_sink(&self) -> bool {
        self.state().sink.is_some()
    }

    /// Turn direct output on or off. Has no effect while a sink is registered.
    pub fn enable_direct_output(&self, enabled: bool) {
        self.state().direct_output = enabled;
    }

    pub fn is_direct_output_enabled(&self) -> bool {
        self.state().direct_output
    }

    pub fn platform(&self) -> Platform {
        self.state().platform
    }

    /// Behave as `platform`, e.g. to drop colors on a console that cannot show them.
    pub fn set_platform(&self, platform: Platform) {
        self.state().platform = platform;
    }

    /// Whether direct output will be colored.
    pub fn has_color_support(&self) -> bool {
        COLORS_ENABLED && self.platform().has_color_support()
    }

    /// Prepare the platform console. See [`Platform::init`].
    pub fn init(&self) {
        self.platform().init();
    }

    /// A handle that logs through this logger under the identity `name`.
    ///
    /// `name` is truncated to
    /// [`MAX_LIBRARY_NAME_LENGTH`](crate::config::MAX_LIBRARY_NAME_LENGTH) bytes.
    pub fn library(&self, name: &str) -> Library<'_> {
        Library::new(self, name)
    }

    /// Log an already built record.
    ///
    /// A message longer than [`MESSAGE_CAPACITY`] bytes is cut on a char boundary.
    pub fn log(&self, record: &Record<'_>) {
        let route = {
            let state = self.state();
            if !state.enabled(record.level(), record.tag()) {
                return;
            }
            state.route(record.tag(), record.library())
        };

        if let Some(route) = route {
            let message = truncate(record.message(), MESSAGE_CAPACITY);
            let record = Record::new(record.level(), record.tag(), message)
                .with_library(record.library())
                .with_location(record.location());
            self.dispatch(&record, route);
        }
    }

    /// Log a formatted message.
    pub fn log_fmt(&self, level: Level, tag: &str, args: Arguments<'_>) {
        self.log_args(level, tag, None, None, args);
    }

    pub fn error(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Error, tag, args);
    }

    pub fn warn(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Warn, tag, args);
    }

    pub fn info(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Info, tag, args);
    }

    pub fn debug(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Debug, tag, args);
    }

    pub fn trace(&self, tag: &str, args: Arguments<'_>) {
        self.log_fmt(Level::Trace, tag, args);
    }

    /// Flush the direct-output appender.
    pub fn flush(&self) {
        if let Err(err) = self.append.flush() {
            self.trap.trap(&err);
        }
    }

    #[doc(hidden)]
    pub fn __private_api_log(
        &self,
        level: Level,
        tag: &str,
        location: Option<Location<'_>>,
        args: Arguments<'_>,
    ) {
        self.log_args(level, tag, None, location, args);
    }

    pub(crate) fn log_args(
        &self,
        level: Level,
        tag: &str,
        library: Option<&str>,
        location: Option<Location<'_>>,
        args: Arguments<'_>,
    ) {
        let route = {
            let state = self.state();
            if !state.enabled(level, tag) {
                return;
            }
            match state.route(tag, library) {
                Some(route) => route,
                None => return,
            }
        };

        // formatted outside the lock: Display impls may log
        let message = MessageBuffer::<MESSAGE_CAPACITY>::format(args);
        let record = Record::new(level, tag, message.as_str())
            .with_library(library)
            .with_location(location);
        self.dispatch(&record, route);
    }

    fn dispatch(&self, record: &Record<'_>, route: Route) {
        match route {
            Route::Sink(sink) => sink.log(record),
            Route::Direct(styling) => {
                let result = self
                    .layout
                    .format(record, &styling)
                    .and_then(|line| self.append.append(&line));
                if let Err(err) = result {
                    self.trap.trap(&err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Error;
    use crate::layout::TextLayout;

    #[derive(Debug, Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Append for Capture {
        fn append(&self, line: &[u8]) -> Result<(), Error> {
            let line = String::from_utf8_lossy(line).into_owned();
            self.0.lock().unwrap().push(line);
            Ok(())
        }
    }

    impl Capture {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Append for Broken {
        fn append(&self, _: &[u8]) -> Result<(), Error> {
            Err(Error::from_io_error(std::io::Error::other("console gone")))
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Trap for Collect {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    fn capture(level: LevelFilter) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = crate::builder()
            .level(level)
            .layout(TextLayout::default().no_color())
            .append(capture.clone())
            .build();
        (logger, capture)
    }

    #[test]
    fn defaults() {
        let logger = Logger::default();
        assert_eq!(logger.level(), LevelFilter::Info);
        assert_eq!(logger.filter_mode(), FilterMode::AllowAll);
        assert!(!logger.is_library_tags_enabled());
        assert!(logger.is_direct_output_enabled());
        assert!(!logger.has_sink());
        assert_eq!(logger.tag_color("Any"), Color::Default);
        assert_eq!(logger.platform(), Platform::detect());
    }

    #[test]
    fn library_segment_follows_the_switch() {
        let (logger, out) = capture(LevelFilter::Info);
        let db = logger.library("DatabaseLib");

        logger.enable_library_tags(true);
        db.info("Init", format_args!("ready"));
        logger.enable_library_tags(false);
        db.info("Init", format_args!("ready"));

        assert_eq!(
            out.lines(),
            ["[INFO ] [DatabaseLib][Init]: ready", "[INFO ] [Init]: ready"]
        );
    }

    #[test]
    fn level_gate_and_tag_filter_both_apply() {
        let (logger, out) = capture(LevelFilter::Warn);

        logger.info("Net", format_args!("below threshold"));
        logger.warn("Net", format_args!("kept"));
        logger.disable_tag("Net");
        logger.error("Net", format_args!("blacklisted"));
        logger.error("Disk", format_args!("kept too"));

        assert_eq!(out.lines(), ["[WARN ] [Net]: kept", "[ERROR] [Disk]: kept too"]);
        assert!(!logger.enabled(Level::Error, "Net"));
        assert!(!logger.enabled(Level::Info, "Disk"));
    }

    #[test]
    fn sink_receives_raw_fields() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (logger, out) = capture(LevelFilter::Trace);
        let records = seen.clone();
        logger.set_sink(move |record: &Record<'_>| {
            records.lock().unwrap().push((
                record.level(),
                record.tag().to_string(),
                record.message().to_string(),
                record.library().map(str::to_string),
            ));
        });
        assert!(!logger.is_direct_output_enabled());

        logger.library("NetworkLib").debug("Http", format_args!("GET {}", "/"));
        logger.trace("Raw", format_args!("no library"));

        assert_eq!(
            *seen.lock().unwrap(),
            [
                (
                    Level::Debug,
                    "Http".to_string(),
                    "GET /".to_string(),
                    Some("NetworkLib".to_string())
                ),
                (Level::Trace, "Raw".to_string(), "no library".to_string(), None),
            ]
        );
        assert!(out.lines().is_empty());

        logger.clear_sink();
        logger.info("Back", format_args!("direct"));
        assert_eq!(out.lines(), ["[INFO ] [Back]: direct"]);
    }

    #[test]
    fn sink_may_log_through_the_same_logger() {
        let logger = Arc::new(crate::builder().build());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&logger);
        let records = seen.clone();
        logger.set_sink(move |record: &Record<'_>| {
            records.lock().unwrap().push(record.message().to_string());
            if record.tag() != "Echo" {
                if let Some(logger) = weak.upgrade() {
                    logger.info("Echo", format_args!("saw {}", record.message()));
                }
            }
        });

        logger.info("Main", format_args!("hello"));
        assert_eq!(*seen.lock().unwrap(), ["hello", "saw hello"]);
    }

    #[test]
    fn direct_output_off_drops_records() {
        let (logger, out) = capture(LevelFilter::Info);
        logger.enable_direct_output(false);
        logger.info("Quiet", format_args!("nobody hears this"));
        assert!(out.lines().is_empty());

        logger.enable_direct_output(true);
        logger.info("Loud", format_args!("heard"));
        assert_eq!(out.lines(), ["[INFO ] [Loud]: heard"]);
    }

    #[test]
    fn long_messages_are_truncated() {
        let (logger, out) = capture(LevelFilter::Info);
        let long = "B".repeat(1000);
        logger.info("Big", format_args!("{long}"));

        let lines = out.lines();
        let message = lines[0].strip_prefix("[INFO ] [Big]: ").unwrap();
        assert_eq!(message.len(), MESSAGE_CAPACITY);
        assert!(message.bytes().all(|b| b == b'B'));
    }

    #[test]
    fn prebuilt_records_are_truncated() {
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let seen = lengths.clone();
        let logger = crate::builder()
            .sink(move |record: &Record<'_>| seen.lock().unwrap().push(record.message().len()))
            .build();

        let long = "x".repeat(5000);
        let record = Record::new(Level::Info, "Big", &long);
        logger.log(&record);
        logger.library("BigLib").log(&record);

        let short = Record::new(Level::Info, "Small", "fits");
        logger.log(&short);

        assert_eq!(
            *lengths.lock().unwrap(),
            [MESSAGE_CAPACITY, MESSAGE_CAPACITY, 4]
        );
    }

    #[test]
    fn macros_capture_location_and_respect_filters() {
        let capture = Capture::default();
        let logger = crate::builder()
            .level(LevelFilter::Debug)
            .layout(TextLayout::default().no_color().file_line())
            .append(capture.clone())
            .build();

        crate::debug!(logger, "Macro", "x = {}", 1);
        crate::trace!(logger, "Macro", "filtered");

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[DEBUG] [Macro (src/logger/logger.rs:"), "{}", lines[0]);
        assert!(lines[0].ends_with(")]: x = 1"), "{}", lines[0]);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn assertion_failures_are_logged() {
        let (logger, out) = capture(LevelFilter::Error);
        let connections = 0;

        crate::log_assert!(logger, connections > 0, "Pool", "need {} more", 2);
        crate::log_assert!(logger, connections == 0, "Pool", "not logged");

        assert_eq!(
            out.lines(),
            ["[ERROR] [Pool]: ASSERTION FAILED: connections > 0 - need 2 more"]
        );
    }

    #[test]
    fn appender_failures_go_to_the_trap() {
        let trap = Collect::default();
        let logger = crate::builder()
            .append(Broken)
            .trap(trap.clone())
            .build();

        logger.error("Disk", format_args!("lost"));

        let errors = trap.0.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("failed to write log output"), "{}", errors[0]);
        assert!(errors[0].contains("console gone"), "{}", errors[0]);
    }

    #[test]
    fn colors_are_bound_per_name() {
        let logger = Logger::default();

        assert_eq!(logger.set_tag_color("Net", Color::Blue), Outcome::Inserted);
        assert_eq!(logger.set_tag_color("Net", Color::Red), Outcome::Updated);
        assert_eq!(logger.tag_color("Net"), Color::Red);
        assert_eq!(logger.set_tag_color("", Color::Red), Outcome::Ignored);

        assert_eq!(
            logger.set_library_color("DatabaseLib", Color::BrightCyan),
            Outcome::Inserted
        );
        assert_eq!(logger.library_color("DatabaseLib"), Color::BrightCyan);
        assert_eq!(logger.clear_library_color("DatabaseLib"), Outcome::Removed);
        assert_eq!(logger.library_color("DatabaseLib"), Color::Default);

        for i in 0..MAX_LIBRARY_COLORS {
            let outcome = logger.set_library_color(&format!("lib{i}"), Color::Green);
            assert_eq!(outcome, Outcome::Inserted);
        }
        assert_eq!(
            logger.set_library_color("overflow", Color::Green),
            Outcome::Saturated
        );
        assert_eq!(logger.library_color("overflow"), Color::Default);

        logger.clear_all_library_colors();
        logger.clear_all_tag_colors();
        assert_eq!(logger.library_color("lib0"), Color::Default);
        assert_eq!(logger.tag_color("Net"), Color::Default);
    }

    #[cfg(feature = "colored")]
    #[test]
    fn tag_colors_paint_the_tag_token() {
        colored::control::set_override(true);

        let capture = Capture::default();
        let logger = crate::builder()
            .platform(Platform::Linux)
            .append(capture.clone())
            .build();
        logger.set_tag_color("Net", Color::Red);

        logger.info("Net", format_args!("x"));
        logger.info("Other", format_args!("y"));
        assert_eq!(
            capture.lines(),
            [
                "[\u{1b}[92mINFO \u{1b}[0m] [\u{1b}[31mNet\u{1b}[0m]: x",
                "[\u{1b}[92mINFO \u{1b}[0m] [Other]: y",
            ]
        );

        let capture = Capture::default();
        let logger = crate::builder()
            .platform(Platform::Arduino)
            .append(capture.clone())
            .build();
        logger.set_tag_color("Net", Color::Red);

        logger.info("Net", format_args!("x"));
        assert_eq!(capture.lines(), ["[INFO ] [Net]: x"]);
    }

    #[test]
    fn platform_controls_color_support() {
        let logger = crate::builder().platform(Platform::Arduino).build();
        assert!(!logger.has_color_support());

        logger.set_platform(Platform::Linux);
        assert_eq!(logger.has_color_support(), COLORS_ENABLED);
    }

    #[test]
    fn shared_across_threads() {
        let (logger, out) = capture(LevelFilter::Info);
        let logger = Arc::new(logger);

        let handles = (0..4)
            .map(|i| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    let lib = format!("Lib{i}");
                    for n in 0..10 {
                        logger.library(&lib).info("Work", format_args!("{n}"));
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(out.lines().len(), 40);
    }
}
