// Copyright 2025 Slogger Developers
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

//! Options consumed by the [`Logger`](crate::Logger) factory.

use std::fmt;
use std::sync::Arc;

use log::LevelFilter;

use crate::attr::Attr;
use crate::destination::Destination;
use crate::destination::Stdout;
use crate::level::parse_level;

/// The output encoding of a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Space-separated `key=value` fields.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl Mode {
    /// Map a mode name to a `Mode`.
    ///
    /// Only `"json"` (in any casing) selects [`Mode::Json`]; every other
    /// name, including the empty string, selects [`Mode::Text`].
    pub fn from_name(name: &str) -> Mode {
        if name.eq_ignore_ascii_case("json") {
            Mode::Json
        } else {
            Mode::Text
        }
    }
}

/// Options describing what a logger writes and where.
///
/// Construction seeds a grouped `system` attribute carrying the service and
/// application names, a stdout destination, and text encoding. Later builder
/// calls override scalar fields (last write wins) and accumulate attributes.
///
/// # Examples
///
/// ```
/// use slogger::Attr;
/// use slogger::LoggerOpts;
///
/// let opts = LoggerOpts::new("orders", "checkout-api")
///     .json_output()
///     .attr(Attr::new("env", "production"));
/// ```
#[must_use = "pass the options to Logger::new or Logger::with_handler"]
#[derive(Debug, Clone)]
pub struct LoggerOpts {
    pub(crate) destination: Arc<dyn Destination>,
    pub(crate) mode: Mode,
    pub(crate) attrs: Vec<Attr>,
    #[cfg(feature = "trace")]
    pub(crate) trace: Option<TraceOpts>,
}

impl LoggerOpts {
    /// Create options for the given service and application names.
    pub fn new(service_name: impl Into<String>, application_name: impl Into<String>) -> Self {
        LoggerOpts {
            destination: Arc::new(Stdout::default()),
            mode: Mode::Text,
            attrs: vec![Attr::group(
                "system",
                [
                    Attr::new("service", service_name.into()),
                    Attr::new("applicationName", application_name.into()),
                ],
            )],
            #[cfg(feature = "trace")]
            trace: None,
        }
    }

    /// Set the destination that records are written to.
    pub fn destination(mut self, destination: impl Destination) -> Self {
        self.destination = Arc::new(destination);
        self
    }

    /// Switch the output encoding to JSON.
    pub fn json_output(mut self) -> Self {
        self.mode = Mode::Json;
        self
    }

    /// Set the output encoding.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Append a static attribute, bound to every record the logger emits.
    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Enable trace correlation with default [`TraceOpts`].
    ///
    /// When a record is emitted under an active span, its trace and span
    /// identifiers are attached to the record and the record is forwarded as
    /// a span event.
    #[cfg(feature = "trace")]
    pub fn trace_correlation(mut self) -> Self {
        self.trace.get_or_insert_with(TraceOpts::new);
        self
    }

    /// Enable trace correlation with the given options.
    #[cfg(feature = "trace")]
    pub fn trace_opts(mut self, opts: TraceOpts) -> Self {
        self.trace = Some(opts);
        self
    }
}

/// Options for trace correlation.
///
/// # Examples
///
/// ```
/// use slogger::LoggerOpts;
/// use slogger::TraceOpts;
///
/// let opts = LoggerOpts::new("orders", "checkout-api")
///     .trace_opts(TraceOpts::new().no_span_events());
/// ```
#[cfg(feature = "trace")]
#[derive(Debug, Clone)]
pub struct TraceOpts {
    pub(crate) span_events: bool,
}

#[cfg(feature = "trace")]
impl Default for TraceOpts {
    fn default() -> Self {
        TraceOpts { span_events: true }
    }
}

#[cfg(feature = "trace")]
impl TraceOpts {
    /// Create default trace options: identifiers attached, span events on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach trace and span identifiers but do not forward records as span
    /// events.
    pub fn no_span_events(mut self) -> Self {
        self.span_events = false;
        self
    }
}

pub(crate) type AttrReplacer = Arc<dyn Fn(&[&str], Attr) -> Attr + Send + Sync>;

/// Backend-level options: source capture, minimum level, attribute rewrite.
///
/// All fields start at their resting defaults; in particular the minimum
/// level starts at `Info`.
///
/// # Examples
///
/// ```
/// use slogger::HandlerOpts;
///
/// let opts = HandlerOpts::new().source().level("debug");
/// ```
#[must_use = "pass the options to Logger::with_handler"]
#[derive(Default, Clone)]
pub struct HandlerOpts {
    pub(crate) source: bool,
    pub(crate) level: Option<LevelFilter>,
    pub(crate) replace_attr: Option<AttrReplacer>,
}

impl HandlerOpts {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the call site and emit it as the `source` field.
    pub fn source(mut self) -> Self {
        self.source = true;
        self
    }

    /// Set the minimum level from a level name.
    ///
    /// The name is resolved through [`parse_level`](crate::parse_level), so
    /// an unrecognized name quietly selects `Info`.
    pub fn level(mut self, level: &str) -> Self {
        self.level = Some(parse_level(level).to_level_filter());
        self
    }

    /// Install a hook that can rewrite each attribute before encoding.
    ///
    /// The hook receives the group path of the attribute (empty at top
    /// level) and the attribute itself, and returns the attribute to encode
    /// in its place.
    pub fn replace_attr(
        mut self,
        replacer: impl Fn(&[&str], Attr) -> Attr + Send + Sync + 'static,
    ) -> Self {
        self.replace_attr = Some(Arc::new(replacer));
        self
    }
}

impl fmt::Debug for HandlerOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOpts")
            .field("source", &self.source)
            .field("level", &self.level)
            .field("replace_attr", &self.replace_attr.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::attr::Value;

    use super::*;

    #[test]
    fn test_logger_opts_defaults() {
        let opts = LoggerOpts::new("testService", "testApp");
        assert_eq!(opts.mode, Mode::Text);
        assert_eq!(opts.attrs.len(), 1);

        let system = &opts.attrs[0];
        assert_eq!(system.key(), "system");
        let Value::Group(children) = system.value() else {
            panic!("system attribute must be a group");
        };
        assert_eq!(children[0], Attr::new("service", "testService"));
        assert_eq!(children[1], Attr::new("applicationName", "testApp"));
    }

    #[test]
    fn test_json_output_switches_mode() {
        let opts = LoggerOpts::new("s", "a").json_output();
        assert_eq!(opts.mode, Mode::Json);
    }

    #[test]
    fn test_attrs_accumulate() {
        let opts = LoggerOpts::new("s", "a")
            .attr(Attr::new("one", "1"))
            .attr(Attr::new("two", "2"));
        assert_eq!(opts.attrs.len(), 3);
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(Mode::from_name("json"), Mode::Json);
        assert_eq!(Mode::from_name("JSON"), Mode::Json);
        assert_eq!(Mode::from_name("text"), Mode::Text);
        assert_eq!(Mode::from_name("yaml"), Mode::Text);
        assert_eq!(Mode::from_name(""), Mode::Text);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_trace_opts_imply_enablement() {
        let opts = LoggerOpts::new("s", "a");
        assert!(opts.trace.is_none());

        let opts = opts.trace_opts(TraceOpts::new().no_span_events());
        let trace = opts.trace.expect("trace_opts must enable correlation");
        assert!(!trace.span_events);

        let opts = LoggerOpts::new("s", "a").trace_correlation();
        assert!(opts.trace.is_some_and(|t| t.span_events));
    }

    #[test]
    fn test_handler_opts() {
        let opts = HandlerOpts::new();
        assert!(!opts.source);
        assert_eq!(opts.level, None);
        assert!(opts.replace_attr.is_none());

        let opts = HandlerOpts::new()
            .source()
            .level("debug")
            .replace_attr(|_groups, attr| attr);
        assert!(opts.source);
        assert_eq!(opts.level, Some(LevelFilter::Debug));
        assert!(opts.replace_attr.is_some());
    }

    #[test]
    fn test_handler_level_falls_back_to_info() {
        let opts = HandlerOpts::new().level("chatty");
        assert_eq!(opts.level, Some(LevelFilter::Info));
    }
}
