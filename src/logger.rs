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

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use log::Level;
use log::LevelFilter;

use crate::attr::Attr;
use crate::attr::Value;
use crate::dedup;
use crate::destination::Destination;
use crate::destination::Discard;
use crate::layout::JsonLayout;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::opts::AttrReplacer;
use crate::opts::HandlerOpts;
use crate::opts::LoggerOpts;
use crate::opts::Mode;
use crate::record::Record;
use crate::record::Source;

/// A configured logger handle.
///
/// Handles are cheap to clone and safe to share across threads. Destination,
/// encoding and trace wrapping are fixed at construction; derivation via
/// [`component`](Logger::component) or [`with`](Logger::with) layers
/// additional bound attributes onto a new handle without affecting the
/// parent.
///
/// # Examples
///
/// ```
/// use slogger::Attr;
/// use slogger::Logger;
/// use slogger::LoggerOpts;
///
/// let logger = Logger::new(LoggerOpts::new("orders", "checkout-api"));
/// logger.info("service started");
/// logger.log(log::Level::Warn, "slow response", [Attr::new("elapsed_ms", 950u64)]);
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<LoggerCore>,
    bound: Vec<Attr>,
}

struct LoggerCore {
    destination: Arc<dyn Destination>,
    layout: Layout,
    source: bool,
    min_level: LevelFilter,
    replace_attr: Option<AttrReplacer>,
    #[cfg(feature = "trace")]
    trace: Option<crate::opts::TraceOpts>,
}

impl Logger {
    /// Build a logger from the given options with default handler options.
    pub fn new(opts: LoggerOpts) -> Logger {
        Self::with_handler(opts, HandlerOpts::default())
    }

    /// Build a logger from logger options and handler options.
    ///
    /// The mode selects the text or JSON encoder; every record then passes
    /// through the duplicate-key overwrite shim and, when enabled, the trace
    /// correlation shim. Static attributes accumulated on the options are
    /// bound to the handle. None of this can fail: unrecognized inputs have
    /// already degraded to defaults inside the option builders.
    ///
    /// # Examples
    ///
    /// ```
    /// use slogger::HandlerOpts;
    /// use slogger::Logger;
    /// use slogger::LoggerOpts;
    ///
    /// let logger = Logger::with_handler(
    ///     LoggerOpts::new("orders", "checkout-api").json_output(),
    ///     HandlerOpts::new().source().level("debug"),
    /// );
    /// logger.debug("verbose diagnostics on");
    /// ```
    pub fn with_handler(opts: LoggerOpts, handler: HandlerOpts) -> Logger {
        let layout = match opts.mode {
            Mode::Json => JsonLayout::default().into(),
            Mode::Text => TextLayout::default().into(),
        };

        Logger {
            core: Arc::new(LoggerCore {
                destination: opts.destination,
                layout,
                source: handler.source,
                min_level: handler.level.unwrap_or(LevelFilter::Info),
                replace_attr: handler.replace_attr,
                #[cfg(feature = "trace")]
                trace: opts.trace,
            }),
            bound: opts.attrs,
        }
    }

    /// A logger that writes to nowhere. Useful in tests.
    pub fn discard() -> Logger {
        Logger {
            core: Arc::new(LoggerCore {
                destination: Arc::new(Discard::default()),
                layout: TextLayout::default().into(),
                source: false,
                min_level: LevelFilter::Info,
                replace_attr: None,
                #[cfg(feature = "trace")]
                trace: None,
            }),
            bound: Vec::new(),
        }
    }

    /// Derive a child logger identified by a component name.
    ///
    /// The child carries a grouped `component` attribute
    /// (`{"name": component_name}`) on every record; the parent is
    /// unaffected.
    pub fn component(&self, name: &str) -> Logger {
        self.with([Attr::group("component", [Attr::new("name", name)])])
    }

    /// Derive a child logger with additional bound attributes.
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Logger {
        let mut bound = self.bound.clone();
        bound.extend(attrs);
        Logger {
            core: self.core.clone(),
            bound,
        }
    }

    /// Log a message at debug level.
    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.emit(Level::Debug, msg, Vec::new());
    }

    /// Log a message at info level.
    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.emit(Level::Info, msg, Vec::new());
    }

    /// Log a message at warn level.
    #[track_caller]
    pub fn warn(&self, msg: &str) {
        self.emit(Level::Warn, msg, Vec::new());
    }

    /// Log a message at error level.
    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.emit(Level::Error, msg, Vec::new());
    }

    /// Log a message with per-call attributes.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.emit(level, msg, attrs.into_iter().collect());
    }

    #[track_caller]
    fn emit(&self, level: Level, msg: &str, attrs: Vec<Attr>) {
        let caller = Location::caller();

        if level > self.core.min_level {
            return;
        }

        let mut all = self.bound.clone();
        all.extend(attrs);

        #[cfg(feature = "trace")]
        if let Some(trace) = &self.core.trace {
            crate::trace::correlate(trace, level, msg, &mut all);
        }

        let mut all = dedup::overwrite(all);
        if let Some(replacer) = &self.core.replace_attr {
            let mut path = Vec::new();
            all = replace_attrs(replacer, &mut path, all);
        }

        let source = self.core.source.then(|| Source {
            file: caller.file(),
            line: caller.line(),
        });

        let record = Record::new(level, msg, source, &all);
        if let Err(err) = self.write(&record) {
            handle_log_error(msg, err);
        }
    }

    /// Flush the destination's buffered bytes, if it has any.
    pub fn flush(&self) {
        self.core.destination.flush();
    }

    fn write(&self, record: &Record) -> anyhow::Result<()> {
        let mut bytes = self.core.layout.format(record)?;
        bytes.push(b'\n');
        self.core.destination.write(&bytes)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("destination", &self.core.destination)
            .field("layout", &self.core.layout)
            .field("min_level", &self.core.min_level)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

fn replace_attrs(replacer: &AttrReplacer, path: &mut Vec<String>, attrs: Vec<Attr>) -> Vec<Attr> {
    attrs
        .into_iter()
        .map(|mut attr| {
            if let Value::Group(children) = &mut attr.value {
                path.push(attr.key.clone());
                let replaced = replace_attrs(replacer, path, std::mem::take(children));
                path.pop();
                attr.value = Value::Group(replaced);
                attr
            } else {
                let groups: Vec<&str> = path.iter().map(String::as_str).collect();
                replacer(&groups, attr)
            }
        })
        .collect()
}

fn handle_log_error(msg: &str, error: anyhow::Error) {
    // a logger must not fail its caller; report the loss on stderr and move on
    let _ = writeln!(
        std::io::stderr(),
        "error emitting log record; message: {msg}; error: {error:?}",
    );
}
