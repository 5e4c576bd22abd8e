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

//! Slogger is a convenience layer for wiring up structured loggers: a
//! destination, a text or JSON encoding, static attributes, level and
//! source-capture options, duplicate-key overwriting, and optional trace
//! correlation, assembled into a ready-to-use [`Logger`] handle.
//!
//! # Overview
//!
//! Configuration happens through two option builders. [`LoggerOpts`]
//! describes what the logger writes and where: the destination sink, the
//! encoding mode, static attributes, and trace correlation. [`HandlerOpts`]
//! describes backend behavior: source-location capture, the minimum level,
//! and an attribute-rewrite hook. All inputs are accepted permissively —
//! unrecognized level or mode names quietly fall back to safe defaults, so
//! construction never fails.
//!
//! # Examples
//!
//! Text logger with the seeded `system` attributes:
//!
//! ```
//! use slogger::Logger;
//! use slogger::LoggerOpts;
//!
//! let logger = Logger::new(LoggerOpts::new("orders", "checkout-api"));
//! logger.info("service started");
//! ```
//!
//! JSON output with debug-level records and source capture:
//!
//! ```
//! use slogger::Attr;
//! use slogger::HandlerOpts;
//! use slogger::Logger;
//! use slogger::LoggerOpts;
//!
//! let logger = Logger::with_handler(
//!     LoggerOpts::new("orders", "checkout-api").json_output(),
//!     HandlerOpts::new().source().level("debug"),
//! );
//!
//! let worker = logger.component("dispatcher");
//! worker.log(log::Level::Debug, "job picked up", [Attr::new("job_id", 42u64)]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod attr;
mod dedup;
mod destination;
mod layout;
mod level;
mod logger;
mod opts;
mod record;

#[cfg(feature = "trace")]
mod trace;

pub use attr::Attr;
pub use attr::Value;
pub use destination::Destination;
pub use destination::Discard;
pub use destination::Memory;
pub use destination::Stdout;
pub use level::parse_level;
pub use logger::Logger;
pub use opts::HandlerOpts;
pub use opts::LoggerOpts;
pub use opts::Mode;
#[cfg(feature = "trace")]
pub use opts::TraceOpts;
