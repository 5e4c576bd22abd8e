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

use jiff::Timestamp;
use log::Level;

use crate::attr::Attr;

/// The source location of a log call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Source {
    pub(crate) file: &'static str,
    pub(crate) line: u32,
}

/// One log record as handed to a layout. The attributes are already
/// deduplicated and replaced.
#[derive(Debug, Clone)]
pub(crate) struct Record<'a> {
    time: Timestamp,
    level: Level,
    msg: &'a str,
    source: Option<Source>,
    attrs: &'a [Attr],
}

impl<'a> Record<'a> {
    pub(crate) fn new(level: Level, msg: &'a str, source: Option<Source>, attrs: &'a [Attr]) -> Self {
        Record {
            time: Timestamp::now(),
            level,
            msg,
            source,
            attrs,
        }
    }

    /// The observed time.
    pub(crate) fn time(&self) -> Timestamp {
        self.time
    }

    /// The severity of the record.
    pub(crate) fn level(&self) -> Level {
        self.level
    }

    /// The message body.
    pub(crate) fn msg(&self) -> &'a str {
        self.msg
    }

    /// The call site, when source capture is enabled.
    pub(crate) fn source(&self) -> Option<Source> {
        self.source
    }

    /// The resolved attributes.
    pub(crate) fn attrs(&self) -> &'a [Attr] {
        self.attrs
    }
}
