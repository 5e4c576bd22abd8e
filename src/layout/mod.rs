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

//! Layouts encode a log record into its on-the-wire textual form.

mod json;
mod text;

pub(crate) use json::JsonLayout;
pub(crate) use text::TextLayout;

use crate::record::Record;

/// The encoder selected by a logger's mode.
#[derive(Debug, Clone)]
pub(crate) enum Layout {
    Text(TextLayout),
    Json(JsonLayout),
}

impl Layout {
    pub(crate) fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        match self {
            Layout::Text(layout) => layout.format(record),
            Layout::Json(layout) => layout.format(record),
        }
    }
}

impl From<TextLayout> for Layout {
    fn from(layout: TextLayout) -> Self {
        Layout::Text(layout)
    }
}

impl From<JsonLayout> for Layout {
    fn from(layout: JsonLayout) -> Self {
        Layout::Json(layout)
    }
}
