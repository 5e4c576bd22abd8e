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

use jiff::tz::TimeZone;

use crate::attr::Attr;
use crate::attr::Value;
use crate::record::Record;

/// A layout that formats log records as space-separated `key=value` fields.
///
/// Output format:
///
/// ```text
/// time=2025-08-23T10:41:02.184233+00:00 level=INFO msg=ready system.service=orders system.applicationName=checkout
/// time=2025-08-23T10:41:02.184391+00:00 level=DEBUG source=src/worker.rs:57 msg="picked up job" job_id=42
/// ```
///
/// Grouped attributes render as dotted keys. Values containing spaces,
/// equals signs or quotes are quoted and escaped.
#[derive(Default, Debug, Clone)]
pub(crate) struct TextLayout {
    _private: (),
}

impl TextLayout {
    pub(crate) fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let ts = record.time();
        let offset = TimeZone::system().to_offset(ts);
        let time = ts.display_with_offset(offset);

        let mut text = format!("time={time:.6}");

        push_field(&mut text, "level", record.level().as_str());
        if let Some(source) = record.source() {
            push_field(&mut text, "source", &format!("{}:{}", source.file, source.line));
        }
        push_field(&mut text, "msg", record.msg());
        push_attrs(&mut text, "", record.attrs());

        Ok(text.into_bytes())
    }
}

fn push_attrs(text: &mut String, prefix: &str, attrs: &[Attr]) {
    for attr in attrs {
        let key = if prefix.is_empty() {
            attr.key().to_owned()
        } else {
            format!("{prefix}.{}", attr.key())
        };
        match attr.value() {
            Value::Group(children) => push_attrs(text, &key, children),
            value => push_field(text, &key, &value.to_string()),
        }
    }
}

// The encode logic follows https://github.com/go-logfmt/logfmt/blob/76262ea7/encode.go.
fn push_field(text: &mut String, key: &str, value: &str) {
    use std::fmt::Write;

    if key.contains([' ', '=', '"']) {
        // keys the format cannot carry are dropped rather than failing the record
        return;
    }

    // SAFETY: write to a string always succeeds
    if value.is_empty() || value.contains([' ', '=', '"']) {
        write!(text, " {key}=\"{}\"", value.escape_debug()).unwrap();
    } else {
        write!(text, " {key}={value}").unwrap();
    }
}
