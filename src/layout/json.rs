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
use serde_json::Map;
use serde_json::Number;

use crate::attr::Value;
use crate::record::Record;

/// A layout that formats log records as single-line JSON objects.
///
/// Output format:
///
/// ```json
/// {"level":"INFO","msg":"ready","system":{"applicationName":"checkout","service":"orders"},"time":"2025-08-23T10:41:02.184233+00:00"}
/// {"job_id":42,"level":"DEBUG","msg":"picked up job","source":"src/worker.rs:57","time":"2025-08-23T10:41:02.184391+00:00"}
/// ```
///
/// Grouped attributes become nested objects; ungrouped attributes are flat
/// top-level fields.
#[derive(Default, Debug, Clone)]
pub(crate) struct JsonLayout {
    _private: (),
}

impl JsonLayout {
    pub(crate) fn format(&self, record: &Record) -> anyhow::Result<Vec<u8>> {
        let ts = record.time();
        let offset = TimeZone::system().to_offset(ts);
        let time = ts.display_with_offset(offset);

        let mut fields = Map::new();
        fields.insert("time".to_owned(), format!("{time:.6}").into());
        fields.insert("level".to_owned(), record.level().as_str().into());
        if let Some(source) = record.source() {
            fields.insert(
                "source".to_owned(),
                format!("{}:{}", source.file, source.line).into(),
            );
        }
        fields.insert("msg".to_owned(), record.msg().into());
        for attr in record.attrs() {
            fields.insert(attr.key().to_owned(), to_json(attr.value()));
        }

        Ok(serde_json::to_vec(&fields)?)
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Str(v) => v.as_str().into(),
        Value::I64(v) => (*v).into(),
        Value::U64(v) => (*v).into(),
        Value::F64(v) => Number::from_f64(*v)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| v.to_string().into()),
        Value::Bool(v) => (*v).into(),
        Value::Group(attrs) => {
            let mut object = Map::new();
            for attr in attrs {
                object.insert(attr.key().to_owned(), to_json(attr.value()));
            }
            serde_json::Value::Object(object)
        }
    }
}
