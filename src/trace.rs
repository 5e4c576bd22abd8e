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

//! Trace correlation via [fastrace](https://crates.io/crates/fastrace).

use std::borrow::Cow;

use fastrace::collector::SpanContext;
use log::Level;

use crate::attr::Attr;
use crate::attr::Value;
use crate::opts::TraceOpts;

/// Attach trace and span identifiers to the record's attributes when a local
/// parent span is active, and forward the record as a span event unless the
/// options suppress it. Outside of any span this is a no-op.
pub(crate) fn correlate(opts: &TraceOpts, level: Level, msg: &str, attrs: &mut Vec<Attr>) {
    let Some(ctx) = SpanContext::current_local_parent() else {
        return;
    };

    attrs.push(Attr::new("trace_id", format!("{:032x}", ctx.trace_id.0)));
    attrs.push(Attr::new("span_id", format!("{:016x}", ctx.span_id.0)));

    if opts.span_events {
        let mut properties = vec![("level".to_owned(), level.as_str().to_owned())];
        flatten(&mut properties, "", attrs);

        fastrace::local::LocalSpan::add_event(fastrace::Event::new(msg.to_owned()).with_properties(
            || {
                properties
                    .into_iter()
                    .map(|(k, v)| (Cow::from(k), Cow::from(v)))
            },
        ));
    }
}

fn flatten(properties: &mut Vec<(String, String)>, prefix: &str, attrs: &[Attr]) {
    for attr in attrs {
        let key = if prefix.is_empty() {
            attr.key().to_owned()
        } else {
            format!("{prefix}.{}", attr.key())
        };
        match attr.value() {
            Value::Group(children) => flatten(properties, &key, children),
            value => properties.push((key, value.to_string())),
        }
    }
}
