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

//! Duplicate-key overwrite shim applied to every record before encoding.

use crate::attr::Attr;
use crate::attr::Value;

/// Resolve duplicate keys within one nesting level of an attribute sequence.
///
/// A repeated key keeps the position of its first occurrence and the value of
/// its last occurrence. Two groups under the same key merge; the merged
/// children are resolved recursively, so a key repeated across bound-attribute
/// layers and call sites reaches the output exactly once.
pub(crate) fn overwrite(attrs: Vec<Attr>) -> Vec<Attr> {
    let mut out: Vec<Attr> = Vec::with_capacity(attrs.len());

    for attr in attrs {
        let Some(slot) = out.iter_mut().find(|existing| existing.key == attr.key) else {
            out.push(attr);
            continue;
        };

        match (&mut slot.value, attr.value) {
            (Value::Group(existing), Value::Group(incoming)) => existing.extend(incoming),
            (slot_value, incoming) => *slot_value = incoming,
        }
    }

    for attr in &mut out {
        if let Value::Group(children) = &mut attr.value {
            let merged = overwrite(std::mem::take(children));
            attr.value = Value::Group(merged);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_wins_at_first_position() {
        let attrs = vec![
            Attr::new("k", "a"),
            Attr::new("other", "x"),
            Attr::new("k", "b"),
        ];
        let out = overwrite(attrs);
        assert_eq!(out, vec![Attr::new("k", "b"), Attr::new("other", "x")]);
    }

    #[test]
    fn test_groups_merge_recursively() {
        let attrs = vec![
            Attr::group("system", [Attr::new("service", "orders")]),
            Attr::group(
                "system",
                [Attr::new("service", "billing"), Attr::new("zone", "eu")],
            ),
        ];
        let out = overwrite(attrs);
        assert_eq!(
            out,
            vec![Attr::group(
                "system",
                [Attr::new("service", "billing"), Attr::new("zone", "eu")],
            )]
        );
    }

    #[test]
    fn test_scalar_replaces_group() {
        let attrs = vec![
            Attr::group("ctx", [Attr::new("a", "1")]),
            Attr::new("ctx", "flat"),
        ];
        let out = overwrite(attrs);
        assert_eq!(out, vec![Attr::new("ctx", "flat")]);
    }

    #[test]
    fn test_distinct_keys_untouched() {
        let attrs = vec![Attr::new("a", "1"), Attr::new("b", "2")];
        let out = overwrite(attrs.clone());
        assert_eq!(out, attrs);
    }
}
