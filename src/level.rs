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

use log::Level;

/// Map a level name to a [`log::Level`].
///
/// Accepts `"debug"`, `"info"`, `"warn"` and `"error"` in any letter casing.
/// Anything else, including the empty string, maps to [`Level::Info`], so a
/// misconfigured level name can never fail logger construction.
///
/// # Examples
///
/// ```
/// use log::Level;
///
/// assert_eq!(slogger::parse_level("DEBUG"), Level::Debug);
/// assert_eq!(slogger::parse_level("verbose"), Level::Info);
/// ```
pub fn parse_level(name: &str) -> Level {
    for (candidate, level) in [
        ("debug", Level::Debug),
        ("info", Level::Info),
        ("warn", Level::Warn),
        ("error", Level::Error),
    ] {
        if name.eq_ignore_ascii_case(candidate) {
            return level;
        }
    }

    Level::Info
}
