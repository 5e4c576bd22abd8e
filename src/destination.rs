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

//! Destinations that encoded log records are written to.

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// A byte sink shared by a logger and all loggers derived from it.
///
/// Implementations must tolerate concurrent writes; interleaving between
/// records is bounded by whatever atomicity the underlying sink provides.
pub trait Destination: fmt::Debug + Send + Sync + 'static {
    /// Write one encoded record, including its trailing newline.
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()>;

    /// Flush any buffered bytes.
    fn flush(&self) {}
}

/// A destination that writes records to stdout. This is the default.
#[derive(Default, Debug, Clone)]
pub struct Stdout {
    _private: (),
}

impl Destination for Stdout {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        std::io::stdout().write_all(bytes)?;
        Ok(())
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// A destination that accepts every write and drops it.
///
/// Useful for silencing a logger entirely, e.g. in tests.
///
/// # Examples
///
/// ```
/// use slogger::Destination;
/// use slogger::Discard;
///
/// Discard::default().write(b"nobody hears this").unwrap();
/// ```
#[derive(Default, Debug, Clone)]
pub struct Discard {
    _private: (),
}

impl Destination for Discard {
    fn write(&self, _bytes: &[u8]) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A destination that captures records in memory.
///
/// Cloning a `Memory` shares the underlying buffer, so a test can keep one
/// handle and hand a clone to the logger.
///
/// # Examples
///
/// ```
/// use slogger::Logger;
/// use slogger::LoggerOpts;
/// use slogger::Memory;
///
/// let sink = Memory::new();
/// let logger = Logger::new(LoggerOpts::new("orders", "api").destination(sink.clone()));
/// logger.info("captured");
/// assert!(sink.contents().contains("captured"));
/// ```
#[derive(Default, Debug, Clone)]
pub struct Memory {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Memory {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured bytes, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Destination for Memory {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_reports_success() {
        let sink = Discard::default();
        assert!(sink.write(b"anything").is_ok());
        assert!(sink.write(&[]).is_ok());
    }

    #[test]
    fn test_memory_captures_writes() {
        let sink = Memory::new();
        let shared = sink.clone();
        shared.write(b"one\n").unwrap();
        shared.write(b"two\n").unwrap();
        assert_eq!(sink.contents(), "one\ntwo\n");
    }
}
