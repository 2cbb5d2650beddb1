//! Output sinks for logging channels.
//!
//! A [`Sink`] is a destination for formatted log lines. Sinks are abstracted
//! behind a trait so that:
//! - channels can carry any mix of destinations behind one interface
//! - tests can capture output with [`MemorySink`] (no terminal or filesystem
//!   needed), mirroring how the rest of the crate is exercised
//!
//! Each sink serializes its own writes, so a single sink shared by many
//! channel handles is safe for interleaved callers. Write failures at
//! emission time are swallowed; only opening a [`FileSink`] can fail.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A destination to which formatted log lines are written.
pub trait Sink: Send + Sync {
    /// Write a single formatted line, followed by a newline.
    fn write_line(&self, line: &str);
}

/// Writes lines to standard error.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) {
        // stderr's internal lock serializes concurrent writers
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", line);
    }
}

/// Appends lines to a file, creating it if absent.
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` in append mode. The parent directory must already exist.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) {
        let mut file = self.file.lock().expect("file sink lock poisoned");
        let _ = writeln!(file, "{}", line);
    }
}

/// Captures lines in memory for inspection.
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to [`configure_with`](crate::logging::ChannelRegistry::configure_with).
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink lock poisoned").clone()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .expect("memory sink lock poisoned")
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_lines() {
        let sink = MemorySink::new();
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.write_line("shared");
        assert_eq!(sink.lines(), vec!["shared"]);
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");

        let sink = FileSink::open(&path).unwrap();
        sink.write_line("one");
        drop(sink);

        // A second open must append, not truncate
        let sink = FileSink::open(&path).unwrap();
        sink.write_line("two");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_file_sink_missing_parent_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.log");
        assert!(FileSink::open(&path).is_err());
    }
}
