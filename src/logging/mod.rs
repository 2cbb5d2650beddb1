//! # Logging Channels
//!
//! Named, leveled logging channels with pluggable output sinks.
//!
//! A [`ChannelRegistry`] owns the process's channels. Applications construct
//! one registry and pass it around explicitly (there is no hidden global),
//! so every test can use its own isolated instance.
//!
//! ## Configuration semantics
//!
//! [`ChannelRegistry::configure`] resolves (or creates) the channel for a
//! name, sets its severity threshold, and installs a fresh sink list:
//! a console sink, plus a file sink when a log-file path is supplied.
//! The sink list is built up front and swapped in whole, so re-configuring
//! a name always *replaces* its sinks and can never accumulate duplicates.
//! Handles returned by earlier calls observe the new configuration.
//!
//! ## Emission
//!
//! [`Channel::log`] drops messages below the threshold and writes one
//! formatted line per message to every sink:
//!
//! ```text
//! 2024-01-15 10:30:45,123 - worker - WARNING - queue depth above limit
//! ```
//!
//! Emission never fails: sink write errors are swallowed. Only opening a
//! file sink during configuration surfaces an I/O error.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex, RwLock};

pub mod sink;

pub use sink::{ConsoleSink, FileSink, MemorySink, Sink};

/// Timestamp layout of the fixed line template: `2024-01-15 10:30:45,123`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Message severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

struct ChannelState {
    threshold: Severity,
    sinks: Vec<Box<dyn Sink>>,
}

struct ChannelShared {
    name: String,
    state: RwLock<ChannelState>,
}

/// A handle onto a configured logging channel.
///
/// Handles are cheap to clone and all point at the same shared state, so a
/// later re-configuration of the name is visible through every handle.
#[derive(Clone)]
pub struct Channel {
    shared: Arc<ChannelShared>,
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.shared.name)
            .finish_non_exhaustive()
    }
}

impl Channel {
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn threshold(&self) -> Severity {
        self.read_state().threshold
    }

    /// Number of sinks currently attached.
    pub fn sink_count(&self) -> usize {
        self.read_state().sinks.len()
    }

    /// Emit `message` at `severity`. Messages below the channel threshold
    /// are discarded, not buffered.
    pub fn log(&self, severity: Severity, message: &str) {
        let state = self.read_state();
        if severity < state.threshold {
            return;
        }
        let line = format_line(Local::now(), &self.shared.name, severity, message);
        for sink in &state.sinks {
            sink.write_line(&line);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ChannelState> {
        self.shared.state.read().expect("channel state lock poisoned")
    }
}

/// Registry of named logging channels.
///
/// Channels live for the registry's lifetime; there is no teardown beyond
/// dropping the registry itself.
#[derive(Default)]
pub struct ChannelRegistry {
    channels: Mutex<HashMap<String, Arc<ChannelShared>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the channel `name`: set its threshold and replace its sink
    /// list with a console sink plus, when `log_file` is given, a file sink
    /// appending to that path (created if absent).
    ///
    /// Fails with the underlying I/O error when the file cannot be opened;
    /// the channel is left untouched in that case; there is no fallback to
    /// console-only output.
    pub fn configure(
        &self,
        name: &str,
        threshold: Severity,
        log_file: Option<&Path>,
    ) -> Result<Channel> {
        let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(ConsoleSink::new())];
        if let Some(path) = log_file {
            sinks.push(Box::new(FileSink::open(path)?));
        }
        Ok(self.configure_with(name, threshold, sinks))
    }

    /// Configure the channel `name` with a caller-supplied sink list.
    ///
    /// Same replace-not-accumulate semantics as [`configure`]: the previous
    /// sinks, whatever they were, are dropped wholesale.
    ///
    /// [`configure`]: ChannelRegistry::configure
    pub fn configure_with(
        &self,
        name: &str,
        threshold: Severity,
        sinks: Vec<Box<dyn Sink>>,
    ) -> Channel {
        let shared = self.resolve(name);
        // Swap the whole state in one step so readers never observe a
        // partially installed sink list.
        *shared.state.write().expect("channel state lock poisoned") =
            ChannelState { threshold, sinks };
        Channel { shared }
    }

    /// Look up an already-configured channel.
    pub fn get(&self, name: &str) -> Option<Channel> {
        let channels = self.channels.lock().expect("channel registry lock poisoned");
        channels.get(name).map(|shared| Channel {
            shared: Arc::clone(shared),
        })
    }

    fn resolve(&self, name: &str) -> Arc<ChannelShared> {
        let mut channels = self.channels.lock().expect("channel registry lock poisoned");
        let shared = channels.entry(name.to_string()).or_insert_with(|| {
            Arc::new(ChannelShared {
                name: name.to_string(),
                state: RwLock::new(ChannelState {
                    threshold: Severity::default(),
                    sinks: Vec::new(),
                }),
            })
        });
        Arc::clone(shared)
    }
}

fn format_line(timestamp: DateTime<Local>, name: &str, severity: Severity, message: &str) -> String {
    format!(
        "{} - {} - {} - {}",
        timestamp.format(TIMESTAMP_FORMAT),
        name,
        severity,
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_display_names() {
        assert_eq!(Severity::Debug.to_string(), "DEBUG");
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!(Severity::from_str("debug"), Ok(Severity::Debug));
        assert_eq!(Severity::from_str("INFO"), Ok(Severity::Info));
        assert_eq!(Severity::from_str("Warning"), Ok(Severity::Warning));
        assert_eq!(Severity::from_str("warn"), Ok(Severity::Warning));
        assert_eq!(Severity::from_str("critical"), Ok(Severity::Critical));
        assert!(Severity::from_str("").is_err());
        assert!(Severity::from_str("verbose").is_err());
    }

    #[test]
    fn test_format_line_template() {
        let ts = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap();
        let line = format_line(ts, "app", Severity::Warning, "disk almost full");
        assert_eq!(line, "2024-01-15 10:30:45,000 - app - WARNING - disk almost full");
    }

    #[test]
    fn test_configure_sets_name_and_threshold() {
        let registry = ChannelRegistry::new();
        let channel = registry.configure("worker", Severity::Debug, None).unwrap();
        assert_eq!(channel.name(), "worker");
        assert_eq!(channel.threshold(), Severity::Debug);
        assert_eq!(channel.sink_count(), 1);
    }

    #[test]
    fn test_reconfigure_replaces_sinks() {
        let registry = ChannelRegistry::new();
        registry.configure("worker", Severity::Info, None).unwrap();
        let channel = registry.configure("worker", Severity::Info, None).unwrap();
        // Still exactly one console sink, not two
        assert_eq!(channel.sink_count(), 1);
    }

    #[test]
    fn test_threshold_discards_lower_severities() {
        let registry = ChannelRegistry::new();
        let capture = MemorySink::new();
        let channel =
            registry.configure_with("app", Severity::Warning, vec![Box::new(capture.clone())]);

        channel.debug("dropped");
        channel.info("dropped too");
        channel.warning("kept");
        channel.critical("also kept");

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - app - WARNING - kept"));
        assert!(lines[1].ends_with(" - app - CRITICAL - also kept"));
    }

    #[test]
    fn test_handles_share_state_across_reconfiguration() {
        let registry = ChannelRegistry::new();
        let first = MemorySink::new();
        let handle = registry.configure_with("app", Severity::Debug, vec![Box::new(first.clone())]);

        let second = MemorySink::new();
        registry.configure_with("app", Severity::Error, vec![Box::new(second.clone())]);

        // The old handle now sees the new threshold and the new sink list
        handle.info("below new threshold");
        handle.error("boom");

        assert!(first.lines().is_empty());
        let lines = second.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - app - ERROR - boom"));
    }

    #[test]
    fn test_channels_are_independent() {
        let registry = ChannelRegistry::new();
        let a = MemorySink::new();
        let b = MemorySink::new();
        let chan_a = registry.configure_with("a", Severity::Info, vec![Box::new(a.clone())]);
        registry.configure_with("b", Severity::Info, vec![Box::new(b.clone())]);

        chan_a.info("only for a");

        assert_eq!(a.lines().len(), 1);
        assert!(b.lines().is_empty());
    }

    #[test]
    fn test_get_returns_configured_channel() {
        let registry = ChannelRegistry::new();
        assert!(registry.get("app").is_none());

        registry.configure("app", Severity::Info, None).unwrap();
        let channel = registry.get("app").unwrap();
        assert_eq!(channel.name(), "app");
    }

    #[test]
    fn test_every_sink_receives_each_line() {
        let registry = ChannelRegistry::new();
        let one = MemorySink::new();
        let two = MemorySink::new();
        let channel = registry.configure_with(
            "fan",
            Severity::Info,
            vec![Box::new(one.clone()), Box::new(two.clone())],
        );

        channel.info("hello");

        assert_eq!(one.lines(), two.lines());
        assert_eq!(one.lines().len(), 1);
    }
}
