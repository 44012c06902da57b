//! Output sinks for monitor messages.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::config::SinkKind;

/// Line-oriented destination for pre-formatted messages.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each message as a line on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::error!(error = %e, "Failed to write to stdout");
        }
    }
}

/// Forwards each message to the log stream at warn level.
#[derive(Debug, Default)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn emit(&self, line: &str) {
        tracing::warn!(target: "stats_monitor::alert", "{}", line);
    }
}

/// Keeps every message in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink mutex poisoned").clone()
    }

    /// Remove and return everything emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().expect("memory sink mutex poisoned"))
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .expect("memory sink mutex poisoned")
            .push(line.to_string());
    }
}

/// Build the sink selected in configuration.
pub fn from_kind(kind: SinkKind) -> Box<dyn OutputSink> {
    match kind {
        SinkKind::Stdout => Box::new(StdoutSink),
        SinkKind::Log => Box::new(LogSink),
    }
}
