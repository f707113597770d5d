// ABOUTME: Output sinks for removal feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use crate::runtime::{DeletionKind, DeletionRecord};
use serde::Serialize;
use std::io::{self, Write};

/// Destination for per-image lines and the final warning block.
pub trait RemovalSink {
    /// Called once per deletion record, as soon as it is known.
    fn record(&mut self, record: &DeletionRecord);

    /// Called at most once per batch with the tolerated error messages.
    fn warning(&mut self, message: &str);
}

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly `Deleted:`/`Untagged:` lines
    Normal,
    /// No per-image lines; warnings still shown
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output<O: Write = io::Stdout, E: Write = io::Stderr> {
    mode: OutputMode,
    out: O,
    err: E,
}

impl Output {
    /// Output bound to the process stdout and stderr.
    pub fn stdio(mode: OutputMode) -> Self {
        Self::with_writers(mode, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Output<O, E> {
    pub fn with_writers(mode: OutputMode, out: O, err: E) -> Self {
        Self { mode, out, err }
    }

    /// Give back the underlying writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Print an error message.
    pub fn error(&mut self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                let _ = writeln!(self.err, "Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent::Error { message };
                if let Ok(json) = serde_json::to_string(&event) {
                    let _ = writeln!(self.err, "{json}");
                }
            }
        }
    }
}

impl<O: Write, E: Write> RemovalSink for Output<O, E> {
    fn record(&mut self, record: &DeletionRecord) {
        match self.mode {
            OutputMode::Normal => {
                let _ = writeln!(self.out, "{record}");
            }
            OutputMode::Quiet => {}
            OutputMode::Json => {
                let event = match record.kind {
                    DeletionKind::Deleted => JsonEvent::Deleted {
                        name: &record.name,
                    },
                    DeletionKind::Untagged => JsonEvent::Untagged {
                        name: &record.name,
                    },
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    let _ = writeln!(self.out, "{json}");
                }
            }
        }
    }

    fn warning(&mut self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                let _ = writeln!(self.err, "{message}");
            }
            OutputMode::Json => {
                let event = JsonEvent::Warning { message };
                if let Ok(json) = serde_json::to_string(&event) {
                    let _ = writeln!(self.err, "{json}");
                }
            }
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum JsonEvent<'a> {
    Deleted { name: &'a str },
    Untagged { name: &'a str },
    Warning { message: &'a str },
    Error { message: &'a str },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffered(mode: OutputMode) -> Output<Vec<u8>, Vec<u8>> {
        Output::with_writers(mode, Vec::new(), Vec::new())
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn normal_mode_prints_record_lines() {
        let mut output = buffered(OutputMode::Normal);
        output.record(&DeletionRecord::untagged("img:v1"));
        output.record(&DeletionRecord::deleted("sha256:abc"));
        output.warning("No such image: gone");

        let (out, err) = output.into_writers();
        assert_eq!(text(out), "Untagged: img:v1\nDeleted: sha256:abc\n");
        assert_eq!(text(err), "No such image: gone\n");
    }

    #[test]
    fn quiet_mode_keeps_warnings_only() {
        let mut output = buffered(OutputMode::Quiet);
        output.record(&DeletionRecord::deleted("sha256:abc"));
        output.warning("No such image: gone");

        let (out, err) = output.into_writers();
        assert!(out.is_empty());
        assert_eq!(text(err), "No such image: gone\n");
    }

    #[test]
    fn json_mode_emits_tagged_events() {
        let mut output = buffered(OutputMode::Json);
        output.record(&DeletionRecord::deleted("sha256:abc"));
        output.warning("No such image: gone");

        let (out, err) = output.into_writers();
        let event: serde_json::Value = serde_json::from_str(text(out).trim()).unwrap();
        assert_eq!(event["event"], "deleted");
        assert_eq!(event["name"], "sha256:abc");

        let event: serde_json::Value = serde_json::from_str(text(err).trim()).unwrap();
        assert_eq!(event["event"], "warning");
        assert_eq!(event["message"], "No such image: gone");
    }

    #[test]
    fn error_is_prefixed() {
        let mut output = buffered(OutputMode::Normal);
        output.error("boom");
        let (_, err) = output.into_writers();
        assert_eq!(text(err), "Error: boom\n");
    }
}
