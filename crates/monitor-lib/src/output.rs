//! Console output
//!
//! Checks produce typed [`Line`]s. A [`Console`] decides how they are shown:
//! colored on a terminal, or recorded in memory for inspection.

use crate::models::HealthStatus;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// What a console line reports, used to pick its marker and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Heading,
    /// Successful reading, prefixed with a check mark
    Check,
    /// Threshold crossed
    Alert,
    Status(HealthStatus),
    Prediction,
    /// Predicted threshold breach
    Critical,
}

/// A single line of console output
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(LineKind::Plain, text)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(LineKind::Heading, text)
    }

    pub fn check(text: impl Into<String>) -> Self {
        Self::new(LineKind::Check, text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new(LineKind::Alert, text)
    }

    pub fn status(status: HealthStatus) -> Self {
        Self::new(LineKind::Status(status), "System Status:")
    }

    pub fn prediction(text: impl Into<String>) -> Self {
        Self::new(LineKind::Prediction, text)
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(LineKind::Critical, text)
    }

    /// Render with terminal colors
    pub fn colorize(&self) -> String {
        match self.kind {
            LineKind::Plain => self.text.clone(),
            LineKind::Heading => self.text.bold().to_string(),
            LineKind::Check => format!("{} {}", "✓".green().bold(), self.text),
            LineKind::Alert => format!("{}  {}", "⚠️".yellow().bold(), self.text.yellow()),
            LineKind::Status(status) => format!("{} {}", self.text, color_status(status)),
            LineKind::Prediction => format!("📊 {}", self.text.cyan()),
            LineKind::Critical => format!("🚨 {}", self.text.red().bold()),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LineKind::Plain | LineKind::Heading => write!(f, "{}", self.text),
            LineKind::Check => write!(f, "✓ {}", self.text),
            LineKind::Alert => write!(f, "⚠️  {}", self.text),
            LineKind::Status(status) => write!(f, "{} {}", self.text, status),
            LineKind::Prediction => write!(f, "📊 {}", self.text),
            LineKind::Critical => write!(f, "🚨 {}", self.text),
        }
    }
}

/// Color a status based on value
pub fn color_status(status: HealthStatus) -> String {
    let label = status.to_string();
    match status {
        HealthStatus::Healthy => label.green().bold().to_string(),
        HealthStatus::Warning => label.yellow().bold().to_string(),
    }
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// Destination for console lines
pub trait Console: Send {
    fn write_line(&mut self, line: &Line);

    fn write_lines(&mut self, lines: &[Line]) {
        for line in lines {
            self.write_line(line);
        }
    }
}

/// Writes lines to standard output
#[derive(Debug, Clone, Copy)]
pub struct StdoutConsole {
    colored: bool,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Stdout console without terminal colors
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Render one line into `out`, returning any write error
    pub fn write_to(&self, line: &Line, out: &mut impl Write) -> io::Result<()> {
        if self.colored {
            writeln!(out, "{}", line.colorize())
        } else {
            writeln!(out, "{}", line)
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &Line) {
        // A closed stdout (e.g. `| head`) must not take the monitor down
        if let Err(e) = self.write_to(line, &mut io::stdout().lock()) {
            debug!(error = %e, "Console write failed");
        }
    }
}

/// Records lines in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Plain rendering of every recorded line
    pub fn text(&self) -> Vec<String> {
        self.lines().iter().map(|line| line.to_string()).collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, line: &Line) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        assert_eq!(Line::check("CPU usage: 1.00%").to_string(), "✓ CPU usage: 1.00%");
        assert_eq!(
            Line::alert("ALERT: High CPU usage detected").to_string(),
            "⚠️  ALERT: High CPU usage detected"
        );
        assert_eq!(
            Line::status(HealthStatus::Warning).to_string(),
            "System Status: WARNING"
        );
        assert_eq!(Line::blank().to_string(), "");
    }

    #[test]
    fn test_colorize_keeps_text() {
        colored::control::set_override(true);
        let rendered = Line::status(HealthStatus::Healthy).colorize();
        assert!(rendered.starts_with("System Status: "));
        assert!(rendered.contains("HEALTHY"));
        colored::control::unset_override();
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.3456), "12.35");
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(99.999), "100.00");
    }

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new();
        let mut writer = console.clone();

        writer.write_lines(&[Line::plain("one"), Line::check("two")]);

        assert_eq!(console.text(), vec!["one".to_string(), "✓ two".to_string()]);

        console.clear();
        assert!(console.lines().is_empty());
    }

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stdout_console_renders_plain_line() {
        let console = StdoutConsole::plain();
        let mut out = Vec::new();

        console.write_to(&Line::check("Disk usage: 3.50%"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "✓ Disk usage: 3.50%\n");
    }

    #[test]
    fn test_stdout_console_reports_broken_pipe() {
        let console = StdoutConsole::plain();
        let err = console
            .write_to(&Line::status(HealthStatus::Healthy), &mut ClosedPipe)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
