//! Build diagnostics collector
//!
//! Row- and table-level problems during a build are recoverable: the
//! pipeline degrades to empty rows/tables and keeps going. Each problem
//! is recorded here as a structured entry (and mirrored to the tracing
//! stream) so callers and tests can inspect exactly what was skipped
//! instead of scraping log output.

use tracing::{error, warn};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Degraded but expected (missing table, empty table)
    Warning,
    /// Content was dropped (malformed row skipped)
    Error,
}

/// One recorded problem, scoped to a source file and optionally a line
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Logical source file name (e.g. "projects.csv")
    pub file: String,
    /// 1-indexed line within the file, when row-scoped
    pub line: Option<usize>,
    pub message: String,
}

/// Collector threaded through table reads and the build
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning-level diagnostic and emit it to the log stream
    pub fn warn(&mut self, file: &str, line: Option<usize>, message: impl Into<String>) {
        let message = message.into();
        match line {
            Some(n) => warn!("{}:{}: {}", file, n, message),
            None => warn!("{}: {}", file, message),
        }
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            file: file.to_string(),
            line,
            message,
        });
    }

    /// Record an error-level diagnostic and emit it to the log stream
    pub fn error(&mut self, file: &str, line: Option<usize>, message: impl Into<String>) {
        let message = message.into();
        match line {
            Some(n) => error!("{}:{}: {}", file, n, message),
            None => error!("{}: {}", file, message),
        }
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            file: file.to_string(),
            line,
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count of entries at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }
}
