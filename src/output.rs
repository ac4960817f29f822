//! Diagnostic output for toolconf.
//!
//! Defines the [`Reporter`] trait that decouples load failures from where they
//! are shown. [`StderrReporter`] prints a colored `error:` line to the
//! terminal's standard error stream.

use colored::Colorize;

use crate::config::ConfigError;

/// Receives human-readable diagnostics for failed loads.
pub trait Reporter {
    /// Called once per failed load with the reason.
    fn report(&mut self, err: &ConfigError);
}

/// Writes diagnostics to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, err: &ConfigError) {
        eprintln!("{}", diagnostic_line(err));
    }
}

/// One diagnostic line: a `warning:` label for recoverable errors, `error:`
/// otherwise, followed by the message.
pub fn diagnostic_line(err: &ConfigError) -> String {
    let label = if err.is_recoverable() {
        "warning:".yellow().bold()
    } else {
        "error:".red().bold()
    };
    format!("{} {}", label, err)
}

/// Collects diagnostics in memory instead of printing them.
///
/// For callers that show load failures in their own UI (or defer them until
/// verbosity is known) via [`crate::ConfigFile::read_with`].
#[derive(Debug, Default, Clone)]
pub struct BufferReporter {
    messages: Vec<String>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, err: &ConfigError) {
        self.messages.push(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_is_a_warning() {
        let line = diagnostic_line(&ConfigError::NotFound {
            filename: "tool.conf".into(),
        });
        assert!(line.contains("warning:"), "{}", line);
        assert!(line.contains("failed to locate the configuration file: tool.conf"));
    }

    #[test]
    fn test_syntax_failure_is_an_error() {
        let line = diagnostic_line(&ConfigError::Syntax {
            path: PathBuf::from("/etc/tool.conf"),
            line: 7,
            message: "expected `=`".into(),
        });
        assert!(line.contains("error:"), "{}", line);
        assert!(line.contains("/etc/tool.conf(7): expected `=`"));
    }

    #[test]
    fn test_buffer_reporter_keeps_order() {
        let mut reporter = BufferReporter::new();
        reporter.report(&ConfigError::Unknown { message: "first".into() });
        reporter.report(&ConfigError::Unknown { message: "second".into() });
        assert_eq!(
            reporter.messages(),
            ["unknown failure: first", "unknown failure: second"]
        );
    }
}
