//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        eprintln!("{} {}", style("✓").green(), msg);
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        eprintln!("  {}: {}", style(key).dim(), value);
    }
}
