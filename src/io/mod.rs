//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so tests can capture what the
//! binary would print.

use std::io::{self, Write};

/// Trait for writing report output
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Writes to stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// In-memory writer for tests
#[derive(Debug, Default)]
pub struct MockOutput {
    pub messages: Vec<String>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far as one string.
    pub fn text(&self) -> String {
        self.messages.concat()
    }
}

impl OutputWriter for MockOutput {
    fn write(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn writeln(&mut self, message: &str) {
        self.messages.push(format!("{}\n", message));
    }
}
