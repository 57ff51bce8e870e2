// src/logger.rs
use console::style;
use std::cell::RefCell;

/// Leveled sink for user-facing messages.
///
/// The orchestrator and the sorter only talk to the console through this
/// trait, so tests can swap in a [`MemoryLogger`].
pub trait Logger {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    /// Writes the message as-is, without a level marker.
    fn print(&self, message: &str);
}

/// Writes styled messages to the terminal. Errors and warnings go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn error(&self, message: &str) {
        eprintln!(
            "{} {}",
            style("✗").red().bold().for_stderr(),
            style(message).red().for_stderr()
        );
    }

    fn warning(&self, message: &str) {
        eprintln!(
            "{} {}",
            style("⚠").yellow().bold().for_stderr(),
            style(message).yellow().for_stderr()
        );
    }

    fn info(&self, message: &str) {
        println!("{} {message}", style("ℹ").blue().bold());
    }

    fn success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), style(message).green());
    }

    fn print(&self, message: &str) {
        println!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Info,
    Success,
    Print,
}

/// Records every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at `level`, in order.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_owned()));
    }
}

impl Logger for MemoryLogger {
    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn print(&self, message: &str) {
        self.push(Level::Print, message);
    }
}
