//! I/O boundary traits for testability
//!
//! These traits abstract the console and book storage, allowing services
//! to be tested with recording or in-memory implementations.

use std::io::{self, Write};

use crate::domain::Book;

/// Line-oriented console abstraction.
pub trait Console: Send + Sync {
    /// Write one line of output.
    fn write_line(&self, line: &str);
}

/// Book storage abstraction.
///
/// Methods take `&self` so one store can be shared between the code that
/// fills it and the services that query it.
pub trait BookStore: Send + Sync {
    /// Append a book. Duplicates are allowed.
    fn add_book(&self, book: Book);

    /// Snapshot of all books in insertion order.
    fn list_books(&self) -> Vec<Book>;

    /// Remove every book whose title matches exactly.
    fn remove_book(&self, title: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real console writing to stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // broken pipe (e.g. `solid run all | head`) is ignored
        let _ = writeln!(handle, "{}", line);
    }
}
