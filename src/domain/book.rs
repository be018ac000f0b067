//! Book domain model
//!
//! Books are the records tracked by the catalog. Each book carries a
//! title, an author, and a single availability flag that borrowing and
//! returning toggle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a borrow attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorrowOutcome {
    /// The book was on the shelf and is now checked out
    Borrowed,
    /// The book was already checked out; nothing changed
    AlreadyBorrowed,
}

impl BorrowOutcome {
    /// Returns true if the attempt checked the book out
    pub fn is_borrowed(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed)
    }
}

/// A book tracked by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Whether the book is currently on the shelf
    pub available: bool,
}

impl Book {
    /// Creates a new book, available for borrowing
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Attempts to check the book out
    ///
    /// Borrowing a book that is already checked out is a no-op reported
    /// through the returned outcome, not an error.
    pub fn borrow(&mut self) -> BorrowOutcome {
        if self.available {
            self.available = false;
            BorrowOutcome::Borrowed
        } else {
            BorrowOutcome::AlreadyBorrowed
        }
    }

    /// Puts the book back on the shelf
    ///
    /// Always succeeds; returning a book that was never borrowed leaves
    /// it available.
    pub fn give_back(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Available: {}",
            self.title, self.author, self.available
        )
    }
}
