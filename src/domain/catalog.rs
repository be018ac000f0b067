//! Catalog domain model
//!
//! The catalog is the ordered collection of books. Callers address books
//! by 1-based position, the same numbering shown in listings. Zero-based
//! vector indexing never leaves this module.

use std::fmt;
use thiserror::Error;

use super::book::{Book, BorrowOutcome};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid position {position}: catalog holds {len} book(s)")]
    OutOfRange { position: usize, len: usize },
}

/// A book paired with its 1-based position, as produced by [`Catalog::entries`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based position of the book in the catalog
    pub position: usize,
    /// The book at that position
    pub book: &'a Book,
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.book)
    }
}

/// An ordered collection of books addressed by 1-based position
///
/// Books keep their position for the life of the catalog: adding appends
/// at the end and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book and returns its 1-based position
    pub fn add(&mut self, book: Book) -> usize {
        self.books.push(book);
        self.books.len()
    }

    /// Returns the book at the given 1-based position
    pub fn get(&self, position: usize) -> Option<&Book> {
        self.slot(position).ok().map(|slot| &self.books[slot])
    }

    /// Returns the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over all books with their 1-based positions, in catalog order
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.books
            .iter()
            .enumerate()
            .map(|(index, book)| Entry {
                position: index + 1,
                book,
            })
    }

    /// Attempts to borrow the book at the given 1-based position
    pub fn borrow_at(&mut self, position: usize) -> Result<BorrowOutcome, CatalogError> {
        let slot = self.slot(position)?;
        Ok(self.books[slot].borrow())
    }

    /// Returns the book at the given 1-based position to the shelf
    pub fn return_at(&mut self, position: usize) -> Result<(), CatalogError> {
        let slot = self.slot(position)?;
        self.books[slot].give_back();
        Ok(())
    }

    /// Translates a 1-based position into a vector index
    ///
    /// The only place positions and indices meet.
    fn slot(&self, position: usize) -> Result<usize, CatalogError> {
        if position == 0 || position > self.books.len() {
            return Err(CatalogError::OutOfRange {
                position,
                len: self.books.len(),
            });
        }
        Ok(position - 1)
    }
}
