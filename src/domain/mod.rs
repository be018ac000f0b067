//! Domain models for Shelf CLI
//!
//! Contains the core business logic without any I/O concerns.

mod book;
mod catalog;

pub use book::{Book, BorrowOutcome};
pub use catalog::{Catalog, CatalogError, Entry};
