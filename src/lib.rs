//! Shelf CLI - An interactive catalog manager for small book collections
//!
//! Shelf tracks books (title, author, availability) in an in-memory
//! catalog driven by a numbered prompt menu: add, list, borrow by
//! position, return by position. State lives for one session only;
//! nothing is persisted.

pub mod domain;
pub mod cli;

pub use domain::{Book, BorrowOutcome, Catalog, CatalogError, Entry};
