//! # Command-Line Interface
//!
//! User-facing menu loop and output formatting.
//!
//! ## Menu Options
//!
//! | Option | Purpose |
//! |--------|---------|
//! | 1 | Add a book (prompts for title, then author) |
//! | 2 | List all books with their positions |
//! | 3 | Borrow a book by position |
//! | 4 | Return a book by position |
//! | 5 | Exit |
//!
//! ## Output Formats
//!
//! The binary supports a `--format` flag:
//! - `text` (default) - Human-readable prompts and messages
//! - `json` - Machine-parseable JSON, one document per action
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shelf --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the menu session.

mod app;
mod menu;
mod output;

pub use app::{Cli, run};
pub use menu::{MenuChoice, run_session};
pub use output::{Output, OutputFormat};
