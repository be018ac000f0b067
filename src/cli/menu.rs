//! Interactive menu session
//!
//! Drives the prompt loop behind the binary: render the menu, read a
//! choice, dispatch to the catalog, repeat until exit or end of input.
//! Reads go through an injected reader instead of stdin directly, so
//! whole sessions can be scripted.

use std::io::BufRead;
use std::str::FromStr;

use anyhow::Result;

use super::output::Output;
use crate::domain::{Book, Catalog};

/// A numbered option on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    BorrowBook,
    ReturnBook,
    Exit,
}

impl MenuChoice {
    /// Returns the 1-based number shown next to this option
    pub fn ordinal(&self) -> usize {
        match self {
            MenuChoice::AddBook => 1,
            MenuChoice::ListBooks => 2,
            MenuChoice::BorrowBook => 3,
            MenuChoice::ReturnBook => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Returns the label shown next to this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::ListBooks => "List Books",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Returns all menu choices in display order
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::AddBook,
            MenuChoice::ListBooks,
            MenuChoice::BorrowBook,
            MenuChoice::ReturnBook,
            MenuChoice::Exit,
        ]
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(1) => Ok(MenuChoice::AddBook),
            Ok(2) => Ok(MenuChoice::ListBooks),
            Ok(3) => Ok(MenuChoice::BorrowBook),
            Ok(4) => Ok(MenuChoice::ReturnBook),
            Ok(5) => Ok(MenuChoice::Exit),
            Ok(n) => Err(format!("Unknown menu option: {}", n)),
            Err(_) => Err(format!("Menu option is not a number: {:?}", s)),
        }
    }
}

/// Whether the session keeps prompting after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    End,
}

/// Runs the interactive menu loop until the exit choice or end of input
///
/// The caller owns the catalog and can inspect its final state after the
/// loop returns. The farewell message is printed only for an explicit
/// exit; a closed input stream ends the session silently.
pub fn run_session<R: BufRead>(catalog: &mut Catalog, mut input: R, output: &Output) -> Result<()> {
    loop {
        show_menu(output);

        let Some(line) = read_line(&mut input)? else {
            output.verbose("Input ended, closing session");
            return Ok(());
        };

        let flow = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::AddBook) => add_book(catalog, &mut input, output)?,
            Ok(MenuChoice::ListBooks) => {
                list_books(catalog, output);
                Flow::Continue
            }
            Ok(MenuChoice::BorrowBook) => borrow_book(catalog, &mut input, output)?,
            Ok(MenuChoice::ReturnBook) => return_book(catalog, &mut input, output)?,
            Ok(MenuChoice::Exit) => {
                output.success("Exiting system. Goodbye!");
                Flow::End
            }
            Err(reason) => {
                output.verbose_ctx("menu", &reason);
                output.error("Invalid option. Please try again.");
                Flow::Continue
            }
        };

        if flow == Flow::End {
            return Ok(());
        }
    }
}

fn show_menu(output: &Output) {
    output.blank();
    output.text("Library Management System");
    for choice in MenuChoice::all() {
        output.text(&format!("{}. {}", choice.ordinal(), choice.label()));
    }
    output.prompt("Choose an option: ");
}

/// Reads one line, stripping the trailing newline; None at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn prompt_line<R: BufRead>(input: &mut R, output: &Output, prompt: &str) -> Result<Option<String>> {
    output.prompt(prompt);
    read_line(input)
}

/// Parses a raw index line; reports the input-format error on failure
fn parse_position(raw: &str, output: &Output) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(position) => Some(position),
        Err(reason) => {
            output.verbose_ctx("input", &format!("Rejected {:?}: {}", raw, reason));
            output.error("Invalid input: book index must be a number.");
            None
        }
    }
}

fn add_book<R: BufRead>(catalog: &mut Catalog, input: &mut R, output: &Output) -> Result<Flow> {
    let Some(title) = prompt_line(input, output, "Enter book title: ")? else {
        return Ok(Flow::End);
    };
    let Some(author) = prompt_line(input, output, "Enter book author: ")? else {
        return Ok(Flow::End);
    };

    let position = catalog.add(Book::new(title, author));
    output.verbose_ctx("add", &format!("Catalog holds {} book(s)", catalog.len()));

    if output.is_json() {
        if let Some(book) = catalog.get(position) {
            output.data(&serde_json::json!({
                "action": "add",
                "position": position,
                "title": book.title,
                "author": book.author,
                "available": book.available,
            }));
        }
    } else {
        output.success("Book added successfully.");
    }

    Ok(Flow::Continue)
}

fn list_books(catalog: &Catalog, output: &Output) {
    output.verbose_ctx("list", &format!("{} book(s) in catalog", catalog.len()));

    if output.is_json() {
        let items: Vec<_> = catalog
            .entries()
            .map(|entry| {
                serde_json::json!({
                    "position": entry.position,
                    "title": entry.book.title,
                    "author": entry.book.author,
                    "available": entry.book.available,
                })
            })
            .collect();
        output.data(&items);
    } else if catalog.is_empty() {
        println!("No books in the library.");
    } else {
        println!("Library Books:");
        for entry in catalog.entries() {
            println!("{}", entry);
        }
    }
}

fn borrow_book<R: BufRead>(catalog: &mut Catalog, input: &mut R, output: &Output) -> Result<Flow> {
    let Some(raw) = prompt_line(input, output, "Enter the book index to borrow: ")? else {
        return Ok(Flow::End);
    };
    let Some(position) = parse_position(&raw, output) else {
        return Ok(Flow::Continue);
    };

    match catalog.borrow_at(position) {
        Ok(outcome) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "action": "borrow",
                    "position": position,
                    "outcome": outcome,
                }));
            } else if outcome.is_borrowed() {
                output.success("Book borrowed successfully.");
            } else {
                output.success("Book is already borrowed.");
            }
        }
        Err(reason) => {
            output.verbose_ctx("borrow", &reason.to_string());
            output.error("Invalid book index.");
        }
    }

    Ok(Flow::Continue)
}

fn return_book<R: BufRead>(catalog: &mut Catalog, input: &mut R, output: &Output) -> Result<Flow> {
    let Some(raw) = prompt_line(input, output, "Enter the book index to return: ")? else {
        return Ok(Flow::End);
    };
    let Some(position) = parse_position(&raw, output) else {
        return Ok(Flow::Continue);
    };

    match catalog.return_at(position) {
        Ok(()) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "action": "return",
                    "position": position,
                }));
            } else {
                output.success("Book returned successfully.");
            }
        }
        Err(reason) => {
            output.verbose_ctx("return", &reason.to_string());
            output.error("Invalid book index.");
        }
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::io::Cursor;

    fn run_script(catalog: &mut Catalog, script: &str) {
        let output = Output::new(OutputFormat::Text, false);
        run_session(catalog, Cursor::new(script), &output).unwrap();
    }

    // =========================================================================
    // Menu choice parsing
    // =========================================================================

    #[test]
    fn menu_choice_parses_each_ordinal() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddBook));
        assert_eq!("2".parse::<MenuChoice>(), Ok(MenuChoice::ListBooks));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::BorrowBook));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::ReturnBook));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn menu_choice_ignores_surrounding_whitespace() {
        assert_eq!("  3  ".parse::<MenuChoice>(), Ok(MenuChoice::BorrowBook));
    }

    #[test]
    fn menu_choice_rejects_non_numbers() {
        assert!("".parse::<MenuChoice>().is_err());
        assert!("two".parse::<MenuChoice>().is_err());
        assert!("1x".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn menu_choice_rejects_numbers_off_the_menu() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("-1".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn all_choices_are_numbered_in_display_order() {
        let ordinals: Vec<usize> = MenuChoice::all().iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn labels_match_the_menu() {
        assert_eq!(MenuChoice::AddBook.label(), "Add Book");
        assert_eq!(MenuChoice::ListBooks.label(), "List Books");
        assert_eq!(MenuChoice::BorrowBook.label(), "Borrow Book");
        assert_eq!(MenuChoice::ReturnBook.label(), "Return Book");
        assert_eq!(MenuChoice::Exit.label(), "Exit");
    }

    // =========================================================================
    // Session behavior
    // =========================================================================

    #[test]
    fn session_adds_a_book() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "1\nDune\nHerbert\n5\n");

        assert_eq!(catalog.len(), 1);
        let book = catalog.get(1).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert!(book.available);
    }

    #[test]
    fn session_preserves_raw_title_and_author_lines() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "1\n  Dune  \n\n5\n");

        let book = catalog.get(1).unwrap();
        assert_eq!(book.title, "  Dune  ");
        assert_eq!(book.author, "");
    }

    #[test]
    fn session_borrows_and_returns_by_position() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert"));
        catalog.add(Book::new("Emma", "Austen"));

        run_script(&mut catalog, "3\n2\n5\n");
        assert!(catalog.get(1).unwrap().available);
        assert!(!catalog.get(2).unwrap().available);

        run_script(&mut catalog, "4\n2\n5\n");
        assert!(catalog.get(2).unwrap().available);
    }

    #[test]
    fn session_ends_at_exit_without_reading_further() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "5\n1\nDune\nHerbert\n");

        assert!(catalog.is_empty());
    }

    #[test]
    fn session_ends_cleanly_at_end_of_input() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "");

        assert!(catalog.is_empty());
    }

    #[test]
    fn end_of_input_during_add_dialog_discards_the_book() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "1\nDune\n");

        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_option_keeps_the_session_alive() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "9\nbooks\n1\nDune\nHerbert\n5\n");

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn out_of_range_borrow_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert"));
        let before = catalog.clone();

        run_script(&mut catalog, "3\n7\n5\n");
        assert_eq!(catalog, before);
    }

    #[test]
    fn non_numeric_position_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert"));
        let before = catalog.clone();

        run_script(&mut catalog, "3\nfirst\n5\n");
        assert_eq!(catalog, before);
    }

    #[test]
    fn double_borrow_leaves_book_checked_out() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert"));

        run_script(&mut catalog, "3\n1\n3\n1\n5\n");
        assert!(!catalog.get(1).unwrap().available);
    }

    #[test]
    fn return_of_never_borrowed_book_is_accepted() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Herbert"));

        run_script(&mut catalog, "4\n1\n5\n");
        assert!(catalog.get(1).unwrap().available);
    }

    #[test]
    fn windows_line_endings_are_handled() {
        let mut catalog = Catalog::new();
        run_script(&mut catalog, "1\r\nDune\r\nHerbert\r\n5\r\n");

        assert_eq!(catalog.get(1).map(|b| b.title.as_str()), Some("Dune"));
    }
}
