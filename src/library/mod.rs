//! The catalog itself, split across logical submodules the same way the
//! lending rules and the read-only reports are split in the API.

mod lending;
mod reports;

use std::thread;
use std::time::Duration;

use crate::models::{Book, Member};

pub use lending::{BorrowOutcome, ReturnOutcome};

/// Books every fresh catalog starts with, as `(title, author)` pairs.
const SEED_BOOKS: &[(&str, &str)] = &[
    ("1984", "George Orwell"),
    ("To Kill a Mockingbird", "Harper Lee"),
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Catcher in the Rye", "J.D. Salinger"),
    ("The Hobbit", "J.R.R. Tolkien"),
    ("Fahrenheit 451", "Ray Bradbury"),
];

/// Members registered before any borrowing happens.
const SEED_MEMBERS: &[&str] = &["Ishaan", "Alice", "Bob", "Charlie", "David"];

/// In-memory catalog owning both collections. Records are only ever appended;
/// lending flips availability and moves titles in and out of borrowed lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
    members: Vec<Member>,
    /// Simulated processing time spent while registering a member and while
    /// assigning a book to them. Zero skips the pause entirely.
    processing_delay: Duration,
}

impl Library {
    /// Empty catalog with no books or members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the seven shelf books and five members.
    pub fn seeded() -> Self {
        Self {
            books: SEED_BOOKS
                .iter()
                .map(|(title, author)| Book::new(*title, *author))
                .collect(),
            members: SEED_MEMBERS.iter().map(|name| Member::new(*name)).collect(),
            processing_delay: Duration::ZERO,
        }
    }

    /// Set the simulated processing time. Auto-registering a borrower sleeps
    /// for it twice: once while registering, once while assigning the book.
    /// Borrows by registered members never sleep.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Put a book on the shelf and hand back the whole collection so callers
    /// can inspect it without a second lookup. Duplicate titles are accepted.
    pub fn add_book(&mut self, book: Book) -> &[Book] {
        log::debug!("Adding {book}");
        self.books.push(book);
        &self.books
    }

    /// Register a member. Duplicate names are accepted.
    pub fn add_member(&mut self, member: Member) {
        log::debug!("Adding member: {}", member.name);
        self.members.push(member);
    }

    /// Every book record in shelf order, borrowed or not.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Every member in registration order, auto-registered ones last.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// First book whose title matches, ignoring case.
    pub fn book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title_matches(title))
    }

    /// First member whose name matches, ignoring case.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name_matches(name))
    }

    /// Records still on the shelf, in shelf order.
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|book| book.available)
    }

    /// Records currently checked out. Same-title records appear together
    /// since they leave and return as one.
    pub fn borrowed_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|book| !book.available)
    }

    /// Sleep for the processing delay, or not at all when it is zero.
    fn pause(&self) {
        if !self.processing_delay.is_zero() {
            thread::sleep(self.processing_delay);
        }
    }
}
