//! Domain records held by the catalog. These stay plain data holders so the
//! `library` module owns every rule about lending, and reports can borrow them
//! freely.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single copy of a book on the shelf. Identity is the title; two copies
/// with the same title are allowed and lookups settle on the first one.
pub struct Book {
    /// Title as it was entered. Borrow lookups compare it case-insensitively
    /// but the stored casing is what ends up in borrowed lists.
    pub title: String,
    /// Author shown in the availability reports.
    pub author: String,
    /// `true` while the copy is on the shelf and nobody holds it.
    pub available: bool,
}

impl Book {
    /// Build an available copy.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Case-insensitive title comparison used by borrow lookups.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: {} by Author: {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registered borrower and the titles currently checked out to them.
pub struct Member {
    /// Name as registered. Borrow lookups ignore its case; returns compare it
    /// exactly.
    pub name: String,
    /// Titles in checkout order. A title appears at most once while it is
    /// outstanding.
    pub borrowed: Vec<String>,
}

impl Member {
    /// Register a member holding nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    /// Case-insensitive name comparison used by borrow lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Exact check against the borrowed list. Returns go through this one.
    pub fn holds(&self, title: &str) -> bool {
        self.borrowed.iter().any(|held| held == title)
    }

    /// Same check ignoring case, used to keep a borrower from taking a title
    /// they already have under a different casing.
    pub fn holds_ignoring_case(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.borrowed.iter().any(|held| held.to_lowercase() == title)
    }
}

impl fmt::Display for Member {
    /// Render the member the way the roster report prints it, with the
    /// borrowed titles in a quoted list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member: {}, Borrowed Books: {:?}", self.name, self.borrowed)
    }
}
