use std::fmt;

use log::{debug, info, warn};

use super::Library;
use crate::models::Member;

/// Result of a borrow attempt. Nothing in lending raises an error; every
/// branch reports back through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// A registered member took the book.
    Borrowed,
    /// The member was unknown, got registered, and took the book.
    MemberRegisteredAndBorrowed,
    /// The title exists but no copy is on the shelf.
    BookUnavailable,
    /// No book carries the title.
    BookNotFound,
    /// The member already holds the title, in any casing.
    AlreadyHeld,
}

impl BorrowOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Borrowed | Self::MemberRegisteredAndBorrowed)
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Borrowed => "borrowed",
            Self::MemberRegisteredAndBorrowed => "member registered and borrowed",
            Self::BookUnavailable => "book unavailable",
            Self::BookNotFound => "book not found",
            Self::AlreadyHeld => "already held",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    /// No member with that exact name holds that exact title.
    NotHeld,
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returned => f.write_str("returned"),
            Self::NotHeld => f.write_str("not held"),
        }
    }
}

impl Library {
    /// Lend the title to `member_name`, both compared ignoring case. Every
    /// record carrying the title leaves the shelf together. Unknown members are
    /// registered on the spot, but only when the title is there to give them.
    pub fn borrow_book(&mut self, title: &str, member_name: &str) -> BorrowOutcome {
        let book_idx = self
            .books
            .iter()
            .position(|book| book.available && book.title_matches(title));
        let member_idx = self
            .members
            .iter()
            .position(|member| member.name_matches(member_name));

        if member_idx.is_some() {
            info!("Member: {member_name} is a registered member");
        }

        let Some(book_idx) = book_idx else {
            warn!("Book: {title} is not in the library");
            return if self.book(title).is_some() {
                BorrowOutcome::BookUnavailable
            } else {
                BorrowOutcome::BookNotFound
            };
        };

        match member_idx {
            Some(member_idx) => {
                if self.members[member_idx].holds_ignoring_case(&self.books[book_idx].title) {
                    warn!("Member: {member_name} already holds the book: {title}");
                    return BorrowOutcome::AlreadyHeld;
                }
                info!("Book: {title} is available for borrowing");
                info!("Assigning Book: {title} to member: {member_name}");
                self.assign(book_idx, member_idx);
                BorrowOutcome::Borrowed
            }
            None => {
                warn!("Member: {member_name} is not a registered member");
                info!("Registering new member: {member_name}");
                self.pause();
                let member_idx = self.members.len();
                self.members.push(Member::new(member_name));
                info!("Member: {member_name} has been registered successfully");

                info!("Book: {title} is available for borrowing");
                info!("Assigning Book: {title} to member: {member_name}");
                self.pause();
                self.assign(book_idx, member_idx);
                BorrowOutcome::MemberRegisteredAndBorrowed
            }
        }
    }

    /// Take back `title` from `member_name`. Both must match exactly, unlike
    /// borrowing. Every record carrying the title goes back on the shelf.
    pub fn return_book(&mut self, title: &str, member_name: &str) -> ReturnOutcome {
        let Some(member) = self
            .members
            .iter_mut()
            .find(|member| member.name == member_name && member.holds(title))
        else {
            debug!("Member: {member_name} does not hold the book: {title}");
            return ReturnOutcome::NotHeld;
        };

        member.borrowed.retain(|held| held != title);
        for book in self.books.iter_mut().filter(|book| book.title_matches(title)) {
            book.available = true;
        }

        info!("{member_name} has returned the book: {title}");
        ReturnOutcome::Returned
    }

    /// Stored title goes into the borrowed list, so a later exact-match return
    /// finds it regardless of how the borrower typed it. Same-title records
    /// share one availability flag in effect, so all of them are taken.
    fn assign(&mut self, book_idx: usize, member_idx: usize) {
        let title = self.books[book_idx].title.clone();
        for book in self.books.iter_mut().filter(|book| book.title_matches(&title)) {
            book.available = false;
        }

        let member = &mut self.members[member_idx];
        info!("Success! {} has borrowed the book: {title}", member.name);
        member.borrowed.push(title);
    }
}
