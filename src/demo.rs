//! The fixed walkthrough the binary runs against a seeded catalog.

use crate::error::CatalogResult;
use crate::library::{BorrowOutcome, Library, ReturnOutcome};

/// Outcomes collected while the walkthrough runs, in call order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub borrows: Vec<BorrowOutcome>,
    pub returns: Vec<ReturnOutcome>,
}

/// Borrow, report, return, and finally try the two edge cases: an unknown
/// borrower and a title the catalog does not carry.
pub fn run(library: &mut Library) -> CatalogResult<DemoReport> {
    let mut report = DemoReport::default();

    report.borrows.push(library.borrow_book("1984", "Ishaan"));
    library.display_borrowed_books();

    report
        .borrows
        .push(library.borrow_book("The Great Gatsby", "Alice"));
    library.display_borrowed_books();

    report.returns.push(library.return_book("1984", "Ishaan"));
    library.display_borrowed_books();

    report.borrows.push(library.borrow_book("the Hobbit", "Praharsh"));
    library.display_members();

    report.borrows.push(library.borrow_book("Unknown Book", "Bob"));
    library.display_available_books()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn walkthrough_outcomes_and_final_state() {
        let mut library = Library::seeded();

        let report = run(&mut library).unwrap();

        assert_eq!(
            report,
            DemoReport {
                borrows: vec![
                    BorrowOutcome::Borrowed,
                    BorrowOutcome::Borrowed,
                    BorrowOutcome::MemberRegisteredAndBorrowed,
                    BorrowOutcome::BookNotFound,
                ],
                returns: vec![ReturnOutcome::Returned],
            }
        );
        assert!(library.book("1984").unwrap().available);
        assert!(library.member("Ishaan").unwrap().borrowed.is_empty());
        assert_eq!(
            library.borrowed_report(),
            vec![
                "Book: The Great Gatsby by Author: F. Scott Fitzgerald is not available",
                "Book: The Hobbit by Author: J.R.R. Tolkien is not available",
            ]
        );
        assert_eq!(library.members().len(), 6);
    }
}
