//! Read-only status reports. Each one logs its lines at INFO and never touches
//! lending state.

use std::io::{self, Write};

use log::info;

use super::Library;
use crate::error::CatalogResult;

impl Library {
    /// Log every book still on the shelf, then leave two blank spacer lines
    /// on stdout.
    pub fn display_available_books(&self) -> CatalogResult<()> {
        info!("The list of available books is as follows:");
        for line in self.available_report() {
            info!("{line}");
        }
        write_spacer(&mut io::stdout().lock())?;
        Ok(())
    }

    /// Log every checked-out record with a "not available" suffix.
    pub fn display_borrowed_books(&self) {
        info!("The list of borrowed books is as follows:");
        for line in self.borrowed_report() {
            info!("{line}");
        }
    }

    /// Log one roster line per member. Unlike the book reports there is no
    /// header.
    pub fn display_members(&self) {
        for line in self.members_report() {
            info!("{line}");
        }
    }

    /// Report body for the shelf, one line per available copy.
    pub fn available_report(&self) -> Vec<String> {
        self.available_books().map(ToString::to_string).collect()
    }

    /// Report body for checked-out records.
    pub fn borrowed_report(&self) -> Vec<String> {
        self.borrowed_books()
            .map(|book| format!("{book} is not available"))
            .collect()
    }

    /// Report body for the roster, borrowed titles included.
    pub fn members_report(&self) -> Vec<String> {
        self.members.iter().map(ToString::to_string).collect()
    }
}

/// Blank lines that separate the shelf report from whatever prints next.
fn write_spacer(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\n\n")?;
    out.flush()
}
