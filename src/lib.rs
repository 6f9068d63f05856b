//! Core library surface for the in-memory library catalog.
//!
//! The binary only wires flags, logging and the demo walkthrough together;
//! everything it touches is exported here so tests and other callers can drive
//! the same catalog directly.
pub mod config;
pub mod demo;
pub mod error;
pub mod library;
pub mod logging;
pub mod models;

pub use config::{Cli, Settings};
pub use error::{CatalogError, CatalogResult};

/// The catalog and the outcome values its lending operations return.
pub use library::{BorrowOutcome, Library, ReturnOutcome};

/// Plain records stored in the catalog.
pub use models::{Book, Member};
