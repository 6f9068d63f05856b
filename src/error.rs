//! Error types for the catalog.
//!
//! Lending itself never fails; these cover the console plumbing around it.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A global logger was already installed
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Writing report spacing to the console failed
    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}
