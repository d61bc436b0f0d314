//! Error handling for the exgen application.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating an application skeleton.
///
/// Filesystem and rendering failures are fatal: generation stops at the
/// first one and leaves the partially written tree in place.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Composite template failed to parse or render
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),

    /// Fragment selection pattern failed to compile
    #[error("Catalogue error: {0}.")]
    Catalogue(#[from] globset::Error),

    /// Manifest serialization failed
    #[error("Manifest error: {0}.")]
    Manifest(#[from] serde_json::Error),

    /// Confirmation prompt failed
    #[error("Prompt error: {0}.")]
    Prompt(#[from] dialoguer::Error),

    /// The operator declined to write into a non-empty destination
    #[error("aborting")]
    Aborted,
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
