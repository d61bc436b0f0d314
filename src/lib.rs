//! Exgen generates runnable Express application skeletons: a source file,
//! startup script, manifest, static assets and view templates, assembled
//! from a fixed catalogue of built-in fragments.

/// Read-only catalogue of the built-in template fragments
pub mod catalog;

/// Command-line front end for the generate binary
pub mod cli;

/// Common constants
pub mod constants;

/// Per-run accumulator of naming, module-binding and dependency decisions
pub mod context;

/// Error types and handling for the exgen application
pub mod error;

/// Destination gate deciding whether generation may proceed
pub mod guard;

/// Logger configuration
pub mod logger;

/// Package manifest model and serialization
pub mod manifest;

/// Output tree creation and fragment writing
pub mod materializer;

/// Application name derivation from the destination path
pub mod name;

/// Resolved generation options and the fixed engine catalogues
pub mod options;

/// Operator confirmation prompts
pub mod prompt;

/// Template rendering for composite fragments
pub mod renderer;

/// Post-generation console report
pub mod report;
