//! Common constants used throughout the exgen application.

/// Substituted when the destination path yields no usable application name
pub const FALLBACK_APP_NAME: &str = "hello-world";

/// Version stamped into every generated manifest
pub const MANIFEST_VERSION: &str = "0.0.0";

/// The manifest's `start` script, invoking the startup script
pub const START_COMMAND: &str = "node ./bin/www";
