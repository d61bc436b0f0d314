//! Application name derivation from the destination path.

use regex::Regex;
use std::path::Path;

/// Derives a manifest-safe application name from the destination path.
///
/// Takes the final path segment and reduces it to lowercase letters,
/// digits, `.` and `-`: every maximal run of other characters collapses to
/// a single `-`, then leading `-`/`_`/`.` and trailing `-` are stripped.
/// Deliberately conservative rather than a full rendition of package-name
/// validation.
///
/// Total over all inputs and never errors; an empty result (empty path,
/// `.`, a segment of only disallowed characters) is the caller's cue to
/// fall back to [`crate::constants::FALLBACK_APP_NAME`].
pub fn derive_app_name(path: &str) -> String {
    let base = Path::new(path)
        .file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
        .unwrap_or_default();

    let collapsed = Regex::new(r"[^A-Za-z0-9.-]+").unwrap().replace_all(&base, "-");
    let trimmed = Regex::new(r"^[-_.]+|-+$").unwrap().replace_all(&collapsed, "");

    trimmed.to_lowercase()
}
