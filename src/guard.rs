//! Destination gate: decides whether generation may write into the target
//! directory.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Outcome of the destination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Proceed,
    Aborted,
}

/// Checks whether the destination directory may be written into.
///
/// A missing directory counts as empty; any other listing failure is
/// fatal, so permission problems never read as false-empty. A non-empty
/// destination needs either `force` or an affirmative answer to the single
/// confirmation prompt (empty input declines). This prompt is the only
/// suspension point of a run.
pub fn check_destination(
    destination: &Path,
    force: bool,
    prompter: &dyn Prompter,
) -> Result<Outcome> {
    let empty = match fs::read_dir(destination) {
        Ok(mut entries) => entries.next().is_none(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("destination {} does not exist yet", destination.display());
            true
        }
        Err(err) => return Err(Error::Io(err)),
    };

    if empty || force {
        return Ok(Outcome::Proceed);
    }

    if prompter.confirm("destination is not empty, continue?")? {
        Ok(Outcome::Proceed)
    } else {
        Ok(Outcome::Aborted)
    }
}
