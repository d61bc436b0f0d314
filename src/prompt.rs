//! Operator interaction handling.

use crate::error::Result;
use dialoguer::Confirm;

/// Trait for the single confirmation capability the generator needs.
pub trait Prompter {
    /// Asks the operator a yes/no question. Empty input means "no".
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(message).default(false).interact()?)
    }
}
