//! Dialoguer-based implementations of prompt interfaces
//!
//! Richer terminal widgets for operators who prefer them over the plain
//! line prompts.

use super::interface::{ConfirmationConfig, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt).allow_empty(true);

        if !config.default.is_empty() {
            input = input.default(config.default.clone());
        }

        let answer = input.interact_text()?;
        Ok(super::resolve_answer(&answer, &config.default))
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}
