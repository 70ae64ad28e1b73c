//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of how the question reaches the operator:
//! a plain line on stdin, a dialoguer widget or a predefined answers object.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    /// Stable identifier of the question, used to look up predefined answers.
    pub key: &'static str,
    pub prompt: String,
    pub default: String,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub key: &'static str,
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ConfirmationPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter {}
