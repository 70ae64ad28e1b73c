//! Prompts answered from a predefined JSON object.

use serde_json::{Map, Value};

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, TextPromptConfig, TextPrompter,
};
use crate::error::Result;

/// Answers questions from `answers`, keyed by the question key.
///
/// Questions without a usable answer (missing key, `null`, empty string) are
/// passed to the fallback prompter when there is one, and take their default
/// otherwise. Numbers are accepted for text questions; booleans and `"y"`/`"n"`
/// strings for confirmations.
pub struct AnswersPrompter {
    answers: Map<String, Value>,
    fallback: Option<Box<dyn PromptProvider>>,
}

impl AnswersPrompter {
    pub fn new(answers: Map<String, Value>) -> Self {
        Self { answers, fallback: None }
    }

    /// Asks `fallback` whatever `answers` does not cover.
    pub fn with_fallback(mut self, fallback: Box<dyn PromptProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn text_answer(&self, key: &str) -> Option<String> {
        match self.answers.get(key)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    fn confirmation_answer(&self, key: &str, default: bool) -> Option<bool> {
        match self.answers.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) if !s.is_empty() => Some(super::parse_confirmation(s, default)),
            _ => None,
        }
    }
}

impl TextPrompter for AnswersPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        if let Some(answer) = self.text_answer(config.key) {
            log::debug!("Answer for '{}': {:?}", config.key, answer);
            return Ok(answer);
        }
        match &self.fallback {
            Some(fallback) => fallback.prompt_text(config),
            None => Ok(config.default.clone()),
        }
    }
}

impl ConfirmationPrompter for AnswersPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        if let Some(answer) = self.confirmation_answer(config.key, config.default) {
            log::debug!("Answer for '{}': {}", config.key, answer);
            return Ok(answer);
        }
        match &self.fallback {
            Some(fallback) => fallback.prompt_confirmation(config),
            None => Ok(config.default),
        }
    }
}
