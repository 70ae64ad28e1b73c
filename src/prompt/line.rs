//! Line-oriented prompts on a reader/writer pair.

use std::cell::RefCell;
use std::io::{BufRead, StdinLock, Stdout, Write};

use super::interface::{ConfirmationConfig, TextPromptConfig};
use super::{confirmation_question, format_prompt, parse_confirmation, resolve_answer};
use crate::error::Result;

/// Writes `-> question (default): ` and reads one line per question.
///
/// End of input is treated as an empty answer, so every remaining question
/// takes its default.
pub struct LinePrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input: RefCell::new(input), output: RefCell::new(output) }
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn ask(&self, question: &str, default: &str) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            write!(output, "{}", format_prompt(question, default))?;
            output.flush()?;
        }

        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;
        let answer = line.trim_end_matches(&['\r', '\n'][..]);
        Ok(answer.to_string())
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> super::interface::TextPrompter for LinePrompter<R, W> {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let answer = self.ask(&config.prompt, &config.default)?;
        Ok(resolve_answer(&answer, &config.default))
    }
}

impl<R: BufRead, W: Write> super::interface::ConfirmationPrompter for LinePrompter<R, W> {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let question = confirmation_question(&config.prompt, config.default);
        let answer = self.ask(&question, "")?;
        Ok(parse_confirmation(&answer, config.default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ConfirmationPrompter, TextPrompter};
    use std::io::Cursor;

    fn text(prompt: &str, default: &str) -> TextPromptConfig {
        TextPromptConfig { key: "test", prompt: prompt.into(), default: default.into() }
    }

    fn confirmation(default: bool) -> ConfirmationConfig {
        ConfirmationConfig { key: "test", prompt: "Modify files?".into(), default }
    }

    #[test]
    fn empty_line_takes_default() {
        let prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());
        let answer = prompter.prompt_text(&text("Package name", "widget")).unwrap();
        assert_eq!(answer, "widget");
        assert_eq!(
            String::from_utf8(prompter.into_output()).unwrap(),
            "-> Package name (widget): "
        );
    }

    #[test]
    fn answer_overrides_default_verbatim() {
        let prompter = LinePrompter::new(Cursor::new(" Fancy Widget \r\n"), Vec::new());
        let answer = prompter.prompt_text(&text("Package name", "widget")).unwrap();
        assert_eq!(answer, " Fancy Widget ");
    }

    #[test]
    fn end_of_input_takes_defaults() {
        let prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.prompt_text(&text("Vendor name", "Acme")).unwrap(), "Acme");
        assert!(prompter.prompt_confirmation(&confirmation(true)).unwrap());
    }

    #[test]
    fn empty_default_is_not_shown() {
        let prompter = LinePrompter::new(Cursor::new("jane\n"), Vec::new());
        prompter.prompt_text(&text("Author username", "")).unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "-> Author username: ");
    }

    #[test]
    fn confirmation_reads_lines_in_order() {
        let prompter = LinePrompter::new(Cursor::new("Y\nno\n\n"), Vec::new());
        assert!(prompter.prompt_confirmation(&confirmation(false)).unwrap());
        assert!(!prompter.prompt_confirmation(&confirmation(true)).unwrap());
        assert!(!prompter.prompt_confirmation(&confirmation(false)).unwrap());
        assert_eq!(
            String::from_utf8(prompter.into_output()).unwrap(),
            "-> Modify files? (y/N): -> Modify files? (Y/n): -> Modify files? (y/N): "
        );
    }
}
