//! Operator prompts.
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `line`: Plain `-> question (default): ` prompts over stdin/stdout
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `answers`: Non-interactive answers from a JSON object

pub mod answers;
pub mod dialoguer;
pub mod interface;
pub mod line;

pub use answers::AnswersPrompter;
pub use dialoguer::DialoguerPrompter;
pub use interface::*;
pub use line::LinePrompter;

/// Returns `default` when the operator gave no answer, the answer verbatim otherwise.
pub fn resolve_answer(answer: &str, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

/// Interprets a yes/no answer: only `y` (any case) is affirmative, an empty
/// answer takes `default`.
pub fn parse_confirmation(answer: &str, default: bool) -> bool {
    if answer.is_empty() {
        default
    } else {
        answer.eq_ignore_ascii_case("y")
    }
}

/// Renders a prompt line; the default is shown in parentheses when present.
pub fn format_prompt(question: &str, default: &str) -> String {
    if default.is_empty() {
        format!("-> {question}: ")
    } else {
        format!("-> {question} ({default}): ")
    }
}

/// Appends the `(Y/n)` / `(y/N)` hint to a confirmation question.
pub fn confirmation_question(question: &str, default: bool) -> String {
    let hint = if default { "Y/n" } else { "y/N" };
    format!("{question} ({hint})")
}
