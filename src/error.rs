use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the working tree. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse exclude pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to compile pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParseError(#[from] serde_json::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Answers must be a JSON object, got: {0}.")]
    AnswersTypeError(String),

    /// The operator declined the confirmation gate.
    #[error("Aborted: no files were modified.")]
    Aborted,

    #[error("Cannot proceed: working tree '{path}' does not exist.")]
    WorkingTreeDoesNotExistError { path: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
