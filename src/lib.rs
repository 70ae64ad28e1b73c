/// Handles argument parsing and drives a run.
pub mod cli;

/// Tokens, stub paths and other fixed values.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for strings and paths.
pub mod ext;

/// Dependency install and self-deletion after the rewrite.
pub mod finalize;

/// Guesses author and vendor defaults from git and GitHub.
pub mod identity;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Package names derived from the operator's answers.
pub mod package;

/// User input and interaction handling.
pub mod prompt;

/// Placeholder substitution, stub renaming and README cleanup.
pub mod rewrite;

/// Finds the files that still contain placeholders.
pub mod scanner;

/// The checkout being configured.
pub mod workspace;
