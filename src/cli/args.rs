use crate::constants::verbosity;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

/// Confirmation prompts that can be accepted without asking.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum SkipConfirm {
    /// Accept every confirmation prompt.
    All,
    /// Accept the "Modify files?" gate.
    Modify,
    /// Accept running `composer install`.
    Install,
    /// Accept deleting the script.
    Delete,
}

impl Display for SkipConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipConfirm::All => "all",
            SkipConfirm::Modify => "modify",
            SkipConfirm::Install => "install",
            SkipConfirm::Delete => "delete",
        };
        write!(f, "{s}")
    }
}

/// How questions are presented to the operator.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq, Default)]
#[value(rename_all = "lowercase")]
pub enum PromptStyle {
    /// `-> Question (default): ` lines on stdin/stdout.
    #[default]
    Plain,
    /// Interactive terminal widgets.
    Rich,
}

/// CLI arguments for configure-skeleton.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the skeleton checkout to configure.
    #[arg(short = 'C', long = "path", value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; unanswered questions take their defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Confirmation prompts to accept without asking (comma-separated).
    #[arg(long = "skip-confirms", value_delimiter = ',')]
    #[arg(value_enum)]
    pub skip_confirms: Vec<SkipConfirm>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Never run `composer install`.
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Never delete the script.
    #[arg(long = "keep-script")]
    pub keep_script: bool,

    /// Path treated as the running script, excluded from rewriting and
    /// deleted at the end. Defaults to the current executable.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Extra glob patterns, relative to the tree root, that are never rewritten.
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Skip the GitHub CLI and API lookups.
    #[arg(long)]
    pub offline: bool,

    /// How questions are presented.
    #[arg(long = "prompt-style", value_enum, default_value_t = PromptStyle::Plain)]
    pub prompt_style: PromptStyle,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["configure-skeleton"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.prompt_style, PromptStyle::Plain);
        assert!(!args.dry_run);
        assert!(args.skip_confirms.is_empty());
    }

    #[test]
    fn display_skip_confirm_variants() {
        assert_eq!(SkipConfirm::All.to_string(), "all");
        assert_eq!(SkipConfirm::Modify.to_string(), "modify");
        assert_eq!(SkipConfirm::Install.to_string(), "install");
        assert_eq!(SkipConfirm::Delete.to_string(), "delete");
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "configure-skeleton",
            "-C",
            "packages/widget",
            "-vv",
            "--answers",
            "{\"package_name\":\"widget\"}",
            "--skip-confirms",
            "modify,install",
            "--non-interactive",
            "--dry-run",
            "--no-install",
            "--keep-script",
            "--script",
            "configure",
            "--exclude",
            "docs/**",
            "--exclude",
            "*.lock",
            "--offline",
            "--prompt-style",
            "rich",
        ]);
        assert_eq!(args.path, PathBuf::from("packages/widget"));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.answers.as_deref(), Some("{\"package_name\":\"widget\"}"));
        assert_eq!(args.skip_confirms, vec![SkipConfirm::Modify, SkipConfirm::Install]);
        assert!(args.non_interactive && args.dry_run && args.no_install && args.keep_script);
        assert_eq!(args.script, Some(PathBuf::from("configure")));
        assert_eq!(args.exclude, vec!["docs/**", "*.lock"]);
        assert!(args.offline);
        assert_eq!(args.prompt_style, PromptStyle::Rich);
    }

    #[test]
    fn parses_skip_all() {
        let args = Args::parse_from(["configure-skeleton", "--skip-confirms=all"]);
        assert_eq!(args.skip_confirms, vec![SkipConfirm::All]);
    }
}
