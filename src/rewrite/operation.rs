/// Outcome of rewriting one discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOperation {
    /// Placeholders replaced in place.
    Rewrite { source: String },
    /// Placeholders replaced and the file moved to `target`.
    Rename { source: String, target: String },
    /// Placeholders replaced and delete-marked README sections removed.
    StripReadme { source: String },
}

impl RewriteOperation {
    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            RewriteOperation::Rewrite { source } => {
                format!("{prefix}Replacing placeholders in '{source}'")
            }
            RewriteOperation::Rename { source, target } => {
                format!(
                    "{prefix}Replacing placeholders in '{source}' and renaming it to '{target}'"
                )
            }
            RewriteOperation::StripReadme { source } => {
                format!("{prefix}Replacing placeholders in '{source}' and removing marked sections")
            }
        }
    }
}
