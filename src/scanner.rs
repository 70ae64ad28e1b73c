//! Finds the files in the working tree that still contain placeholders.

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::{Regex, RegexBuilder};
use walkdir::{DirEntry, WalkDir};

use crate::constants::{CI_CONFIG_DIR, PLACEHOLDER_PATTERN, VENDOR_DIR};
use crate::error::Result;
use crate::workspace::WorkingTree;

/// Patterns that are never scanned, relative to the tree root.
const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["**/.git", "**/.hg", "**/.svn"];

/// Walks the tree and reports files matching [`PLACEHOLDER_PATTERN`].
pub struct PlaceholderScanner<'a> {
    tree: &'a WorkingTree,
    excludes: GlobSet,
    pattern: Regex,
}

impl<'a> PlaceholderScanner<'a> {
    /// Builds a scanner with the default exclusions plus `extra_excludes` globs.
    pub fn new(tree: &'a WorkingTree, extra_excludes: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let vendor = format!("**/{VENDOR_DIR}");
        let patterns = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .copied()
            .chain(std::iter::once(vendor.as_str()))
            .chain(extra_excludes.iter().map(String::as_str));

        for pattern in patterns {
            log::debug!("Adding exclude pattern: {pattern} to globset");
            builder.add(Glob::new(pattern)?);
        }

        let pattern = RegexBuilder::new(PLACEHOLDER_PATTERN).case_insensitive(true).build()?;

        Ok(Self { tree, excludes: builder.build()?, pattern })
    }

    /// Whether a tree-relative path is skipped, together with everything below it.
    pub fn is_excluded(&self, relative: &str, depth: usize) -> bool {
        // Hidden top-level entries are left alone, except the CI configuration.
        if depth == 1 && relative.starts_with('.') && relative != CI_CONFIG_DIR {
            return true;
        }
        if self.tree.script_relative().as_deref() == Some(relative) {
            return true;
        }
        self.excludes.is_match(relative)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        match self.tree.relative(entry.path()) {
            Some(relative) => {
                let excluded = self.is_excluded(&relative, entry.depth());
                if excluded {
                    log::debug!("Skipping '{relative}'");
                }
                !excluded
            }
            None => false,
        }
    }

    /// Relative `/`-separated paths of every file containing a placeholder,
    /// in file-name order.
    pub fn scan(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(self.tree.root())
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = self.tree.relative(entry.path()) else {
                continue;
            };

            let bytes = std::fs::read(entry.path())?;
            let Ok(content) = std::str::from_utf8(&bytes) else {
                log::debug!("Skipping non UTF-8 file '{relative}'");
                continue;
            };

            if self.pattern.is_match(content) {
                log::debug!("Found placeholders in '{relative}'");
                files.push(relative);
            }
        }

        Ok(files)
    }
}
