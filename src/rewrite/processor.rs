use crate::error::Result;
use crate::ioutils::{read_file, rename_file, write_file};
use crate::package::PackageDescriptor;
use crate::workspace::WorkingTree;

use super::operation::RewriteOperation;
use super::readme::remove_delete_blocks;
use super::stub::StubKind;
use super::tokens::ReplacementSet;

/// Applies the replacements to discovered files and renames the stubs.
pub struct RewriteProcessor<'a> {
    tree: &'a WorkingTree,
    replacements: &'a ReplacementSet,
    package: &'a PackageDescriptor,
    dry_run: bool,
}

impl<'a> RewriteProcessor<'a> {
    pub fn new(
        tree: &'a WorkingTree,
        replacements: &'a ReplacementSet,
        package: &'a PackageDescriptor,
        dry_run: bool,
    ) -> Self {
        Self { tree, replacements, package, dry_run }
    }

    /// Rewrites a single file given by its tree-relative path.
    ///
    /// The whole content is read, every token replaced and the result written
    /// back before any rename, so a failure leaves the file under its
    /// original name.
    pub fn process(&self, relative: &str) -> Result<RewriteOperation> {
        let kind = StubKind::classify(relative);
        let source_path = self.tree.join(relative);
        let source = relative.to_string();

        let content = read_file(&source_path)?;
        let mut rewritten = self.replacements.apply(&content);

        let operation = match kind {
            StubKind::ReadmeFile => {
                rewritten = remove_delete_blocks(&rewritten)?;
                RewriteOperation::StripReadme { source }
            }
            StubKind::ClassFile
            | StubKind::ProviderFile
            | StubKind::FacadeFile
            | StubKind::ConfigFile => match kind.rename_target(relative, self.package) {
                Some(target) => RewriteOperation::Rename { source, target },
                None => RewriteOperation::Rewrite { source },
            },
            StubKind::Other => RewriteOperation::Rewrite { source },
        };

        if self.dry_run {
            return Ok(operation);
        }

        write_file(&rewritten, &source_path)?;
        if let RewriteOperation::Rename { target, .. } = &operation {
            rename_file(&source_path, &self.tree.join(target))?;
        }

        Ok(operation)
    }

    /// Processes every file in order, logging each operation. The first
    /// failure stops the run.
    pub fn process_all(&self, files: &[String]) -> Result<Vec<RewriteOperation>> {
        let mut operations = Vec::with_capacity(files.len());
        for relative in files {
            log::debug!("Processing '{relative}'");
            let operation = self.process(relative)?;
            log::info!("{}", operation.get_message(self.dry_run));
            operations.push(operation);
        }
        Ok(operations)
    }
}
