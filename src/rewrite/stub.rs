use std::path::Path;

use crate::constants::stubs;
use crate::package::PackageDescriptor;

/// What happens to a rewritten file after substitution, decided by its
/// relative path in the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    /// `src/Skeleton.php`, renamed after the class.
    ClassFile,
    /// `src/SkeletonServiceProvider.php`, renamed after the class.
    ProviderFile,
    /// `src/Facades/Skeleton.php`, renamed after the class.
    FacadeFile,
    /// `config/skeleton.php`, renamed after the package slug.
    ConfigFile,
    /// `README.md`, delete-marked sections are removed.
    ReadmeFile,
    Other,
}

impl StubKind {
    /// Classifies a `/`-separated path relative to the tree root. Only exact
    /// matches count, so nested files sharing a stub's name are `Other`.
    pub fn classify(relative: &str) -> Self {
        match relative {
            stubs::CLASS_FILE => StubKind::ClassFile,
            stubs::PROVIDER_FILE => StubKind::ProviderFile,
            stubs::FACADE_FILE => StubKind::FacadeFile,
            stubs::CONFIG_FILE => StubKind::ConfigFile,
            stubs::README_FILE => StubKind::ReadmeFile,
            _ => StubKind::Other,
        }
    }

    /// New relative path for renamed stubs, `None` when the file keeps its name.
    ///
    /// The original extension is preserved.
    pub fn rename_target(&self, relative: &str, package: &PackageDescriptor) -> Option<String> {
        let stem = match self {
            StubKind::ClassFile | StubKind::FacadeFile => package.class_name.clone(),
            StubKind::ProviderFile => {
                format!("{}{}", package.class_name, stubs::PROVIDER_SUFFIX)
            }
            StubKind::ConfigFile => package.slug.clone(),
            StubKind::ReadmeFile | StubKind::Other => return None,
        };

        let path = Path::new(relative);
        let file_name = match path.extension() {
            Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
            None => stem,
        };

        Some(match relative.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/{file_name}"),
            None => file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> PackageDescriptor {
        PackageDescriptor::new("widget".into(), "Widget".into(), String::new())
    }

    #[test]
    fn classifies_stub_paths() {
        assert_eq!(StubKind::classify("src/Skeleton.php"), StubKind::ClassFile);
        assert_eq!(
            StubKind::classify("src/SkeletonServiceProvider.php"),
            StubKind::ProviderFile
        );
        assert_eq!(StubKind::classify("src/Facades/Skeleton.php"), StubKind::FacadeFile);
        assert_eq!(StubKind::classify("config/skeleton.php"), StubKind::ConfigFile);
        assert_eq!(StubKind::classify("README.md"), StubKind::ReadmeFile);
        assert_eq!(StubKind::classify("composer.json"), StubKind::Other);
    }

    #[test]
    fn only_exact_paths_match() {
        assert_eq!(StubKind::classify("lib/src/Skeleton.php"), StubKind::Other);
        assert_eq!(StubKind::classify("src/Facades/SkeletonServiceProvider.php"), StubKind::Other);
        assert_eq!(StubKind::classify("docs/README.md"), StubKind::Other);
        assert_eq!(StubKind::classify("src\\Skeleton.php"), StubKind::Other);
    }

    #[test]
    fn class_file_renames_only_itself() {
        let package = package();
        assert_eq!(
            StubKind::ClassFile.rename_target("src/Skeleton.php", &package).as_deref(),
            Some("src/Widget.php")
        );
        assert_eq!(StubKind::classify("src/Widget.php"), StubKind::Other);
    }

    #[test]
    fn rename_targets() {
        let package = package();
        let target = |kind: StubKind, path: &str| kind.rename_target(path, &package);
        assert_eq!(
            target(StubKind::ProviderFile, "src/SkeletonServiceProvider.php").as_deref(),
            Some("src/WidgetServiceProvider.php")
        );
        assert_eq!(
            target(StubKind::FacadeFile, "src/Facades/Skeleton.php").as_deref(),
            Some("src/Facades/Widget.php")
        );
        assert_eq!(
            target(StubKind::ConfigFile, "config/skeleton.php").as_deref(),
            Some("config/widget.php")
        );
        assert_eq!(target(StubKind::ReadmeFile, "README.md"), None);
        assert_eq!(target(StubKind::Other, "composer.json"), None);
    }
}
