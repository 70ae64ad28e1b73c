use crate::ext::StringExt;

/// Names and description of the package being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: String,
    pub slug: String,
    pub class_name: String,
    pub variable_name: String,
    pub description: String,
}

impl PackageDescriptor {
    /// Derives the slug from `name` and the variable name from `class_name`.
    pub fn new(name: String, class_name: String, description: String) -> Self {
        let slug = name.slugify();
        let variable_name = class_name.lcfirst();
        Self { name, slug, class_name, variable_name, description }
    }

    /// Default class name for a package name.
    pub fn default_class_name(name: &str) -> String {
        name.title_case()
    }

    /// Default description for a package slug.
    pub fn default_description(slug: &str) -> String {
        format!("This is my package {slug}")
    }
}
