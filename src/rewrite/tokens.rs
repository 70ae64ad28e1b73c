use crate::constants::tokens;
use crate::identity::Identity;
use crate::package::PackageDescriptor;

/// Ordered placeholder-to-value pairs.
///
/// Pairs are applied one after another over the whole content, so a later
/// token also matches text produced by an earlier replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSet {
    pairs: Vec<(&'static str, String)>,
}

impl ReplacementSet {
    pub fn new(identity: &Identity, package: &PackageDescriptor) -> Self {
        let pairs = vec![
            (tokens::AUTHOR_NAME, identity.author_name.clone()),
            (tokens::AUTHOR_USERNAME, identity.author_username.clone()),
            (tokens::VENDOR_NAME, identity.vendor_name.clone()),
            (tokens::VENDOR_SLUG, identity.vendor_slug.clone()),
            (tokens::VENDOR_NAMESPACE, identity.vendor_namespace.clone()),
            (tokens::PACKAGE_NAME, package.name.clone()),
            (tokens::PACKAGE_SLUG, package.slug.clone()),
            (tokens::CLASS_NAME, package.class_name.clone()),
            (tokens::LOWERCASE_NAME, package.slug.clone()),
            (tokens::VARIABLE_NAME, package.variable_name.clone()),
            (tokens::PACKAGE_DESCRIPTION, package.description.clone()),
        ];
        Self { pairs }
    }

    /// Replaces every occurrence of every token.
    pub fn apply(&self, content: &str) -> String {
        self.pairs
            .iter()
            .fold(content.to_string(), |acc, (token, value)| acc.replace(token, value))
    }
}
