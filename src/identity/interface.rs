//! Narrow interfaces over the external sources used to guess identity defaults.
//!
//! Every method is advisory: implementations swallow their own failures and
//! report them as `None` or an empty list, so the resolver can fall through
//! to the next source.

/// Author name and email of a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

impl CommitAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

/// Organization metadata returned by the hosting provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Organization {
    pub name: Option<String>,
    pub login: Option<String>,
}

/// Read-only access to the local version-control configuration.
pub trait VersionControl {
    /// Configured `user.name`.
    fn user_name(&self) -> Option<String>;

    /// URL of the `origin` remote.
    fn remote_url(&self) -> Option<String>;

    /// Authors of every commit reachable from `HEAD`, oldest first.
    fn author_log(&self) -> Vec<CommitAuthor>;
}

/// Authentication status of the hosting provider's CLI tool.
pub trait AuthStatus {
    /// Raw status text, stdout and stderr combined.
    fn status_output(&self) -> Option<String>;
}

/// Public organization lookup.
pub trait OrganizationApi {
    fn organization(&self, login: &str) -> Option<Organization>;
}
