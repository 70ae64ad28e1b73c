//! Best-effort discovery of the author and vendor identity.
//!
//! Nothing here fails: each source is consulted in turn and any lookup that
//! cannot answer simply yields an empty default for the operator to fill in.

use regex::Regex;

use crate::constants::github::{BOT_MARKER, NOREPLY_DOMAIN};
use crate::ext::StringExt;

pub mod gh;
pub mod git;
pub mod github;
pub mod interface;
pub mod remote;

pub use interface::*;
pub use remote::remote_owner;

/// Author and vendor values substituted into the skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub author_name: String,
    pub author_username: String,
    pub vendor_name: String,
    pub vendor_username: String,
    pub vendor_slug: String,
    pub vendor_namespace: String,
}

/// Vendor defaults guessed before the vendor questions are asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorGuess {
    pub name: String,
    pub username: String,
}

/// Consults the version-control, CLI and API sources in a fixed fallback order.
pub struct IdentityResolver<'a> {
    vcs: &'a dyn VersionControl,
    auth: Option<&'a dyn AuthStatus>,
    api: Option<&'a dyn OrganizationApi>,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        auth: Option<&'a dyn AuthStatus>,
        api: Option<&'a dyn OrganizationApi>,
    ) -> Self {
        Self { vcs, auth, api }
    }

    /// Configured version-control user name, or an empty string.
    pub fn user_name(&self) -> String {
        self.vcs.user_name().unwrap_or_default()
    }

    /// Guesses the hosting-provider username.
    ///
    /// Tries the commit history first, then the CLI auth status, then the
    /// owner segment of the `origin` remote.
    pub fn guess_username(&self) -> String {
        let user_name = self.user_name();
        if let Some(username) = username_from_commits(&user_name, &self.vcs.author_log()) {
            log::debug!("Username '{username}' found in commit history");
            return username;
        }

        let status = self.auth.and_then(|auth| auth.status_output());
        if let Some(username) = status.as_deref().and_then(username_from_auth_status) {
            log::debug!("Username '{username}' found in CLI auth status");
            return username;
        }

        self.remote_owner().unwrap_or_default()
    }

    /// Guesses the vendor name and username from the organization owning the
    /// `origin` remote, falling back to the given author values.
    pub fn guess_vendor(&self, author_name: &str, author_username: &str) -> VendorGuess {
        let fallback =
            VendorGuess { name: author_name.to_string(), username: author_username.to_string() };

        let Some(owner) = self.remote_owner() else {
            return fallback;
        };
        let Some(org) = self.api.and_then(|api| api.organization(&owner)) else {
            log::debug!("No organization data for '{owner}', using author values");
            return fallback;
        };

        VendorGuess {
            name: org.name.filter(|name| !name.is_empty()).unwrap_or(fallback.name),
            username: org.login.filter(|login| !login.is_empty()).unwrap_or(fallback.username),
        }
    }

    fn remote_owner(&self) -> Option<String> {
        self.vcs.remote_url().as_deref().and_then(remote_owner)
    }
}

impl Identity {
    /// Builds the identity from the final operator answers. The vendor slug is
    /// always derived from the vendor username.
    pub fn new(
        author_name: String,
        author_username: String,
        vendor_name: String,
        vendor_username: String,
        vendor_namespace: String,
    ) -> Self {
        let vendor_slug = vendor_username.slugify();
        Self {
            author_name,
            author_username,
            vendor_name,
            vendor_username,
            vendor_slug,
            vendor_namespace,
        }
    }
}

/// Finds the username behind the oldest noreply commit authored by `user_name`.
///
/// The local part of a noreply address may carry a numeric account id prefix
/// (`12345+jane@users.noreply.github.com`), which is dropped.
pub fn username_from_commits(user_name: &str, authors: &[CommitAuthor]) -> Option<String> {
    let user_name = user_name.trim().to_lowercase();
    if user_name.is_empty() {
        return None;
    }

    let author = authors.iter().find(|author| {
        author.email.to_lowercase().ends_with(NOREPLY_DOMAIN)
            && author.name.trim().to_lowercase() == user_name
            && !author.name.contains(BOT_MARKER)
    })?;

    let local = author.email.split('@').next()?;
    let username = match local.split_once('+') {
        Some((id, rest)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => local,
    };
    (!username.is_empty()).then(|| username.to_string())
}

/// Extracts the logged-in account from `gh auth status` output.
pub fn username_from_auth_status(output: &str) -> Option<String> {
    let re = Regex::new(r"(?i)logged in to github\.com (?:as|account) ([A-Za-z0-9_-]+)").ok()?;
    re.captures(output).map(|caps| caps[1].to_string())
}
