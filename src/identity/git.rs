use git2::{Config, Repository, Sort};
use std::path::Path;

use super::interface::{CommitAuthor, VersionControl};

/// [`VersionControl`] backed by the git repository enclosing the working tree.
pub struct GitRepository {
    repo: Option<Repository>,
}

impl GitRepository {
    /// Opens the repository containing `path`. A missing repository is not an
    /// error: every lookup then falls back to the user's global configuration
    /// or returns nothing.
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let repo = match Repository::discover(path) {
            Ok(repo) => Some(repo),
            Err(e) => {
                log::debug!("No git repository found at '{}': {}", path.display(), e);
                None
            }
        };
        Self { repo }
    }

    fn config(&self) -> Option<Config> {
        let config = match &self.repo {
            Some(repo) => repo.config(),
            None => Config::open_default(),
        };
        config.map_err(|e| log::debug!("Failed to read git config: {e}")).ok()
    }

    fn config_string(&self, key: &str) -> Option<String> {
        let value = self.config()?.get_string(key).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn collect_authors(repo: &Repository) -> Result<Vec<CommitAuthor>, git2::Error> {
        let mut walk = repo.revwalk()?;
        walk.push_head()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        let mut authors = Vec::new();
        for oid in walk {
            let commit = repo.find_commit(oid?)?;
            let author = commit.author();
            if let (Some(name), Some(email)) = (author.name(), author.email()) {
                authors.push(CommitAuthor::new(name, email));
            }
        }
        Ok(authors)
    }
}

impl VersionControl for GitRepository {
    fn user_name(&self) -> Option<String> {
        self.config_string("user.name")
    }

    fn remote_url(&self) -> Option<String> {
        self.config_string("remote.origin.url")
    }

    fn author_log(&self) -> Vec<CommitAuthor> {
        let Some(repo) = &self.repo else {
            return Vec::new();
        };
        Self::collect_authors(repo).unwrap_or_else(|e| {
            log::debug!("Failed to read commit history: {e}");
            Vec::new()
        })
    }
}
