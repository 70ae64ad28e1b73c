use reqwest::{blocking::Client, StatusCode};
use std::time::Duration;

use super::interface::{Organization, OrganizationApi};
use crate::constants::github::{API_BASE, TIMEOUT_SECS, USER_AGENT};

/// [`OrganizationApi`] backed by the public GitHub REST API.
pub struct GitHubApi {
    client: Option<Client>,
    base_url: String,
}

impl GitHubApi {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Points the client at another API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| log::debug!("Failed to create HTTP client: {e}"))
            .ok();
        Self { client, base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    fn endpoint(&self, login: &str) -> String {
        format!("{}/orgs/{}", self.base_url, login)
    }
}

impl Default for GitHubApi {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationApi for GitHubApi {
    fn organization(&self, login: &str) -> Option<Organization> {
        let client = self.client.as_ref()?;
        let url = self.endpoint(login);
        log::debug!("Fetching organization from {url}");

        let response = client
            .get(&url)
            .send()
            .map_err(|e| log::debug!("Request to {url} failed: {e}"))
            .ok()?;

        if response.status() != StatusCode::OK {
            log::debug!("Request to {url} returned {}", response.status());
            return None;
        }

        response
            .json::<Organization>()
            .map_err(|e| log::debug!("Failed to decode organization from {url}: {e}"))
            .ok()
    }
}
