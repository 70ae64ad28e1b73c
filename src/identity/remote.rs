use url::Url;

/// Extracts the account or organization that owns a remote repository.
///
/// Supports:
/// - SSH: git@github.com:acme/widget.git -> acme
/// - HTTPS: https://github.com/acme/widget -> acme
/// - SSH with explicit protocol: ssh://git@github.com/acme/widget.git -> acme
pub fn remote_owner(remote_url: &str) -> Option<String> {
    let remote_url = remote_url.trim();
    if remote_url.is_empty() {
        return None;
    }

    // `host:owner/repo` also parses as a URL with `host` as its scheme.
    if remote_url.contains("://") {
        let url = Url::parse(remote_url).ok()?;
        url.host_str()?;
        return url
            .path_segments()?
            .find(|segment| !segment.is_empty())
            .map(str::to_string);
    }

    // scp-like syntax: [user@]host:owner/repo
    let (host, path) = remote_url.split_once(':')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }
    path.split('/').find(|segment| !segment.is_empty()).map(str::to_string)
}
