use crate::config::RepositorySlug;
use crate::error::{Result, UpdaterError};
use crate::github::pull_request::{CreatedPullRequest, NewPullRequest, PullRequestPublisher};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Blocking GitHub REST client authenticated with a personal access token.
pub struct GitHubClient {
    client: Client,
    api_url: Url,
    verbose: bool,
}

impl GitHubClient {
    pub fn new(api_url: Url, token: &str, verbose: bool) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| UpdaterError::InvalidArgument("Invalid GitHub token format".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ci-modules-update/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url,
            verbose,
        })
    }

    fn pulls_url(&self, repository: &RepositorySlug) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UpdaterError::InvalidArgument(format!("API URL cannot be a base: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(["repos", repository.owner.as_str(), repository.name.as_str(), "pulls"]);
        Ok(url)
    }
}

impl PullRequestPublisher for GitHubClient {
    fn create_pull_request(
        &self,
        repository: &RepositorySlug,
        pull_request: &NewPullRequest,
    ) -> Result<CreatedPullRequest> {
        let url = self.pulls_url(repository)?;
        if self.verbose {
            eprintln!("[VERBOSE] POST {url} (head {})", pull_request.head);
        }

        let response = self.client.post(url).json(pull_request).send()?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let detail: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(UpdaterError::GitHubApi(format!(
                "HTTP {status} creating pull request on {}/{}: {}",
                repository.owner,
                repository.name,
                detail.trim()
            )));
        }

        let created: CreatedPullRequest = response.json()?;
        if self.verbose {
            eprintln!("[VERBOSE] Created pull request #{}", created.number);
        }
        Ok(created)
    }
}
