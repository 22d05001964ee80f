use crate::config::RepositorySlug;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Payload of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    /// `<owner>:<branch>`
    pub head: String,
    pub base: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPullRequest {
    pub number: u64,
    pub html_url: String,
}

/// Anything that can open a pull request on a hosted repository.
pub trait PullRequestPublisher {
    fn create_pull_request(
        &self,
        repository: &RepositorySlug,
        pull_request: &NewPullRequest,
    ) -> Result<CreatedPullRequest>;
}
