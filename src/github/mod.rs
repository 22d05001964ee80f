pub mod client;
pub mod pull_request;

pub use client::GitHubClient;
pub use pull_request::{CreatedPullRequest, NewPullRequest, PullRequestPublisher};
