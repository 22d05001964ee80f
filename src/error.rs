use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("{0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("run `{command}` failed. cause: {output}")]
    CommandFailed { command: String, output: String },

    #[error("Manifest parsing failed: {0}")]
    ManifestParsing(String),

    #[error("GitHub API request failed: {0}")]
    GitHubApi(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
