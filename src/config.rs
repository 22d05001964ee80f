use crate::cli::Cli;
use crate::error::{Result, UpdaterError};
use regex::Regex;
use std::path::PathBuf;
use url::Url;

const DEFAULT_BASE_BRANCH: &str = "master";
const DEFAULT_API_URL: &str = "https://api.github.com";

/// `owner/repo` on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub name: String,
}

impl RepositorySlug {
    pub fn parse(value: &str) -> Result<Self> {
        let pattern = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$")
            .map_err(|e| UpdaterError::InvalidArgument(e.to_string()))?;

        let captures = pattern.captures(value.trim()).ok_or_else(|| {
            UpdaterError::InvalidArgument(format!(
                "repository must be in owner/repo form, got '{value}'"
            ))
        })?;

        Ok(Self {
            owner: captures[1].to_string(),
            name: captures[2].to_string(),
        })
    }
}

/// Everything needed to open the pull request. Absent in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    pub token: String,
    pub user: String,
    pub email: String,
    pub repository: RepositorySlug,
    pub base: String,
    pub api_url: Url,
}

/// Validated, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    pub project_path: PathBuf,
    pub verbose: bool,
    /// `None` means dry-run.
    pub publish: Option<PublishSettings>,
}

impl UpdaterConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_path = PathBuf::from(&cli.path);

        if cli.dry_run {
            return Ok(Self {
                project_path,
                verbose: cli.verbose,
                publish: None,
            });
        }

        let user = required(&cli.user, "please set Git user name")?;
        let repository = required(&cli.repository, "please set repository URL")?;
        let token = required(&cli.github_access_token, "please set GitHub access token")?;

        let email = match cli.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => format!("{user}@users.noreply.github.com"),
        };

        let base = match cli.base.trim() {
            "" => DEFAULT_BASE_BRANCH.to_string(),
            base => base.to_string(),
        };

        Ok(Self {
            project_path,
            verbose: cli.verbose,
            publish: Some(PublishSettings {
                token,
                user,
                email,
                repository: RepositorySlug::parse(&repository)?,
                base,
                api_url: parse_api_url(&cli.api_url)?,
            }),
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.publish.is_none()
    }
}

fn required(value: &Option<String>, message: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(UpdaterError::MissingArgument(message.to_string())),
    }
}

fn parse_api_url(value: &str) -> Result<Url> {
    let value = if value.trim().is_empty() {
        DEFAULT_API_URL
    } else {
        value.trim()
    };

    let parsed = Url::parse(value)
        .map_err(|_| UpdaterError::InvalidArgument(format!("Invalid API URL: {value}")))?;

    match parsed.scheme() {
        "https" | "http" => Ok(parsed),
        scheme => Err(UpdaterError::InvalidArgument(format!(
            "Unsupported API URL scheme: {scheme}"
        ))),
    }
}
