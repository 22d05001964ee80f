use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ci-modules-update",
    about = "Run `go get -u` and open a pull request describing the module updates",
    version,
    author
)]
pub struct Cli {
    /// GitHub access token used to push the branch and open the pull request
    #[arg(long = "github-access-token", env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub github_access_token: Option<String>,

    /// Git user name for the update commit
    #[arg(short, long, env = "GIT_USER_NAME")]
    pub user: Option<String>,

    /// Git user email (defaults to <user>@users.noreply.github.com)
    #[arg(short, long, env = "GIT_USER_EMAIL")]
    pub email: Option<String>,

    /// Repository in owner/repo form
    #[arg(short, long, env = "REPOSITORY_URL")]
    pub repository: Option<String>,

    /// Only show the diff; nothing is committed, pushed or opened
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the Go module directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Base branch of the pull request
    #[arg(short, long, default_value = "master")]
    pub base: String,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
