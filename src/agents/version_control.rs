use crate::agents::project_scanner::MANIFEST_FILE;
use crate::config::PublishSettings;
use crate::error::Result;
use crate::process::{Invocation, ProcessRunner};
use jiff::Zoned;
use std::path::{Path, PathBuf};

const PUSH_REMOTE: &str = "github-url-with-token";
const COMMIT_MESSAGE: &str = "Run 'go get -u'";

/// VersionControlAgent handles the git side of an update run.
pub struct VersionControlAgent<'a> {
    runner: &'a dyn ProcessRunner,
    project_path: PathBuf,
}

impl<'a> VersionControlAgent<'a> {
    pub fn new<P: AsRef<Path>>(runner: &'a dyn ProcessRunner, project_path: P) -> Self {
        Self {
            runner,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Whether the working tree has a modified `go.mod` in the module directory
    pub fn manifest_changed(&self) -> Result<bool> {
        let output = self.git(&["diff", "--name-only", "--relative"])?;
        Ok(output.lines().any(|line| line.trim() == MANIFEST_FILE))
    }

    /// Restore the given files from the index (used after a dry run)
    pub fn discard_changes(&self, files: &[&str]) -> Result<()> {
        let mut args = vec!["checkout", "--"];
        args.extend_from_slice(files);
        self.git(&args)?;
        Ok(())
    }

    /// Commit `files` onto `branch` and push it to GitHub with the token remote
    pub fn publish_branch(
        &self,
        settings: &PublishSettings,
        branch: &str,
        files: &[&str],
    ) -> Result<()> {
        self.configure_push_remote(settings)?;

        self.git(&["config", "user.name", &settings.user])?;
        self.git(&["config", "user.email", &settings.email])?;

        let mut add = vec!["add", "--"];
        add.extend_from_slice(files);
        self.git(&add)?;

        self.git(&["commit", "-m", COMMIT_MESSAGE])?;
        self.git(&["branch", "-M", branch])?;
        self.git_with_secret(&["push", "-q", PUSH_REMOTE, branch], &settings.token)?;
        Ok(())
    }

    fn configure_push_remote(&self, settings: &PublishSettings) -> Result<()> {
        let remote_url = format!(
            "https://{}@github.com/{}/{}",
            settings.token, settings.repository.owner, settings.repository.name
        );

        let remotes = self.git(&["remote"])?;
        if remotes.lines().any(|r| r.trim() == PUSH_REMOTE) {
            self.git_with_secret(&["remote", "set-url", PUSH_REMOTE, &remote_url], &settings.token)?;
        } else {
            self.git_with_secret(&["remote", "add", PUSH_REMOTE, &remote_url], &settings.token)?;
        }
        Ok(())
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.runner
            .run_checked(&Invocation::new("git", args, &self.project_path))
    }

    /// Runs git with `secret` masked in logs and errors.
    fn git_with_secret(&self, args: &[&str], secret: &str) -> Result<String> {
        self.runner
            .run_checked(&Invocation::new("git", args, &self.project_path).secret(secret))
    }
}

/// Branch for an update started at `now`, e.g. `modules-update-2018-10-30-154210`.
pub fn branch_name(now: &Zoned) -> String {
    format!("modules-update-{}", now.strftime("%Y-%m-%d-%H%M%S"))
}
