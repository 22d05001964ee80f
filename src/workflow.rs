use crate::agents::project_scanner::{CHECKSUM_FILE, MANIFEST_FILE, ProjectInfo};
use crate::agents::{GoModulesAgent, ProjectScannerAgent, VersionControlAgent, branch_name};
use crate::config::UpdaterConfig;
use crate::error::{Result, UpdaterError};
use crate::github::{CreatedPullRequest, NewPullRequest, PullRequestPublisher};
use crate::process::ProcessRunner;
use crate::report::{self, DiffEntry};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use jiff::Zoned;
use std::fs;
use std::time::Duration;

/// How an update run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate,
    DryRun {
        body: String,
    },
    Opened {
        branch: String,
        pull_request: CreatedPullRequest,
    },
}

/// Upgrade the module, then either print the pull request body (dry run)
/// or push a branch and open the pull request.
pub fn execute_update(
    config: &UpdaterConfig,
    runner: &dyn ProcessRunner,
    publisher: Option<&dyn PullRequestPublisher>,
    now: &Zoned,
) -> Result<UpdateOutcome> {
    println!("{}", "Updating Go modules...".cyan().bold());

    // Step 1: Validate project structure
    println!("\n{}", "1. Validating project structure...".yellow());
    let project_info = ProjectScannerAgent::new(&config.project_path).validate()?;
    println!("{}", "✓ Project structure is valid".green());

    let modules = GoModulesAgent::new(runner, &project_info.project_path);
    let git = VersionControlAgent::new(runner, &project_info.project_path);

    // Step 2: Capture the manifest before upgrading
    println!("\n{}", "2. Reading go.mod...".yellow());
    let before = modules.read_manifest()?;
    let before_snapshot = before.snapshot();
    if config.verbose {
        let indirect = before_snapshot.iter().filter(|d| d.indirect).count();
        eprintln!(
            "[VERBOSE] {} requires {} module(s), {} indirect",
            before.module.path,
            before_snapshot.len(),
            indirect
        );
    }

    let had_checksum = project_info.has_checksum();

    // Step 3: Upgrade
    println!("\n{}", "3. Running `go get -u`...".yellow());
    let spinner = upgrade_spinner(config.verbose);
    let upgraded = modules.upgrade();
    spinner.finish_and_clear();
    upgraded?;

    if !git.manifest_changed()? {
        println!("all modules are already up to date.");
        return Ok(UpdateOutcome::UpToDate);
    }

    // Step 4: Diff
    println!("\n{}", "4. Comparing module versions...".yellow());
    let after = modules.read_manifest()?;
    let entries = report::diff(&before_snapshot, &after.snapshot());
    let body = report::render(&entries);
    println!("   {}", change_summary(&entries));
    if config.verbose {
        for entry in &entries {
            eprintln!("[VERBOSE]   {}", entry.describe());
        }
    }

    let Some(settings) = &config.publish else {
        println!("\n{body}");
        restore_module_files(&git, &project_info, had_checksum)?;
        return Ok(UpdateOutcome::DryRun { body });
    };

    let files = project_info.tracked_files();

    let publisher = publisher.ok_or_else(|| {
        UpdaterError::InvalidArgument("no pull request publisher configured".to_string())
    })?;

    // Step 5: Branch, commit and push
    let branch = branch_name(now);
    println!("\n{}", "5. Pushing update branch...".yellow());
    git.publish_branch(settings, &branch, &files)?;
    println!("{}", format!("✓ Changes pushed to branch: {branch}").green());

    // Step 6: Pull request
    println!("\n{}", "6. Opening pull request...".yellow());
    let request = NewPullRequest {
        title: format!("modules update at {}", now.strftime("%Y-%m-%d %H:%M:%S")),
        head: format!("{}:{}", settings.repository.owner, branch),
        base: settings.base.clone(),
        body,
    };
    let pull_request = publisher.create_pull_request(&settings.repository, &request)?;

    println!(
        "\n{} {}",
        "✨ Pull request opened:".green().bold(),
        pull_request.html_url
    );
    Ok(UpdateOutcome::Opened {
        branch,
        pull_request,
    })
}

fn change_summary(entries: &[DiffEntry]) -> String {
    let added = entries.iter().filter(|e| e.is_added()).count();
    format!(
        "{} module(s) changed, {} added",
        entries.len() - added,
        added
    )
}

/// Puts `go.mod` and `go.sum` back as they were before the upgrade. A `go.sum`
/// created by the upgrade is not in the index, so it is deleted instead.
fn restore_module_files(
    git: &VersionControlAgent<'_>,
    project_info: &ProjectInfo,
    had_checksum: bool,
) -> Result<()> {
    if had_checksum {
        return git.discard_changes(&[MANIFEST_FILE, CHECKSUM_FILE]);
    }

    git.discard_changes(&[MANIFEST_FILE])?;
    if project_info.has_checksum() {
        fs::remove_file(project_info.checksum_path())?;
    }
    Ok(())
}

fn upgrade_spinner(verbose: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if verbose {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("upgrading dependencies");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
