mod agents;
mod cli;
mod config;
mod error;
mod github;
mod gomod;
mod process;
mod report;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::UpdaterConfig;
use error::Result;
use github::{GitHubClient, PullRequestPublisher};
use jiff::Zoned;
use process::SystemRunner;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = UpdaterConfig::from_cli(cli)?;
    let runner = SystemRunner::new(config.verbose);

    if config.is_dry_run() {
        println!("{}", "Dry run: nothing will be pushed".dimmed());
    }

    let client = match &config.publish {
        Some(settings) => Some(GitHubClient::new(
            settings.api_url.clone(),
            &settings.token,
            config.verbose,
        )?),
        None => None,
    };
    let publisher = client.as_ref().map(|c| c as &dyn PullRequestPublisher);

    workflow::execute_update(&config, &runner, publisher, &Zoned::now())?;
    Ok(())
}
