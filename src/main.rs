// ABOUTME: Entry point for the sitepush CLI application.
// ABOUTME: Parses arguments, sets up tracing and runs the deploy pipeline.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use sitepush::config::Config;
use sitepush::deploy::{DeployOptions, Deployer};
use sitepush::error::Result;
use sitepush::output::Output;
use sitepush::process::ProcessRunner;
use sitepush::purge::CloudflarePurger;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        Output::new().error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Deploy { prod, open } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;

            let purger = CloudflarePurger::new(&config.cdn);
            let runner = ProcessRunner::new(&cwd);
            let mut deployer = Deployer::new(config, &cwd, runner, purger);

            let options = DeployOptions {
                production: prod,
                open,
            };
            deployer.deploy(options).await.map(|_| ())
        }
    }
}
