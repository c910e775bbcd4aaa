// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: A single deploy subcommand with production and open flags.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sitepush")]
#[command(about = "Build, minify and publish a static site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check, build, minify and deploy the site
    Deploy {
        /// Deploy to production and purge the CDN cache
        #[arg(long)]
        prod: bool,

        /// Open the deployment in a browser
        #[arg(long)]
        open: bool,
    },
}
