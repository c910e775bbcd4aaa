// ABOUTME: Deploy orchestration: check, build, minify, describe, upload, purge.
// ABOUTME: Steps run strictly in order and the first failure aborts the rest.

use crate::config::{Config, DeployConfig, REVISION_PLACEHOLDER};
use crate::error::Result;
use crate::minify::minify_html;
use crate::output::Output;
use crate::process::CommandRunner;
use crate::purge::CachePurger;
use crate::revision::resolve_revision;
use crate::types::{Revision, ToolCommand};
use std::path::PathBuf;

/// Flags chosen by the invoker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Publish as the production release and purge the CDN afterwards.
    pub production: bool,
    /// Open the deployed site in a browser.
    pub open: bool,
}

/// What a successful deploy did.
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub revision: Revision,
    pub upload: ToolCommand,
    pub minified: usize,
    pub purged: bool,
}

/// Build the hosting provider's upload command for `revision`.
pub fn upload_command(
    config: &DeployConfig,
    revision: &Revision,
    options: DeployOptions,
) -> ToolCommand {
    let message = config
        .message
        .replace(REVISION_PLACEHOLDER, revision.as_str());
    let mut command = config.command.clone().arg("-m").arg(message);

    if options.production {
        command = command.arg(&config.prod_flag);
    }
    if options.open {
        command = command.arg(&config.open_flag);
    }

    command
}

/// Runs the full build-and-publish sequence for one project.
pub struct Deployer<R, P> {
    config: Config,
    project_dir: PathBuf,
    runner: R,
    purger: P,
    output: Output,
}

impl<R, P> Deployer<R, P>
where
    R: CommandRunner,
    P: CachePurger,
{
    pub fn new(config: Config, project_dir: impl Into<PathBuf>, runner: R, purger: P) -> Self {
        Self {
            config,
            project_dir: project_dir.into(),
            runner,
            purger,
            output: Output::new(),
        }
    }

    /// Check, build, minify and upload the site, purging the CDN on production deploys.
    ///
    /// Nothing is rolled back: a purge failure after a successful upload is
    /// still returned as an error.
    pub async fn deploy(&mut self, options: DeployOptions) -> Result<DeployReport> {
        self.output.start_timer();
        let commands = &self.config.commands;

        self.output.progress("  → Checking site...");
        self.runner.run(&commands.check).await?;

        self.output.progress("  → Building site...");
        self.runner.run(&commands.build).await?;

        let output_dir = self.project_dir.join(&self.config.output_dir);
        self.output.progress(&format!(
            "  → Minifying HTML in {}...",
            self.config.output_dir.display()
        ));
        let minified = minify_html(&self.runner, &commands.minify, &output_dir).await?;

        let revision = resolve_revision(&self.runner, &commands.describe).await?;
        if revision.is_dirty() {
            tracing::warn!("Deploying uncommitted changes ({})", revision);
        }

        let upload = upload_command(&self.config.deploy, &revision, options);
        self.output
            .progress(&format!("  → Uploading revision {}...", revision));
        self.runner.run(&upload).await?;

        let purged = if options.production {
            self.output.progress("  → Purging CDN cache...");
            self.purger.purge().await?;
            true
        } else {
            false
        };

        self.output.success(&format!("Deployed revision {}", revision));

        Ok(DeployReport {
            revision,
            upload,
            minified,
            purged,
        })
    }
}
