// ABOUTME: Resolves the revision label attached to each deploy.
// ABOUTME: Runs the configured describe command and validates its output.

use crate::error::Result;
use crate::process::CommandRunner;
use crate::types::{Revision, ToolCommand};

/// Describe the current checkout, e.g. `v1.2.0-4-g1a2b3c4-dirty`.
///
/// Fails if the describe command cannot run or exits non-zero; there is no
/// fallback label.
pub async fn resolve_revision<R>(runner: &R, describe: &ToolCommand) -> Result<Revision>
where
    R: CommandRunner + ?Sized,
{
    let stdout = runner.capture(describe).await?;
    let revision = Revision::parse(&stdout)?;
    tracing::info!("Resolved revision {}", revision);
    Ok(revision)
}
