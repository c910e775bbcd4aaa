// ABOUTME: Validated domain types shared across the deploy pipeline.
// ABOUTME: Revision labels and external tool commands.

mod revision;
mod tool_command;

pub use revision::{DIRTY_SUFFIX, Revision, RevisionError};
pub use tool_command::{PATH_PLACEHOLDER, ToolCommand, ToolCommandError};
