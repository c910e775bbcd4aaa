// ABOUTME: Library root for sitepush - exposes the deploy pipeline for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod minify;
pub mod output;
pub mod process;
pub mod purge;
pub mod revision;
pub mod types;
