// ABOUTME: In-place minification of the generated HTML.
// ABOUTME: Walks the output directory and runs the minifier once per file.

use crate::error::{Error, Result};
use crate::process::CommandRunner;
use crate::types::ToolCommand;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Every HTML file under `dir`, sorted by path. Hidden entries are skipped.
pub fn find_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::OutputDirMissing(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Minify every HTML file under `dir` in place and return how many were processed.
///
/// Stops at the first failing file. Files already rewritten are left as they are.
pub async fn minify_html<R>(runner: &R, template: &ToolCommand, dir: &Path) -> Result<usize>
where
    R: CommandRunner + ?Sized,
{
    let files = find_html_files(dir)?;
    tracing::debug!("Minifying {} HTML file(s) under {}", files.len(), dir.display());

    for file in &files {
        let command = template.fill(file);
        runner.run(&command).await?;
    }

    Ok(files.len())
}
