//! CLI entry point for the feed architecture lint.
//!
//! Lints `<workspace>/feed` by default; pass a crate directory as the single
//! argument to lint another checkout.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let feed_dir = match std::env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => match repo_root() {
            Ok(root) => root.join("feed"),
            Err(err) => return report(&err),
        },
    };
    match architecture_lint::lint_feed_sources(&feed_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &dyn fmt::Display) -> ExitCode {
    let _ = writeln!(io::stderr().lock(), "{err}");
    ExitCode::FAILURE
}

#[derive(Debug, Clone, Copy)]
struct RepoRootError;

impl fmt::Display for RepoRootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unable to locate the workspace root; pass the feed crate directory explicitly")
    }
}

impl std::error::Error for RepoRootError {}

/// First directory, searching upwards from the cwd then this manifest, whose
/// `Cargo.toml` declares a workspace.
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let from_cwd = std::env::current_dir().ok();
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    from_cwd
        .as_deref()
        .and_then(find_workspace_root)
        .or_else(|| find_workspace_root(&from_manifest))
        .ok_or(RepoRootError)
}

fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Path::to_path_buf)
}

fn declares_workspace(manifest: &Path) -> bool {
    fs::read_to_string(manifest).is_ok_and(|contents| contents.contains("[workspace]"))
}
