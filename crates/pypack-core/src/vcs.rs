//! Git detection and repository initialization

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command as TokioCommand;

/// Check if git is installed and available in PATH
pub fn git_is_installed() -> bool {
    std::process::Command::new("which")
        .arg("git")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Get the installed git version (if available)
pub fn git_version() -> Option<String> {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Run `git init` against the new package path. A non-zero exit is fatal
/// and leaves already-created files in place.
pub async fn init_repository(package_root: &Path) -> Result<()> {
    println!(
        "{} {}",
        "Running:".dimmed(),
        format!("git init {}", package_root.display()).yellow()
    );

    let output = TokioCommand::new("git")
        .arg("init")
        .arg(package_root)
        .output()
        .await
        .context("Failed to launch git")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "git init failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(())
}
