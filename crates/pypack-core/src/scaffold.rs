//! Package skeleton creation

use crate::context::Context;
use crate::templates::{render, TemplateManifest, TemplateStore};
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The destination package directory is already present. Nothing is
    /// created and nothing existing is touched.
    #[error("{} already exists", .0.display())]
    TargetExists(PathBuf),
}

/// Create `<code_root>/<package_name>` plus its `src/<package_name>` and
/// `tests` subtrees, with intermediate directories as needed.
///
/// This is the sole existence guard for the whole run; every later step
/// assumes the target tree is fresh.
pub async fn create_package_directories(
    code_root: &Path,
    package_name: &str,
) -> Result<PathBuf> {
    let package_root = code_root.join(package_name);

    if package_root.exists() {
        return Err(ScaffoldError::TargetExists(package_root).into());
    }

    let src_dir = package_root.join("src").join(package_name);
    fs::create_dir_all(&src_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", src_dir.display()))?;

    let tests_dir = package_root.join("tests");
    fs::create_dir_all(&tests_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", tests_dir.display()))?;

    Ok(package_root)
}

/// Render every manifest entry into the package root, in manifest order.
/// Returns the destinations written.
pub async fn render_files(
    store: &TemplateStore,
    manifest: &TemplateManifest,
    package_root: &Path,
    context: &Context,
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for file in &manifest.files {
        let template = store.load(&file.source)?;
        let output = render(&template, context)
            .with_context(|| format!("Failed to render {}", file.source))?;

        let target_path = package_root.join(file.destination());
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, output)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(file.destination().to_string());
    }

    Ok(written)
}

/// Touch the two empty `__init__.py` markers. Existing markers are left
/// alone, so calling this twice is safe.
pub async fn create_markers(package_root: &Path, package_name: &str) -> Result<()> {
    let markers = [
        package_root
            .join("src")
            .join(package_name)
            .join("__init__.py"),
        package_root.join("tests").join("__init__.py"),
    ];

    for marker in markers {
        if !marker.exists() {
            fs::write(&marker, b"")
                .await
                .with_context(|| format!("Failed to create marker: {}", marker.display()))?;
        }
    }

    Ok(())
}
