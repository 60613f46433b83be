//! Template loading from the on-disk template directory
//!
//! The directory is resolved in order: explicit `--template-dir` flag,
//! the `PYPACK_TEMPLATE_DIR` environment variable, then the installed
//! layout (`<prefix>/templates` next to the executable's directory) with
//! a final fallback to `./templates`.

use super::manifest::TemplateManifest;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "PYPACK_TEMPLATE_DIR";

const MANIFEST_FILE: &str = "template.yaml";

/// Handle to the directory the shipped templates live in
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the template directory from flag, environment, or the
    /// install layout.
    pub fn discover(override_dir: &Option<PathBuf>) -> Result<Self> {
        let root = match override_dir {
            Some(dir) => dir.clone(),
            None => match std::env::var(TEMPLATE_DIR_ENV) {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => default_template_root(),
            },
        };

        if !root.is_dir() {
            anyhow::bail!("Template directory not found: {}", root.display());
        }

        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse `template.yaml` from the template directory.
    pub fn load_manifest(&self) -> Result<TemplateManifest> {
        let manifest_path = self.root.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))
    }

    /// Read the full text of one template file.
    pub fn load(&self, name: &str) -> Result<String> {
        let template_path = self.root.join(name);
        std::fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read template {}", template_path.display()))
    }
}

/// Installed layout: `<prefix>/bin/pypack` with templates at
/// `<prefix>/templates`. Falls back to `templates` under the working
/// directory for checkouts run via cargo.
fn default_template_root() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(prefix) = exe.parent().and_then(Path::parent) {
            let candidate = prefix.join("templates");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("templates")
}
