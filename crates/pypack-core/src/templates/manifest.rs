//! Template manifest types and parsing

use serde::{Deserialize, Serialize};

/// A template file and the path it renders to inside the new package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Template filename relative to the templates directory
    pub source: String,

    /// Output path relative to the package root (defaults to the source
    /// minus its template suffix if not specified)
    #[serde(default)]
    pub dest: Option<String>,
}

impl TemplateFile {
    /// Get the destination path (falls back to the source without its
    /// `.tmpl` suffix if dest not specified)
    pub fn destination(&self) -> &str {
        match &self.dest {
            Some(dest) => dest,
            None => self.source.strip_suffix(".tmpl").unwrap_or(&self.source),
        }
    }
}

/// Root template manifest (templates/template.yaml)
///
/// Lists the files rendered into every new package. Manifest order is the
/// render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the skeleton
    pub name: String,

    /// Description of what the skeleton provides
    pub description: String,

    /// Files to render, in order
    pub files: Vec<TemplateFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_strips_template_suffix() {
        let file = TemplateFile {
            source: "pyproject.toml.tmpl".to_string(),
            dest: None,
        };
        assert_eq!(file.destination(), "pyproject.toml");
    }

    #[test]
    fn test_destination_without_suffix_is_source() {
        let file = TemplateFile {
            source: "justfile".to_string(),
            dest: None,
        };
        assert_eq!(file.destination(), "justfile");
    }

    #[test]
    fn test_destination_explicit_dest_wins() {
        let file = TemplateFile {
            source: "gitignore.tmpl".to_string(),
            dest: Some(".gitignore".to_string()),
        };
        assert_eq!(file.destination(), ".gitignore");
    }

    #[test]
    fn test_parse_manifest_yaml() {
        let yaml = "\
name: python-package
description: src-layout Python package skeleton
files:
  - source: .gitignore.tmpl
  - source: LICENSE.tmpl
  - source: pyproject.toml.tmpl
";
        let manifest: TemplateManifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(manifest.name, "python-package");
        assert_eq!(manifest.files.len(), 3);
        assert_eq!(manifest.files[0].destination(), ".gitignore");
        assert_eq!(manifest.files[2].destination(), "pyproject.toml");
    }
}
