//! Render context assembled once per creation run

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Validated answers for one package creation run.
#[derive(Debug, Clone)]
pub struct PackageSpec {
    pub package_name: String,
    pub package_version: String,
    pub description: String,
    pub full_name: String,
    pub email: String,
    pub gh_username: String,
    pub code_root: PathBuf,
}

/// Key-value mapping used to fill template placeholders.
///
/// Built once from the prompt answers plus computed values, then read-only
/// while rendering. Every placeholder a template references must have an
/// entry here or rendering fails.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the full placeholder set for a run. The year is passed in
    /// rather than read from the clock so assembly stays deterministic.
    pub fn from_spec(spec: &PackageSpec, year: i32) -> Self {
        let mut context = Self::new();
        context.set("PACKAGE_NAME", &spec.package_name);
        context.set("PACKAGE_VERSION", &spec.package_version);
        context.set("DESCRIPTION", &spec.description);
        context.set("FULL_NAME", &spec.full_name);
        context.set("EMAIL", &spec.email);
        context.set("GH_USERNAME", &spec.gh_username);
        context.set("CODE_ROOT", spec.code_root.to_string_lossy());
        context.set("YEAR", year.to_string());
        context
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_spec() -> PackageSpec {
        PackageSpec {
            package_name: "demo".to_string(),
            package_version: "0.1.0".to_string(),
            description: "".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            gh_username: "ada".to_string(),
            code_root: PathBuf::from("/tmp/work"),
        }
    }

    #[test]
    fn test_from_spec_covers_all_placeholders() {
        let context = Context::from_spec(&demo_spec(), 2026);

        for key in [
            "PACKAGE_NAME",
            "PACKAGE_VERSION",
            "DESCRIPTION",
            "FULL_NAME",
            "EMAIL",
            "GH_USERNAME",
            "CODE_ROOT",
            "YEAR",
        ] {
            assert!(context.get(key).is_some(), "missing {}", key);
        }

        assert_eq!(context.get("PACKAGE_NAME"), Some("demo"));
        assert_eq!(context.get("YEAR"), Some("2026"));
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let context = Context::from_spec(&demo_spec(), 2026);
        assert_eq!(context.get("NOT_A_KEY"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut context = Context::new();
        context.set("KEY", "one");
        context.set("KEY", "two");
        assert_eq!(context.get("KEY"), Some("two"));
    }
}
