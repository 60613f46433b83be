//! Prompt defaults sourced from the process environment
//!
//! An untracked `.env` file in the working directory may pre-populate the
//! recognized variables; it is loaded best-effort and ignored when absent.
//! The loaded values live in an explicit struct handed to the workflow
//! rather than being re-read from the environment mid-run.

use std::path::{Path, PathBuf};

const FULL_NAME_ENV: &str = "FULL_NAME";
const EMAIL_ENV: &str = "EMAIL";
const GH_USERNAME_ENV: &str = "GH_USERNAME";
const CODE_ROOT_ENV: &str = "CODE_ROOT";

/// Default answers for the identity and location prompts.
#[derive(Debug, Clone)]
pub struct EnvDefaults {
    pub full_name: String,
    pub email: String,
    pub gh_username: String,
    pub code_root: PathBuf,
}

impl EnvDefaults {
    /// Load defaults, reading a local `.env` first if one exists.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    fn from_env() -> Self {
        Self {
            full_name: var_or_empty(FULL_NAME_ENV),
            email: var_or_empty(EMAIL_ENV),
            gh_username: var_or_empty(GH_USERNAME_ENV),
            code_root: std::env::var(CODE_ROOT_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_code_root()),
        }
    }
}

fn var_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

/// Parent of the install prefix, so a tool living at
/// `~/code/pypack/bin/pypack` suggests `~/code` as the place new packages
/// go. Falls back to the working directory.
fn default_code_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(|exe| exe.ancestors().nth(3))
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fields_flow_through() {
        // This test owns these variables; nothing else in the suite reads
        // or writes them.
        std::env::set_var(FULL_NAME_ENV, "Ada Lovelace");
        std::env::set_var(EMAIL_ENV, "ada@example.com");
        std::env::set_var(GH_USERNAME_ENV, "ada");
        std::env::set_var(CODE_ROOT_ENV, "/tmp/work");

        let defaults = EnvDefaults::from_env();
        assert_eq!(defaults.full_name, "Ada Lovelace");
        assert_eq!(defaults.email, "ada@example.com");
        assert_eq!(defaults.gh_username, "ada");
        assert_eq!(defaults.code_root, PathBuf::from("/tmp/work"));
    }

    #[test]
    fn test_default_code_root_is_some_path() {
        // Exact value depends on the install layout; it must at least be
        // non-empty.
        assert!(!default_code_root().as_os_str().is_empty());
    }
}
