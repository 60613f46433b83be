//! Flat placeholder substitution
//!
//! Templates contain `{PLACEHOLDER}` tokens. A token is an opening brace,
//! an uppercase ASCII identifier, and a closing brace; anything else is
//! literal text, so justfile `{{var}}` interpolation and TOML inline
//! tables pass through untouched. Substitution is single-pass with no
//! conditional or loop syntax.

use crate::context::Context;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A template referenced a placeholder the context does not define.
    /// Templates and context are shipped together, so this is a
    /// programming error rather than user input gone wrong.
    #[error("template references {{{0}}} but the context has no such key")]
    MissingKey(String),
}

/// Substitute every placeholder occurrence in `template` from `context`.
pub fn render(template: &str, context: &Context) -> Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let key = &after[..close];
                match context.get(key) {
                    Some(value) => output.push_str(value),
                    None => return Err(RenderError::MissingKey(key.to_string())),
                }
                rest = &after[close + 1..];
            }
            _ => {
                // Not a token, keep the brace as literal text
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    Ok(output)
}

fn is_placeholder_name(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        let mut context = Context::new();
        context.set("PACKAGE_NAME", "demo");
        context.set("PACKAGE_VERSION", "0.1.0");
        context.set("YEAR", "2026");
        context
    }

    #[test]
    fn test_substitutes_every_occurrence() {
        let rendered = render("{PACKAGE_NAME} v{PACKAGE_VERSION} ({PACKAGE_NAME})", &context()).unwrap();
        assert_eq!(rendered, "demo v0.1.0 (demo)");
    }

    #[test]
    fn test_literal_text_preserved_verbatim() {
        let template = "name = \"{PACKAGE_NAME}\"\n# plain line\n";
        let rendered = render(template, &context()).unwrap();
        assert_eq!(rendered, "name = \"demo\"\n# plain line\n");
    }

    #[test]
    fn test_no_tokens_left_after_render() {
        let rendered = render("{PACKAGE_NAME}-{YEAR}", &context()).unwrap();
        assert!(!rendered.contains('{'));
        assert!(!rendered.contains('}'));
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let err = render("hello {GH_USERNAME}", &context()).unwrap_err();
        match err {
            RenderError::MissingKey(key) => assert_eq!(key, "GH_USERNAME"),
        }
    }

    #[test]
    fn test_non_token_braces_are_literal() {
        // Lowercase interpolation (justfile style) and inline tables are
        // not placeholder tokens.
        let template = "echo {{version}} and { text = \"MIT\" } and {not_a_token}";
        let rendered = render(template, &context()).unwrap();
        assert_eq!(rendered, template);
    }

    #[test]
    fn test_token_inside_inline_table() {
        let template = "license = { text = \"{PACKAGE_NAME}\" }";
        let rendered = render(template, &context()).unwrap();
        assert_eq!(rendered, "license = { text = \"demo\" }");
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        let rendered = render("dangling {PACKAGE", &context()).unwrap();
        assert_eq!(rendered, "dangling {PACKAGE");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render("", &context()).unwrap(), "");
    }
}
