//! Presence checks deciding whether a style block needs the generator at all.
//!
//! These only detect usage. Validating the syntax is the style transformer's job.

use regex::Regex;
use std::sync::OnceLock;

use crate::options::ApplyVariables;

/// Result of scanning a style block for apply directives
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyCheck {
    pub has_apply: bool,
    /// Property names that count as apply directives for this block
    pub apply_variables: Vec<String>,
}

/// Look for `@apply` or any configured apply property in `content`
pub fn check_for_apply(content: &str, variables: Option<&ApplyVariables>) -> ApplyCheck {
    let apply_variables = ApplyVariables::resolve(variables);
    let has_apply = content.contains("@apply")
        || apply_variables.iter().any(|v| content.contains(v.as_str()));

    ApplyCheck {
        has_apply,
        apply_variables,
    }
}

fn theme_re() -> &'static Regex {
    static THEME_RE: OnceLock<Regex> = OnceLock::new();
    THEME_RE.get_or_init(|| {
        Regex::new(r#"theme\(\s*(?:"[^"]*"|'[^']*'|[^\s)'"][^)]*)\s*\)"#).expect("theme regex is valid")
    })
}

/// Whether `content` calls the `theme()` function, quoted or not
pub fn has_theme_fn(content: &str) -> bool {
    theme_re().is_match(content)
}
