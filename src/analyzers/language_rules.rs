use crate::core::types::{Issue, Language};

/// Per-language rule set: syntax-level detection, style-level detection and
/// the deterministic repair rewrites. One implementation exists per
/// `Language` variant so the closed set stays exhaustively dispatched.
pub trait LanguageRules: Send + Sync {
    /// The language this rule set handles.
    fn language(&self) -> Language;

    /// Syntax-level findings. Everything returned here is an Error and
    /// counts against the quality score.
    fn critical_issues(&self, code: &str) -> Vec<Issue>;

    /// Idiom and maintainability findings. Warnings and Suggestions only;
    /// these never count as errors.
    fn style_issues(&self, code: &str) -> Vec<Issue>;

    /// Apply this language's ordered textual rewrites, appending one
    /// human-readable entry per applied change. Returns the rewritten text;
    /// a rewrite that changes nothing must log nothing.
    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String;
}

/// Rule set for unrecognized language hints: nothing to detect, nothing to
/// rewrite. Generic checks still run on top.
pub struct PlainRules;

impl LanguageRules for PlainRules {
    fn language(&self) -> Language {
        Language::Plain
    }

    fn critical_issues(&self, _code: &str) -> Vec<Issue> {
        Vec::new()
    }

    fn style_issues(&self, _code: &str) -> Vec<Issue> {
        Vec::new()
    }

    fn repair(&self, code: &str, _changes: &mut Vec<String>) -> String {
        code.to_string()
    }
}
