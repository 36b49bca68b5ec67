pub mod google;
pub mod openrouter;

pub use google::GoogleProvider;
pub use openrouter::OpenRouterProvider;

use async_trait::async_trait;

use crate::core::types::{Issue, Language, RepairSource};
use crate::error::ProviderError;

/// An external service capable of returning a corrected version of the
/// snippet given an error summary. Both known providers implement the same
/// contract and are treated as interchangeable by the orchestrator.
#[async_trait]
pub trait RepairProvider: Send + Sync {
    /// Which slot of the audit trail this provider reports under.
    fn source(&self) -> RepairSource;

    /// Ask the service for corrected code. The returned text has any
    /// surrounding fence markup already stripped; it may be empty when the
    /// service declined to answer.
    async fn submit_repair(
        &self,
        code: &str,
        language: Language,
        error_summary: &str,
    ) -> Result<String, ProviderError>;
}

/// One line per known error, the shape both provider prompts embed.
pub fn error_summary(errors: &[Issue]) -> String {
    errors
        .iter()
        .map(|e| format!("Line {}: {}", e.line, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip a leading fence line (optionally carrying a language tag) and a
/// trailing line that is exactly a closing fence. Interior fences are left
/// alone; a reply that does not open with a fence passes through untouched.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let mut lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() <= 1 {
        return trimmed.to_string();
    }
    if lines.last().map(|l| l.trim() == "```").unwrap_or(false) {
        lines.pop();
    }
    lines.remove(0);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_one_error_per_line() {
        let errors = vec![
            Issue::critical_error(1, "Missing semicolon", "Add semicolon"),
            Issue::critical_error(4, "Unbalanced brackets/parens", "Fix balancing"),
        ];
        assert_eq!(
            error_summary(&errors),
            "Line 1: Missing semicolon\nLine 4: Unbalanced brackets/parens"
        );
    }

    #[test]
    fn fences_with_language_tag_are_stripped() {
        let reply = "```python\ndef foo():\n    return 1\n```";
        assert_eq!(strip_code_fences(reply), "def foo():\n    return 1");
    }

    #[test]
    fn bare_fences_are_stripped() {
        assert_eq!(strip_code_fences("```\nx = 1\n```"), "x = 1");
    }

    #[test]
    fn missing_closing_fence_only_drops_the_opener() {
        assert_eq!(strip_code_fences("```js\nlet x = 1;"), "let x = 1;");
    }

    #[test]
    fn interior_fences_survive() {
        let reply = "```\na\n```\nb\n```";
        assert_eq!(strip_code_fences(reply), "a\n```\nb");
    }

    #[test]
    fn unfenced_reply_passes_through_trimmed() {
        assert_eq!(strip_code_fences("  x = 1\n"), "x = 1");
    }
}
