use crate::analyzers::rules_for;
use crate::core::types::Language;

/// Output of the deterministic repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicFix {
    pub fixed_code: String,
    pub changes: Vec<String>,
}

/// Apply the language's ordered textual rewrites, then strip trailing
/// whitespace from every line. Every applied rewrite appends one entry to
/// the change log; a rewrite that leaves the text byte-identical logs
/// nothing. The caller decides whether the result is good enough by
/// re-running the issue engine on it.
pub fn repair(code: &str, language: Language) -> HeuristicFix {
    let mut changes = Vec::new();
    let rewritten = rules_for(language).repair(code, &mut changes);
    let fixed_code = strip_trailing_whitespace(&rewritten);
    HeuristicFix {
        fixed_code,
        changes,
    }
}

fn strip_trailing_whitespace(code: &str) -> String {
    code.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_whitespace_is_stripped_from_every_line() {
        let fix = repair("let x = 1;  \nlet y = 2;\t", Language::JavaScript);
        assert_eq!(fix.fixed_code, "let x = 1;\nlet y = 2;");
        // whitespace cleanup alone is not an applied rewrite
        assert!(fix.changes.is_empty());
    }

    #[test]
    fn plain_language_never_rewrites() {
        let fix = repair("anything goes here", Language::Plain);
        assert_eq!(fix.fixed_code, "anything goes here");
        assert!(fix.changes.is_empty());
    }

    #[test]
    fn javascript_fix_resolves_missing_semicolons() {
        let fix = repair("let x = 1\nlet y = 2", Language::JavaScript);
        assert_eq!(fix.fixed_code, "let x = 1;\nlet y = 2;");
        assert_eq!(fix.changes.len(), 2);
    }
}
