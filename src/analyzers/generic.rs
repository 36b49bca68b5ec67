use crate::analyzers::base::SNAKE_CASE_RE;
use crate::core::constants::limits;
use crate::core::types::{Issue, Language, Severity};

/// Language-agnostic checks, always run last.
pub fn generic_issues(code: &str, language: Language) -> Vec<Issue> {
    let mut issues = Vec::new();

    let non_empty_lines = code.lines().filter(|l| !l.trim().is_empty()).count();
    if !code.is_empty() && non_empty_lines > limits::LARGE_FILE_LINES {
        issues.push(Issue::warning(
            1,
            Severity::Major,
            "Very large file",
            "Consider splitting into smaller modules",
        ));
    }

    if language.is_ecmascript() && SNAKE_CASE_RE.is_match(code) {
        issues.push(Issue::suggestion(
            1,
            "snake_case found in JS/TS",
            "Use camelCase for variables",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_file_warning_counts_non_empty_lines() {
        let just_under: String = "x = 1\n".repeat(200);
        assert!(generic_issues(&just_under, Language::Python).is_empty());

        let over: String = "x = 1\n".repeat(201);
        let issues = generic_issues(&over, Language::Python);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Very large file");

        // blank lines do not count toward the threshold
        let padded = format!("{}{}", "\n".repeat(500), "x = 1\n".repeat(200));
        assert!(generic_issues(&padded, Language::Python).is_empty());
    }

    #[test]
    fn snake_case_only_flagged_for_ecmascript() {
        let code = "let user_name = 1;";
        assert_eq!(generic_issues(code, Language::JavaScript).len(), 1);
        assert_eq!(generic_issues(code, Language::TypeScript).len(), 1);
        assert!(generic_issues(code, Language::Python).is_empty());
        assert!(generic_issues(code, Language::Plain).is_empty());
    }
}
