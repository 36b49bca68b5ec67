pub mod base;
pub mod c;
pub mod cpp;
pub mod generic;
pub mod java;
pub mod javascript;
pub mod language_rules;
pub mod python;

pub use base::{bracket_balance_issue, TerminatorCheck};
pub use language_rules::{LanguageRules, PlainRules};

use crate::core::constants::limits;
use crate::core::types::{Issue, Language};

/// Static dispatch table over the closed language set.
pub fn rules_for(language: Language) -> &'static dyn LanguageRules {
    match language {
        Language::Python => &python::PythonRules,
        Language::JavaScript => &javascript::JAVASCRIPT_RULES,
        Language::TypeScript => &javascript::TYPESCRIPT_RULES,
        Language::Java => &java::JavaRules,
        Language::C => &c::CRules,
        Language::Cpp => &cpp::CppRules,
        Language::Plain => &PlainRules,
    }
}

/// Run every detector for `language` in fixed order: critical checks first,
/// per-language style checks second, generic checks last. Results are
/// concatenated in detection order and truncated to the issue cap.
pub fn find_issues(code: &str, language: Language) -> Vec<Issue> {
    let rules = rules_for(language);
    let mut issues = rules.critical_issues(code);
    issues.extend(rules.style_issues(code));
    issues.extend(generic::generic_issues(code, language));
    issues.truncate(limits::MAX_ISSUES);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_list_is_capped_at_one_hundred() {
        // every line is a missing-semicolon error
        let code = "int x = 1\n".repeat(150);
        let issues = find_issues(&code, Language::C);
        assert_eq!(issues.len(), limits::MAX_ISSUES);
    }

    #[test]
    fn critical_issues_precede_style_issues() {
        let code = "let x = 1\nif (x == 2) { x = 3; }";
        let issues = find_issues(code, Language::JavaScript);
        let first_error = issues.iter().position(|i| i.is_error());
        let first_style = issues.iter().position(|i| !i.is_error());
        assert!(first_error.unwrap() < first_style.unwrap());
    }

    #[test]
    fn plain_language_only_gets_generic_issues() {
        let code = "var x == 1\nint y = 2\nprint(z);";
        assert!(find_issues(code, Language::Plain).is_empty());
    }
}
