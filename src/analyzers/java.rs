use crate::analyzers::base::{
    append_missing_semicolons, TerminatorCheck, JAVA_STRING_EQ_RE,
};
use crate::analyzers::language_rules::LanguageRules;
use crate::core::types::{Issue, Language};

pub struct JavaRules;

const UNDEFINED_TOKENS: &[&str] = &["undefined_method", "undefined_variable"];

/// Detection side: structural keywords anywhere on the line exempt it, and a
/// trailing `(`/`)` counts as continuation.
const DETECT_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &[],
    skip_containing: &[
        "if", "for", "while", "switch", "class", "interface", "try", "catch",
    ],
    safe_endings: &[';', '{', '}', ':', ',', ')', '('],
    statement_markers: &[
        "int ", "String ", "boolean ", "double ", "float ", "char ", "return", "break",
        "continue",
    ],
};

/// Repair side: comment and declaration prefixes exempt the line instead.
const REPAIR_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &[
        "//", "/*", "*", "public", "private", "protected", "class", "interface", "enum",
    ],
    skip_containing: &[],
    safe_endings: &[';', '{', '}', ':', ','],
    statement_markers: &["return ", "System.out", "break", "continue", "throw"],
};

impl LanguageRules for JavaRules {
    fn language(&self) -> Language {
        Language::Java
    }

    fn critical_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if DETECT_CHECK.lacks_terminator(trimmed) {
                issues.push(Issue::critical_error(
                    line_no,
                    "Missing semicolon",
                    "Add semicolon at end of statement",
                ));
            }
            if UNDEFINED_TOKENS.iter().any(|t| trimmed.contains(t)) {
                issues.push(Issue::critical_error(
                    line_no,
                    "Undefined method/variable",
                    "Declare or import required definition",
                ));
            }
        }
        issues
    }

    fn style_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            if line.contains("==") && !line.contains("equals(") && !line.contains("!=") {
                issues.push(Issue::suggestion(
                    idx as u32 + 1,
                    "Use .equals() for string comparison",
                    "Replace == with .equals() for strings",
                ));
            }
        }
        issues
    }

    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String {
        let mut fixed = code.to_string();

        let rewritten = JAVA_STRING_EQ_RE
            .replace_all(&fixed, "$1.equals(\"$2\")")
            .into_owned();
        if rewritten != fixed {
            fixed = rewritten;
            changes.push("Replaced == with .equals() for strings".to_string());
        }

        append_missing_semicolons(&fixed, &REPAIR_CHECK, changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_without_semicolon_is_critical() {
        let issues = JavaRules.critical_issues("int x = 1\n");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].message, "Missing semicolon");
    }

    #[test]
    fn control_flow_lines_are_exempt() {
        let issues = JavaRules.critical_issues("if (x > 1) {\n    return x;\n}\n");
        assert!(issues.is_empty());
    }

    #[test]
    fn string_equality_is_a_suggestion() {
        let issues = JavaRules.style_issues("if (name == \"bob\") {}\n");
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn repair_rewrites_string_equality_to_equals() {
        let mut changes = Vec::new();
        let fixed = JavaRules.repair("boolean ok = name == \"bob\";", &mut changes);
        assert!(fixed.contains("name.equals(\"bob\")"));
        assert_eq!(changes, vec!["Replaced == with .equals() for strings"]);
    }

    #[test]
    fn repair_appends_semicolon_to_println() {
        let mut changes = Vec::new();
        let fixed = JavaRules.repair("System.out.println(x)\n", &mut changes);
        assert!(fixed.starts_with("System.out.println(x);"));
        assert_eq!(changes, vec!["Added missing semicolon"]);
    }
}
