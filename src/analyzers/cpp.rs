use crate::analyzers::base::{append_missing_semicolons, TerminatorCheck};
use crate::analyzers::language_rules::LanguageRules;
use crate::core::types::{Issue, Language};

pub struct CppRules;

const UNDEFINED_TOKENS: &[&str] = &["undefined_function", "undefined_variable"];

const DETECT_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &["#"],
    skip_containing: &["if", "for", "while", "switch", "class", "struct", "namespace"],
    safe_endings: &[';', '{', '}', ':', ',', ')', '('],
    statement_markers: &[
        "int ", "char ", "float ", "double ", "bool ", "string ", "auto ", "return",
    ],
};

const REPAIR_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &[
        "#", "//", "/*", "*", "class", "struct", "namespace", "public:", "private:",
        "protected:",
    ],
    skip_containing: &[],
    safe_endings: &[';', '{', '}', ':', ','],
    statement_markers: &["return ", "cout", "cin", "break", "continue", "throw"],
};

impl LanguageRules for CppRules {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn critical_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
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
                    "Undefined function/variable",
                    "Declare or include required definition",
                ));
            }
        }
        issues
    }

    fn style_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            if line.contains("==") && !line.contains("!=") && !line.contains("std::") {
                issues.push(Issue::suggestion(
                    idx as u32 + 1,
                    "Consider using std::equal for complex comparisons",
                    "Use std::equal for complex types",
                ));
            }
        }
        issues
    }

    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String {
        let mut fixed = append_missing_semicolons(code, &REPAIR_CHECK, changes);
        // iostream wins when both stream and stdio symbols appear
        if fixed.contains("cout") && !fixed.contains("#include <iostream>") {
            fixed = format!("#include <iostream>\n{}", fixed);
            changes.push("Added missing #include <iostream>".to_string());
        } else if fixed.contains("printf") && !fixed.contains("#include <cstdio>") {
            fixed = format!("#include <cstdio>\n{}", fixed);
            changes.push("Added missing #include <cstdio>".to_string());
        }
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cout_statement_without_semicolon_is_repaired() {
        let mut changes = Vec::new();
        let fixed = CppRules.repair("cout << x\n", &mut changes);
        assert!(fixed.contains("cout << x;"));
        assert!(fixed.starts_with("#include <iostream>\n"));
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn return_without_semicolon_is_critical() {
        let issues = CppRules.critical_issues("int f() {\nreturn 1\n}\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[0].message, "Missing semicolon");
    }

    #[test]
    fn equality_without_std_is_a_minor_suggestion() {
        let issues = CppRules.style_issues("if (a == b) {}\n");
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
