use crate::analyzers::base::{append_missing_semicolons, TerminatorCheck};
use crate::analyzers::language_rules::LanguageRules;
use crate::core::types::{Issue, Language};

pub struct CRules;

const UNDEFINED_TOKENS: &[&str] = &["undefined_function", "undefined_variable"];

const DETECT_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &["#"],
    skip_containing: &["if", "for", "while", "switch", "struct", "enum", "typedef"],
    safe_endings: &[';', '{', '}', ':', ',', ')', '('],
    statement_markers: &[
        "int ", "char ", "float ", "double ", "return", "break", "continue",
    ],
};

const REPAIR_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &["#", "//", "/*", "*"],
    skip_containing: &[],
    safe_endings: &[';', '{', '}', ':', ','],
    statement_markers: &[
        "return ", "break", "continue", "int ", "char ", "float ", "double ",
    ],
};

/// Standard-library symbols whose include is inserted when missing. Checked
/// independently, in this order.
const REQUIRED_INCLUDES: &[(&str, &str)] = &[
    ("printf", "#include <stdio.h>"),
    ("malloc", "#include <stdlib.h>"),
    ("string", "#include <string.h>"),
];

impl LanguageRules for CRules {
    fn language(&self) -> Language {
        Language::C
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
                    "Undefined function/variable",
                    "Declare function or variable before use",
                ));
            }
        }
        issues
    }

    fn style_issues(&self, _code: &str) -> Vec<Issue> {
        Vec::new()
    }

    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String {
        let mut fixed = append_missing_semicolons(code, &REPAIR_CHECK, changes);
        for (symbol, include) in REQUIRED_INCLUDES {
            if fixed.contains(symbol) && !fixed.contains(include) {
                fixed = format!("{}\n{}", include, fixed);
                changes.push(format!("Added missing {}", include));
            }
        }
        fixed
    }
}
