use crate::analyzers::base::{
    append_missing_closers, append_missing_semicolons, bracket_balance_issue,
    strengthen_equality, TerminatorCheck, JS_LOOP_RE, VAR_RE,
};
use crate::analyzers::language_rules::LanguageRules;
use crate::core::types::{Issue, Language, Severity};

/// JavaScript and TypeScript share one rule set; only the language tag
/// differs.
pub struct EcmaRules {
    language: Language,
}

pub static JAVASCRIPT_RULES: EcmaRules = EcmaRules {
    language: Language::JavaScript,
};

pub static TYPESCRIPT_RULES: EcmaRules = EcmaRules {
    language: Language::TypeScript,
};

/// Placeholder tokens the naive undefined-symbol check looks for.
const UNDEFINED_TOKENS: &[&str] = &["undefined_variable", "some_undefined_function"];

const SEMICOLON_CHECK: TerminatorCheck = TerminatorCheck {
    skip_prefixes: &[
        "//", "/*", "*", "function", "if", "for", "while", "switch", "try", "catch", "else",
    ],
    skip_containing: &[],
    safe_endings: &[';', '{', '}', ':', ',', ')'],
    statement_markers: &[
        "const ", "let ", "var ", "return ", "break", "continue", "throw",
    ],
};

impl LanguageRules for EcmaRules {
    fn language(&self) -> Language {
        self.language
    }

    fn critical_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        if let Some(issue) = bracket_balance_issue(code) {
            issues.push(issue);
        }

        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if UNDEFINED_TOKENS.iter().any(|t| trimmed.contains(t)) {
                issues.push(Issue::critical_error(
                    line_no,
                    "Undefined variable/function",
                    "Define variable or import required module",
                ));
            }
            if trimmed.contains("function ") && !trimmed.ends_with('{') && !trimmed.contains("=>")
            {
                issues.push(Issue::critical_error(
                    line_no,
                    "Function declaration syntax error",
                    "Add opening brace or fix function syntax",
                ));
            }
        }

        for (idx, line) in code.lines().enumerate() {
            let trimmed = line.trim();
            if SEMICOLON_CHECK.lacks_terminator(trimmed) {
                issues.push(Issue::critical_error(
                    idx as u32 + 1,
                    "Missing semicolon",
                    "Add semicolon at end of statement",
                ));
            }
        }
        issues
    }

    fn style_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            if line.contains("==") && !line.contains("===") && !line.contains("!=") {
                issues.push(Issue::suggestion(
                    line_no,
                    "Use strict equality (===)",
                    "Replace == with ===",
                ));
            }
            if VAR_RE.is_match(line) {
                issues.push(Issue::suggestion(line_no, "Avoid var", "Use let or const"));
            }
        }
        if JS_LOOP_RE.is_match(code) {
            issues.push(Issue::warning(
                1,
                Severity::Major,
                "Traditional for loop detected",
                "Consider array methods like map/filter/reduce",
            ));
        }
        issues
    }

    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String {
        let mut fixed = code.to_string();

        if VAR_RE.is_match(&fixed) {
            fixed = VAR_RE.replace_all(&fixed, "let").into_owned();
            changes.push("Replaced var with let".to_string());
        }

        let strengthened = strengthen_equality(&fixed);
        if strengthened != fixed {
            fixed = strengthened;
            changes.push("Replaced == with ===".to_string());
        }

        fixed = append_missing_closers(&fixed, changes);
        append_missing_semicolons(&fixed, &SEMICOLON_CHECK, changes)
    }
}
