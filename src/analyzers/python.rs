use tree_sitter::{Node, Parser};

use crate::analyzers::base::PY_LOOP_RE;
use crate::analyzers::language_rules::LanguageRules;
use crate::core::types::{Issue, Language, Severity};

/// Python is the one language validated with a real parser. Whole-document
/// faults surface as Critical Errors at their reported line; a secondary
/// line-by-line re-parse runs only when the document-level pass found
/// something, and is a known noise source for multi-line constructs (a line
/// re-parsed out of context can fail alone).
pub struct PythonRules;

impl PythonRules {
    fn parser() -> Option<Parser> {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_python::language()).ok()?;
        Some(parser)
    }

    /// 1-based lines of the top-most error/missing nodes, deduplicated so a
    /// cascading fault does not flood the issue cap.
    fn syntax_fault_lines(parser: &mut Parser, code: &str) -> Vec<(u32, String)> {
        let tree = match parser.parse(code, None) {
            Some(tree) => tree,
            None => return Vec::new(),
        };
        if !tree.root_node().has_error() {
            return Vec::new();
        }
        let mut faults = Vec::new();
        collect_faults(tree.root_node(), &mut faults);
        if faults.is_empty() {
            // has_error() with no visible error node: pin to line 1
            faults.push((1, "SyntaxError: invalid syntax".to_string()));
        }
        faults.dedup_by_key(|(line, _)| *line);
        faults
    }

    fn line_parses(parser: &mut Parser, line: &str) -> bool {
        match parser.parse(line, None) {
            Some(tree) => !tree.root_node().has_error(),
            None => false,
        }
    }
}

fn collect_faults(node: Node, faults: &mut Vec<(u32, String)>) {
    if node.is_error() {
        faults.push((
            node.start_position().row as u32 + 1,
            "SyntaxError: invalid syntax".to_string(),
        ));
        return;
    }
    if node.is_missing() {
        faults.push((
            node.start_position().row as u32 + 1,
            format!("SyntaxError: missing {}", node.kind()),
        ));
        return;
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_faults(child, faults);
    }
}

impl LanguageRules for PythonRules {
    fn language(&self) -> Language {
        Language::Python
    }

    fn critical_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut parser = match Self::parser() {
            Some(parser) => parser,
            None => return issues,
        };

        let faults = Self::syntax_fault_lines(&mut parser, code);
        if faults.is_empty() {
            return issues;
        }
        for (line, message) in faults {
            issues.push(Issue::critical_error(line, message, "Fix Python syntax"));
        }

        // Whole-document parsing found something: re-check each line in
        // isolation to surface faults hidden behind the first one.
        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            if line.trim().is_empty() {
                continue;
            }
            if issues.iter().any(|issue| issue.line == line_no) {
                continue;
            }
            if !Self::line_parses(&mut parser, line) {
                issues.push(Issue::critical_error(
                    line_no,
                    "Potential syntax error",
                    "Check line syntax",
                ));
            }
        }
        issues
    }

    fn style_issues(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        let uses_logging = code.contains("logging");
        for (idx, line) in code.lines().enumerate() {
            let line_no = idx as u32 + 1;
            if line.trim_end().ends_with(';') {
                issues.push(Issue::suggestion(
                    line_no,
                    "Unnecessary semicolon",
                    "Remove trailing ; in Python",
                ));
            }
            if line.contains("print(") && !uses_logging {
                issues.push(Issue::warning(
                    line_no,
                    Severity::Minor,
                    "print used for logging",
                    "Use the logging module for production",
                ));
            }
        }
        if PY_LOOP_RE.is_match(code) && code.contains("range(") {
            issues.push(Issue::warning(
                1,
                Severity::Major,
                "Manual index loop",
                "Prefer list comprehensions",
            ));
        }
        issues
    }

    fn repair(&self, code: &str, changes: &mut Vec<String>) -> String {
        let mut fixed = strip_trailing_semicolons(code, changes);
        fixed = append_missing_colons(&fixed, changes);
        fixed = indent_after_block_openers(&fixed, changes);
        fixed
    }
}

const BLOCK_KEYWORDS: &[&str] = &[
    "if", "for", "while", "def", "class", "elif", "else", "except", "finally", "with",
];

fn strip_trailing_semicolons(code: &str, changes: &mut Vec<String>) -> String {
    let mut lines = Vec::new();
    for line in code.split('\n') {
        if line.trim_end().ends_with(';') {
            changes.push("Removed trailing semicolon".to_string());
            lines.push(line.trim_end().trim_end_matches(';').to_string());
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// A block-keyword line whose remainder is colon-free gets its `:` appended.
fn append_missing_colons(code: &str, changes: &mut Vec<String>) -> String {
    let mut lines = Vec::new();
    for line in code.split('\n') {
        let trimmed = line.trim_start();
        let keyword = BLOCK_KEYWORDS.iter().find(|kw| {
            trimmed
                .strip_prefix(**kw)
                .map(|rest| rest.starts_with(char::is_whitespace) && !rest.trim().is_empty())
                .unwrap_or(false)
        });
        let needs_colon = keyword.is_some() && !trimmed.contains(':');
        if needs_colon {
            lines.push(format!("{}:", line.trim_end()));
        } else {
            lines.push(line.to_string());
        }
    }
    let fixed = lines.join("\n");
    if fixed != code {
        changes.push("Added missing colons".to_string());
    }
    fixed
}

/// A column-zero definition line directly under a `:`-terminated line is
/// assumed to belong to that block and gets one indent level.
fn indent_after_block_openers(code: &str, changes: &mut Vec<String>) -> String {
    let mut lines: Vec<String> = code.split('\n').map(str::to_string).collect();
    for i in 1..lines.len() {
        let line = &lines[i];
        let looks_like_definition = !line.trim().is_empty()
            && !line.starts_with(' ')
            && ["def ", "class ", "if ", "for ", "while "]
                .iter()
                .any(|kw| line.contains(kw));
        if looks_like_definition && lines[i - 1].trim().ends_with(':') {
            lines[i] = format!("    {}", lines[i]);
            changes.push("Fixed indentation".to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::language_rules::LanguageRules;

    #[test]
    fn valid_python_has_no_critical_issues() {
        let issues = PythonRules.critical_issues("def foo():\n    return 1\n");
        assert!(issues.is_empty());
    }

    #[test]
    fn broken_python_yields_critical_error() {
        let issues = PythonRules.critical_issues("def foo(:\n    return 1\n");
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.is_error()));
    }

    #[test]
    fn trailing_semicolon_is_a_minor_suggestion() {
        let issues = PythonRules.style_issues("x = 1;\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Unnecessary semicolon");
    }

    #[test]
    fn print_warning_suppressed_when_logging_present() {
        let with_logging = "import logging\nprint(1)\n";
        assert!(PythonRules.style_issues(with_logging).is_empty());
        let without = "print(1)\n";
        assert_eq!(PythonRules.style_issues(without).len(), 1);
    }

    #[test]
    fn indexed_loop_warns_once_at_line_one() {
        let code = "for i in range(10):\n    print(items[i])\n";
        let issues = PythonRules.style_issues(code);
        let loop_warnings: Vec<_> = issues
            .iter()
            .filter(|i| i.message == "Manual index loop")
            .collect();
        assert_eq!(loop_warnings.len(), 1);
        assert_eq!(loop_warnings[0].line, 1);
    }

    #[test]
    fn repair_strips_semicolons_and_adds_colons() {
        let mut changes = Vec::new();
        let fixed = PythonRules.repair("x = 1;\ndef foo()\n    return x\n", &mut changes);
        assert!(fixed.contains("x = 1\n"));
        assert!(fixed.contains("def foo():"));
        assert!(changes.iter().any(|c| c == "Removed trailing semicolon"));
        assert!(changes.iter().any(|c| c == "Added missing colons"));
    }

    #[test]
    fn repair_leaves_correct_code_alone() {
        let mut changes = Vec::new();
        let code = "def foo():\n    return 1";
        let fixed = PythonRules.repair(code, &mut changes);
        assert_eq!(fixed, code);
        assert!(changes.is_empty());
    }
}
