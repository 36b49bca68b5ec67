use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::Issue;

/// Compiled-once pattern tables shared by the detectors and the repair
/// rewrites. Each pattern is evaluated against a line or the whole document;
/// none of them carry state.
pub static JS_LOOP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for\s*\(.*;.*;.*\)").unwrap());

pub static PY_LOOP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*for\s+.*:\s*$").unwrap());

pub static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bvar\b").unwrap());

pub static SNAKE_CASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+_[a-z0-9]+\b").unwrap());

pub static TODO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)//\s*TODO|#\s*TODO").unwrap());

pub static JAVA_STRING_EQ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w+)\s*==\s*"([^"]*)""#).unwrap());

/// Line-shape predicate for the "missing statement terminator" family of
/// checks. Each language instantiates one for detection and one for repair;
/// the two differ slightly in which endings and prefixes they accept, so the
/// sets are data rather than code.
#[derive(Debug, Clone, Copy)]
pub struct TerminatorCheck {
    /// A line starting with any of these is never flagged.
    pub skip_prefixes: &'static [&'static str],
    /// A line containing any of these is never flagged.
    pub skip_containing: &'static [&'static str],
    /// Trailing characters that already terminate or continue the statement.
    pub safe_endings: &'static [char],
    /// At least one of these must appear for the line to look like a
    /// statement at all.
    pub statement_markers: &'static [&'static str],
}

impl TerminatorCheck {
    /// True when `line` (already trimmed) looks like a statement that should
    /// end in a terminator but does not.
    pub fn lacks_terminator(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }
        if self.skip_prefixes.iter().any(|p| line.starts_with(p)) {
            return false;
        }
        if self.skip_containing.iter().any(|k| line.contains(k)) {
            return false;
        }
        if line.ends_with(self.safe_endings) {
            return false;
        }
        self.statement_markers.iter().any(|k| line.contains(k))
    }
}

/// Stack-based balance check over the whole text. Emits at most one issue:
/// the first mismatched closer, or leftover openers at end of text, yield a
/// single Critical Error pinned to line 1 and scanning stops.
pub fn bracket_balance_issue(code: &str) -> Option<Issue> {
    let mut stack: Vec<char> = Vec::new();
    for ch in code.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let expected = matching_opener(ch);
                if stack.last() != Some(&expected) {
                    return Some(unbalanced_issue());
                }
                stack.pop();
            }
            _ => {}
        }
    }
    if stack.is_empty() {
        None
    } else {
        Some(unbalanced_issue())
    }
}

fn unbalanced_issue() -> Issue {
    Issue::critical_error(
        1,
        "Unbalanced brackets/parens",
        "Fix bracket/parenthesis balancing",
    )
}

fn matching_opener(closer: char) -> char {
    match closer {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

fn matching_closer(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Repair-side bracket scan: closers pop only a matching top-of-stack, then
/// every unmatched opener gets its closer appended at end of text in LIFO
/// order, one change-log entry per insertion.
pub fn append_missing_closers(code: &str, changes: &mut Vec<String>) -> String {
    let mut stack: Vec<char> = Vec::new();
    for ch in code.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                if stack.last() == Some(&matching_opener(ch)) {
                    stack.pop();
                }
            }
            _ => {}
        }
    }
    let mut fixed = code.to_string();
    while let Some(opener) = stack.pop() {
        fixed.push(matching_closer(opener));
        changes.push("Added missing closing bracket/paren".to_string());
    }
    fixed
}

/// Repair-side terminator appension: every line the check flags gets a `;`
/// appended (after stripping its trailing whitespace), one log entry each.
pub fn append_missing_semicolons(
    code: &str,
    check: &TerminatorCheck,
    changes: &mut Vec<String>,
) -> String {
    let mut lines: Vec<String> = code.split('\n').map(str::to_string).collect();
    for line in lines.iter_mut() {
        let trimmed = line.trim();
        if check.lacks_terminator(trimmed) && !trimmed.ends_with(';') {
            *line = format!("{};", line.trim_end());
            changes.push("Added missing semicolon".to_string());
        }
    }
    lines.join("\n")
}

/// Replace loose equality with strict equality, leaving `!=`, `<=`, `>=`,
/// `!==` and already-strict `===` untouched. A hand-rolled scan because the
/// needed left/right context is not expressible in the regex crate.
pub fn strengthen_equality(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 8);
    let mut chars = code.chars().peekable();
    let mut prev: Option<char> = None;
    while let Some(c) = chars.next() {
        if c == '='
            && chars.peek() == Some(&'=')
            && !matches!(prev, Some('!' | '<' | '>' | '='))
        {
            chars.next();
            if chars.peek() == Some(&'=') {
                chars.next();
            }
            out.push_str("===");
            prev = Some('=');
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
