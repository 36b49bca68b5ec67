use crate::analyzers::base::{SNAKE_CASE_RE, TODO_RE, VAR_RE};
use crate::core::constants::limits;
use crate::core::types::{Language, Metrics};

/// Branching/looping keywords counted for the complexity estimate, padded
/// with spaces so `if` does not match inside identifiers.
const BRANCH_KEYWORDS: &[&str] = &[
    " if ", " for ", " while ", " case ", " catch ", " elif ", " else if ",
];

pub fn compute(code: &str, language: Language) -> Metrics {
    Metrics {
        cyclomatic_complexity: cyclomatic_complexity(code),
        readability_score: readability_score(code),
        style_adherence: style_adherence(code, language),
    }
}

/// Keyword-count estimate: start at 1, add 1 per branch keyword occurrence
/// in the space-padded, lower-cased text, clamp to [1, 30].
fn cyclomatic_complexity(code: &str) -> u32 {
    let padded = format!(" {} ", code.to_lowercase());
    let count = 1 + BRANCH_KEYWORDS
        .iter()
        .map(|keyword| padded.matches(keyword).count())
        .sum::<usize>();
    (count as u32).clamp(1, 30)
}

/// Mean-line-length score with a long-line penalty, clamped to [10, 100].
fn readability_score(code: &str) -> u32 {
    let lines: Vec<&str> = code.lines().filter(|l| !l.trim().is_empty()).collect();
    let avg_len = if lines.is_empty() {
        0.0
    } else {
        lines.iter().map(|l| l.chars().count()).sum::<usize>() as f64 / lines.len() as f64
    };
    let too_long = lines
        .iter()
        .filter(|l| l.chars().count() > limits::LONG_LINE_CHARS)
        .count() as i64;
    let score = 100 - (avg_len as i64).min(60) - (too_long * 2).min(20);
    score.clamp(10, 100) as u32
}

/// Convention score: 95 minus fixed penalties for `var` (JS/TS only),
/// snake_case identifiers and TODO markers, floored at 10.
fn style_adherence(code: &str, language: Language) -> u32 {
    let mut penalty = 0;
    if language.is_ecmascript() && VAR_RE.is_match(code) {
        penalty += 10;
    }
    if SNAKE_CASE_RE.is_match(code) {
        penalty += 10;
    }
    if TODO_RE.is_match(code) {
        penalty += 5;
    }
    (95 - penalty).max(10) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_code_has_base_complexity() {
        assert_eq!(cyclomatic_complexity("x = 1\ny = 2"), 1);
    }

    #[test]
    fn each_branch_keyword_adds_one() {
        // keywords count only when space-padded, so line-leading ones do not
        assert_eq!(cyclomatic_complexity("a = 1 if b else 2 while c"), 3);
        assert_eq!(cyclomatic_complexity("x = 1\nif a:\n    pass"), 1);
    }

    #[test]
    fn complexity_is_clamped_at_thirty() {
        let code = " if x ".repeat(100);
        assert_eq!(cyclomatic_complexity(&code), 30);
    }

    #[test]
    fn empty_input_scores_perfect_readability() {
        assert_eq!(readability_score(""), 100);
    }

    #[test]
    fn long_lines_are_penalized() {
        let long_line = "x".repeat(200);
        let code = format!("{}\n{}", long_line, long_line);
        // mean length capped at 60, two long lines cost 4 more
        assert_eq!(readability_score(&code), 100 - 60 - 4);
    }

    #[test]
    fn readability_never_drops_below_ten() {
        let code = format!("{}\n", "y".repeat(300)).repeat(50);
        assert_eq!(readability_score(&code), 20);
        let worst = format!("{}\n", "y".repeat(300)).repeat(500);
        assert!(readability_score(&worst) >= 10);
    }

    #[test]
    fn var_penalty_applies_to_ecmascript_only() {
        let code = "var x = 1;";
        assert_eq!(style_adherence(code, Language::JavaScript), 85);
        assert_eq!(style_adherence(code, Language::Python), 95);
    }

    #[test]
    fn penalties_stack() {
        let code = "var my_value = 1; // TODO: rename";
        assert_eq!(style_adherence(code, Language::JavaScript), 70);
    }
}
