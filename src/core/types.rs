use serde::{Deserialize, Serialize};

use crate::core::constants::{languages, providers};

/// Closed set of languages the analyzers know about.
///
/// `Plain` is the catch-all for hints the caller passes that we do not
/// recognize: the snippet is still analyzed, but only the language-agnostic
/// detectors run. The default for empty or unclassifiable input is
/// `JavaScript`, matching the detection fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Plain,
}

impl Language {
    /// Languages that share the ECMAScript rule set.
    pub fn is_ecmascript(&self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => languages::PYTHON,
            Language::JavaScript => languages::JAVASCRIPT,
            Language::TypeScript => languages::TYPESCRIPT,
            Language::Java => languages::JAVA,
            Language::C => languages::C,
            Language::Cpp => languages::CPP,
            Language::Plain => languages::PLAIN,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            "cpp" | "c++" => Ok(Language::Cpp),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Whether a finding must be fixed, should be fixed, or could be fixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Error => write!(f, "Error"),
            IssueKind::Warning => write!(f, "Warning"),
            IssueKind::Suggestion => write!(f, "Suggestion"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::Major => write!(f, "Major"),
            Severity::Minor => write!(f, "Minor"),
        }
    }
}

/// A single finding in the analyzed snippet.
///
/// `line` is 1-based. Issues keep their detection order; the engine caps the
/// list at 100 entries per analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub line: u32,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
}

impl Issue {
    pub fn new(
        line: u32,
        kind: IssueKind,
        severity: Severity,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            line: line.max(1),
            kind,
            severity,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Shorthand for the Critical Errors the syntax detectors emit.
    pub fn critical_error(
        line: u32,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(line, IssueKind::Error, Severity::Critical, message, suggestion)
    }

    pub fn warning(
        line: u32,
        severity: Severity,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(line, IssueKind::Warning, severity, message, suggestion)
    }

    pub fn suggestion(
        line: u32,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(line, IssueKind::Suggestion, Severity::Minor, message, suggestion)
    }

    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }
}

/// Text-derived quality metrics, each independently bounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Branch-keyword estimate, clamped to [1, 30].
    pub cyclomatic_complexity: u32,
    /// Line-length based score, clamped to [10, 100].
    pub readability_score: u32,
    /// Convention adherence, clamped to [10, 100].
    pub style_adherence: u32,
}

/// Per-kind issue tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl IssueCounts {
    pub fn tally(issues: &[Issue]) -> Self {
        let mut counts = IssueCounts::default();
        for issue in issues {
            match issue.kind {
                IssueKind::Error => counts.errors += 1,
                IssueKind::Warning => counts.warnings += 1,
                IssueKind::Suggestion => counts.suggestions += 1,
            }
        }
        counts
    }
}

/// Result of one analysis pass. Derived on every call, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub issues: Vec<Issue>,
    pub metrics: Metrics,
    pub score: u32,
}

impl AnalysisReport {
    pub fn counts(&self) -> IssueCounts {
        IssueCounts::tally(&self.issues)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_error())
    }
}

/// Immutable per-request input: the snippet text (trailing whitespace
/// trimmed) and the caller's language hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDocument {
    text: String,
    language_hint: String,
}

impl CodeDocument {
    pub fn new(code: &str, language_hint: &str) -> Self {
        let hint = language_hint.trim();
        Self {
            text: code.trim_end().to_string(),
            language_hint: if hint.is_empty() {
                languages::AUTO.to_string()
            } else {
                hint.to_string()
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_hint(&self) -> &str {
        &self.language_hint
    }
}

/// Where an accepted repair came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepairSource {
    Heuristic,
    OpenRouter,
    Google,
}

impl RepairSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairSource::Heuristic => providers::HEURISTIC,
            RepairSource::OpenRouter => providers::OPENROUTER,
            RepairSource::Google => providers::GOOGLE,
        }
    }
}

impl std::fmt::Display for RepairSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the repair audit trail, appended in resolution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepairAttempt {
    #[serde(rename = "source")]
    pub provider: String,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RepairAttempt {
    pub fn applied(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            applied: true,
            error: None,
        }
    }

    pub fn skipped(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            applied: false,
            error: Some(error.into()),
        }
    }

    pub fn unapplied(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            applied: false,
            error: None,
        }
    }
}

/// Final answer of the repair pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepairOutcome {
    pub fixed_code: String,
    pub changes: Vec<String>,
    pub source: RepairSource,
    pub attempts: Vec<RepairAttempt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_display_and_from_str() {
        for lang in [
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Java,
            Language::C,
            Language::Cpp,
        ] {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unknown_language_does_not_parse() {
        assert!("brainfuck".parse::<Language>().is_err());
    }

    #[test]
    fn issue_line_is_clamped_to_one() {
        let issue = Issue::critical_error(0, "msg", "fix");
        assert_eq!(issue.line, 1);
    }

    #[test]
    fn document_trims_trailing_whitespace_and_defaults_hint() {
        let doc = CodeDocument::new("let x = 1;  \n\n", "  ");
        assert_eq!(doc.text(), "let x = 1;");
        assert_eq!(doc.language_hint(), "auto");
    }

    #[test]
    fn report_counts_by_kind() {
        let report = AnalysisReport {
            issues: vec![
                Issue::critical_error(1, "a", "b"),
                Issue::warning(1, Severity::Major, "c", "d"),
                Issue::suggestion(2, "e", "f"),
                Issue::suggestion(3, "g", "h"),
            ],
            metrics: Metrics {
                cyclomatic_complexity: 1,
                readability_score: 100,
                style_adherence: 95,
            },
            score: 100,
        };
        let counts = report.counts();
        assert_eq!(counts.errors, 1);
        assert_eq!(counts.warnings, 1);
        assert_eq!(counts.suggestions, 2);
    }

    #[test]
    fn issue_wire_shape_uses_type_field() {
        let issue = Issue::critical_error(3, "Missing semicolon", "Add semicolon");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "Error");
        assert_eq!(json["severity"], "Critical");
        assert_eq!(json["line"], 3);
    }

    #[test]
    fn metrics_wire_shape_is_camel_case() {
        let metrics = Metrics {
            cyclomatic_complexity: 3,
            readability_score: 80,
            style_adherence: 95,
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert!(json.get("cyclomaticComplexity").is_some());
        assert!(json.get("readabilityScore").is_some());
        assert!(json.get("styleAdherence").is_some());
    }
}
