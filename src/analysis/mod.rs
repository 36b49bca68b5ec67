pub mod detection;
pub mod metrics;
pub mod scoring;

pub use detection::detect;

use tracing::debug;

use crate::analyzers;
use crate::core::types::{AnalysisReport, CodeDocument, IssueCounts, Language};

/// Run the full analysis pipeline for one snippet: issues, metrics, score.
///
/// Pure computation over immutable input; safe to call concurrently and
/// guaranteed to return byte-identical results for identical inputs.
pub fn analyze(code: &str, language: Language) -> AnalysisReport {
    let issues = analyzers::find_issues(code, language);
    let metrics = metrics::compute(code, language);
    let counts = IssueCounts::tally(&issues);
    let score = scoring::quality_score(counts, &metrics);
    debug!(
        language = %language,
        errors = counts.errors,
        warnings = counts.warnings,
        suggestions = counts.suggestions,
        score,
        "analysis complete"
    );
    AnalysisReport {
        issues,
        metrics,
        score,
    }
}

/// Resolve the document's language and analyze it.
pub fn analyze_document(document: &CodeDocument) -> (Language, AnalysisReport) {
    let language = detection::detect(document.text(), document.language_hint());
    (language, analyze(document.text(), language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_is_deterministic() {
        let code = "var x = 1\nif (x == 1) { some_undefined_function(); }";
        let first = analyze(code, Language::JavaScript);
        let second = analyze(code, Language::JavaScript);
        assert_eq!(first, second);
    }

    #[test]
    fn clean_code_scores_one_hundred() {
        let report = analyze("def greet():\n    return 1", Language::Python);
        assert_eq!(report.counts().errors, 0);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn document_flow_detects_and_analyzes() {
        let doc = CodeDocument::new("def foo():\n    return 2\n", "auto");
        let (language, report) = analyze_document(&doc);
        assert_eq!(language, Language::Python);
        assert_eq!(report.score, 100);
    }
}
