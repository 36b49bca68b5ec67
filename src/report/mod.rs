use chrono::{DateTime, Utc};

use crate::core::constants::limits;
use crate::core::types::{AnalysisReport, Issue, Language};

/// Purely presentational rendering of one analysis result. Both renderers
/// are pure functions of their inputs; the timestamp is supplied by the
/// transport layer, never read here.
pub fn render_text(
    report: &AnalysisReport,
    language: Language,
    code: &str,
    analyzed_at: DateTime<Utc>,
) -> String {
    let errors: Vec<&Issue> = report.issues.iter().filter(|i| i.is_error()).collect();
    let others: Vec<&Issue> = report.issues.iter().filter(|i| !i.is_error()).collect();

    let mut lines = vec![
        "Code Quality Report".to_string(),
        format!("Timestamp (UTC): {}", analyzed_at.to_rfc3339()),
        format!("Language: {}", language),
        format!(
            "Code length: {} chars, {} lines",
            code.chars().count(),
            code.lines().count()
        ),
        String::new(),
        format!("Overall Score: {}/100", report.score),
        format!(
            "Cyclomatic Complexity: {}",
            report.metrics.cyclomatic_complexity
        ),
        format!("Readability Score: {}%", report.metrics.readability_score),
        format!("Style Adherence: {}%", report.metrics.style_adherence),
        String::new(),
        "Errors:".to_string(),
    ];

    if errors.is_empty() {
        lines.push("  - None 🎉".to_string());
    } else {
        for issue in &errors {
            lines.push(format_issue_line(issue));
        }
    }

    lines.push(String::new());
    lines.push("Warnings & Suggestions:".to_string());
    if others.is_empty() {
        lines.push("  - None".to_string());
    } else {
        for issue in &others {
            lines.push(format_issue_line(issue));
        }
    }

    lines.extend([
        String::new(),
        "Code Snippet:".to_string(),
        "-".repeat(40),
        snippet(code),
        "-".repeat(40),
    ]);

    lines.join("\n")
}

pub fn render_html(
    report: &AnalysisReport,
    language: Language,
    code: &str,
    analyzed_at: DateTime<Utc>,
) -> String {
    let errors: Vec<&Issue> = report.issues.iter().filter(|i| i.is_error()).collect();
    let others: Vec<&Issue> = report.issues.iter().filter(|i| !i.is_error()).collect();

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8" />
<title>Code Quality Report</title>
<style>
 body {{ font-family: Arial, sans-serif; margin: 24px; }}
 h1 {{ margin-bottom: 8px; }}
 .meta {{ color: #555; margin-bottom: 16px; }}
 .section {{ margin-top: 16px; }}
 .code {{ white-space: pre-wrap; background:#0b1021; color:#e3e7ff; padding:12px; border-radius:8px; }}
 .issue {{ margin:6px 0; }}
 .sev-Critical {{ color: #e11d48; }}
 .sev-Major {{ color: #eab308; }}
 .sev-Minor {{ color: #6b7280; }}
</style>
</head>
<body>
<h1>Code Quality Report</h1>
<div class="meta">Timestamp (UTC): {timestamp} • Language: {language} • Score: {score}/100</div>
<div class="section">
  <strong>Metrics</strong>
  <div>Cyclomatic Complexity: {complexity}</div>
  <div>Readability Score: {readability}%</div>
  <div>Style Adherence: {style}%</div>
</div>
<div class="section">
  <strong>Errors</strong>
  {errors}
</div>
<div class="section">
  <strong>Warnings &amp; Suggestions</strong>
  {others}
</div>
<div class="section">
  <strong>Code Snippet</strong>
  <div class="code">{snippet}</div>
</div>
</body>
</html>
"#,
        timestamp = analyzed_at.to_rfc3339(),
        language = language,
        score = report.score,
        complexity = report.metrics.cyclomatic_complexity,
        readability = report.metrics.readability_score,
        style = report.metrics.style_adherence,
        errors = render_issue_list(&errors),
        others = render_issue_list(&others),
        snippet = escape_html(&snippet(code)),
    )
}

fn format_issue_line(issue: &Issue) -> String {
    format!(
        "  - Line {} [{}] {}: {} -> Suggestion: {}",
        issue.line, issue.severity, issue.kind, issue.message, issue.suggestion
    )
}

fn render_issue_list(issues: &[&Issue]) -> String {
    if issues.is_empty() {
        return "<div>None</div>".to_string();
    }
    issues
        .iter()
        .map(|issue| {
            format!(
                r#"<div class="issue sev-{}">Line {} [{}] {}: {} – <em>{}</em></div>"#,
                issue.severity,
                issue.line,
                issue.severity,
                issue.kind,
                escape_html(&issue.message),
                escape_html(&issue.suggestion),
            )
        })
        .collect()
}

fn snippet(code: &str) -> String {
    code.chars().take(limits::REPORT_SNIPPET_CHARS).collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Metrics;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            issues: vec![
                Issue::critical_error(2, "Missing semicolon", "Add semicolon at end of statement"),
                Issue::suggestion(3, "Avoid var", "Use let or const"),
            ],
            metrics: Metrics {
                cyclomatic_complexity: 2,
                readability_score: 88,
                style_adherence: 85,
            },
            score: 20,
        }
    }

    fn timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn text_report_lists_errors_and_others_separately() {
        let rendered = render_text(&sample_report(), Language::JavaScript, "var x = 1", timestamp());
        assert!(rendered.contains("Overall Score: 20/100"));
        assert!(rendered.contains("Line 2 [Critical] Error: Missing semicolon"));
        assert!(rendered.contains("Warnings & Suggestions:"));
        assert!(rendered.contains("Line 3 [Minor] Suggestion: Avoid var"));
    }

    #[test]
    fn text_report_celebrates_zero_errors() {
        let report = AnalysisReport {
            issues: vec![],
            metrics: Metrics {
                cyclomatic_complexity: 1,
                readability_score: 95,
                style_adherence: 95,
            },
            score: 100,
        };
        let rendered = render_text(&report, Language::Python, "x = 1", timestamp());
        assert!(rendered.contains("  - None 🎉"));
    }

    #[test]
    fn html_report_escapes_the_snippet() {
        let rendered = render_html(
            &sample_report(),
            Language::JavaScript,
            "if (a < b) {}",
            timestamp(),
        );
        assert!(rendered.contains("if (a &lt; b) {}"));
        assert!(rendered.contains("sev-Critical"));
    }

    #[test]
    fn renderers_are_pure() {
        let report = sample_report();
        let a = render_text(&report, Language::JavaScript, "var x = 1", timestamp());
        let b = render_text(&report, Language::JavaScript, "var x = 1", timestamp());
        assert_eq!(a, b);
    }

    #[test]
    fn snippet_is_capped() {
        let long_code = "x".repeat(5000);
        let rendered = render_text(&sample_report(), Language::JavaScript, &long_code, timestamp());
        assert!(!rendered.contains(&"x".repeat(2001)));
        assert!(rendered.contains(&"x".repeat(2000)));
    }
}
