pub mod constants;
pub mod types;

pub use types::{
    AnalysisReport, CodeDocument, Issue, IssueCounts, IssueKind, Language, Metrics,
    RepairAttempt, RepairOutcome, RepairSource, Severity,
};
