pub mod heuristic;
pub mod orchestrator;
pub mod providers;

pub use heuristic::HeuristicFix;
pub use orchestrator::{FallbackOrchestrator, ProviderSlot};
pub use providers::RepairProvider;

use crate::analysis;
use crate::config::RepairSettings;
use crate::core::constants::providers::HEURISTIC;
use crate::core::constants::repair_markers;
use crate::core::types::{Issue, Language, RepairAttempt, RepairOutcome, RepairSource};

/// Full repair pipeline: find errors, try the deterministic rewrites, and
/// only if errors remain hand off to the provider race.
pub async fn auto_fix(code: &str, language: Language, settings: &RepairSettings) -> RepairOutcome {
    let orchestrator = FallbackOrchestrator::from_settings(settings);
    auto_fix_with(code, language, &orchestrator).await
}

/// Same pipeline with an injected orchestrator, the seam tests use to race
/// controlled providers.
pub async fn auto_fix_with(
    code: &str,
    language: Language,
    orchestrator: &FallbackOrchestrator,
) -> RepairOutcome {
    let report = analysis::analyze(code, language);
    let errors: Vec<Issue> = report.issues.into_iter().filter(Issue::is_error).collect();

    // Repair is never attempted when nothing is broken.
    if errors.is_empty() {
        return RepairOutcome {
            fixed_code: code.to_string(),
            changes: vec![repair_markers::NO_CHANGES.to_string()],
            source: RepairSource::Heuristic,
            attempts: Vec::new(),
        };
    }

    let fix = heuristic::repair(code, language);
    if !fix.changes.is_empty() {
        let recheck = analysis::analyze(&fix.fixed_code, language);
        if recheck.counts().errors == 0 {
            return RepairOutcome {
                fixed_code: fix.fixed_code,
                changes: fix.changes,
                source: RepairSource::Heuristic,
                attempts: vec![RepairAttempt::applied(HEURISTIC)],
            };
        }
    }

    orchestrator.resolve(code, language, &errors, fix).await
}
