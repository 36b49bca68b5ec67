use crate::core::types::{IssueCounts, Metrics};

/// Combine issue counts and metrics into the 0-100 quality score.
///
/// Errors dominate by construction: with none present the score is a flat
/// 100 regardless of metrics, while a single error already costs 15 points
/// against a non-error contribution capped at 50. Warning and suggestion
/// counts are tallied for reporting but do not move the score.
pub fn quality_score(counts: IssueCounts, metrics: &Metrics) -> u32 {
    if counts.errors == 0 {
        return 100;
    }
    let penalty = (counts.errors as i64 * 15).min(90);
    let weighted = 0.3 * metrics.readability_score as f64 + 0.2 * metrics.style_adherence as f64;
    let base = (weighted as i64).min(50);
    (base - penalty).max(5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(readability: u32, style: u32) -> Metrics {
        Metrics {
            cyclomatic_complexity: 1,
            readability_score: readability,
            style_adherence: style,
        }
    }

    fn counts(errors: usize) -> IssueCounts {
        IssueCounts {
            errors,
            warnings: 3,
            suggestions: 7,
        }
    }

    #[test]
    fn zero_errors_is_a_perfect_score_regardless_of_metrics() {
        assert_eq!(quality_score(counts(0), &metrics(10, 10)), 100);
        assert_eq!(quality_score(counts(0), &metrics(100, 100)), 100);
    }

    #[test]
    fn single_error_subtracts_from_capped_base() {
        // base = min(50, 0.3*100 + 0.2*95) = 49; penalty = 15
        assert_eq!(quality_score(counts(1), &metrics(100, 95)), 34);
    }

    #[test]
    fn base_is_capped_at_fifty() {
        // 0.3*100 + 0.2*100 = 50, not above
        assert_eq!(quality_score(counts(1), &metrics(100, 100)), 35);
    }

    #[test]
    fn many_errors_floor_the_score_at_five() {
        assert_eq!(quality_score(counts(10), &metrics(100, 100)), 5);
        assert_eq!(quality_score(counts(100), &metrics(100, 100)), 5);
    }

    #[test]
    fn penalty_is_capped_at_ninety() {
        // 7 errors would be 105 uncapped; capped penalty leaves 50 - 90 -> floor
        assert_eq!(quality_score(counts(7), &metrics(100, 100)), 5);
    }
}
