//! Quality scoring
//!
//! Reduces a findings list to a single integer score and a status label.
//! The arithmetic is fixed: start at 10, critical issues cost 3 points,
//! warnings cost 1, info costs nothing, floor at 0.

use crate::models::{Issue, ReviewStatus, Severity};

/// Compute the 0-10 quality score for a findings list.
pub fn calculate_score(issues: &[Issue]) -> i32 {
    let mut score: i32 = 10;
    for issue in issues {
        score -= match issue.severity {
            Severity::Critical => 3,
            Severity::Warning => 1,
            Severity::Info => 0,
        };
    }
    score.max(0)
}

/// Derive the status label. A single critical issue forces `CRITICAL`
/// regardless of the numeric score; only then do the score bands apply.
pub fn determine_status(score: i32, issues: &[Issue]) -> ReviewStatus {
    if issues.iter().any(|i| i.severity == Severity::Critical) {
        ReviewStatus::Critical
    } else if score >= 8 {
        ReviewStatus::Excellent
    } else if score >= 6 {
        ReviewStatus::Good
    } else {
        ReviewStatus::NeedsWork
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueType;

    fn issues(severities: &[Severity]) -> Vec<Issue> {
        severities
            .iter()
            .map(|&s| Issue::new("x", s, IssueType::Smell))
            .collect()
    }

    #[test]
    fn test_perfect_score() {
        assert_eq!(calculate_score(&[]), 10);
        assert_eq!(determine_status(10, &[]), ReviewStatus::Excellent);
    }

    #[test]
    fn test_penalties() {
        assert_eq!(calculate_score(&issues(&[Severity::Critical])), 7);
        assert_eq!(calculate_score(&issues(&[Severity::Warning])), 9);
        assert_eq!(calculate_score(&issues(&[Severity::Info])), 10);
        assert_eq!(
            calculate_score(&issues(&[Severity::Critical, Severity::Warning])),
            6
        );
    }

    #[test]
    fn test_score_floors_at_zero() {
        let many = issues(&[Severity::Critical; 5]);
        assert_eq!(calculate_score(&many), 0);
    }

    #[test]
    fn test_monotonic_decrease() {
        let mut set = issues(&[Severity::Warning, Severity::Warning]);
        let before = calculate_score(&set);
        set.push(Issue::new("x", Severity::Critical, IssueType::Security));
        assert_eq!(calculate_score(&set), before - 3);
    }

    #[test]
    fn test_critical_overrides_high_score() {
        // One critical issue keeps the score at 7 but the status must not
        // fall into a score band.
        let set = issues(&[Severity::Critical]);
        let score = calculate_score(&set);
        assert_eq!(score, 7);
        assert_eq!(determine_status(score, &set), ReviewStatus::Critical);
    }

    #[test]
    fn test_score_bands() {
        let two_warnings = issues(&[Severity::Warning, Severity::Warning]);
        assert_eq!(determine_status(8, &two_warnings), ReviewStatus::Excellent);

        let four_warnings = issues(&[Severity::Warning; 4]);
        assert_eq!(determine_status(6, &four_warnings), ReviewStatus::Good);

        let five_warnings = issues(&[Severity::Warning; 5]);
        assert_eq!(determine_status(5, &five_warnings), ReviewStatus::NeedsWork);
    }
}
