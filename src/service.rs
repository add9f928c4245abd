//! Review service
//!
//! The orchestration layer callers talk to: individual analysis passes plus
//! the composed `review` and `quick_check` operations. Stateless between
//! calls; every invocation analyzes the given source from scratch.

use crate::advisor;
use crate::config::AnalyzerConfig;
use crate::detectors::RuleEngine;
use crate::models::{
    CodeReview, Improvement, Issue, IssueType, QuickCheck, QuickStatus, Severity,
};
use crate::parser;
use crate::report;
use crate::scoring;
use crate::style::StyleChecker;
use chrono::Utc;
use tracing::info;

pub struct CodeAnalyzer {
    engine: RuleEngine,
    style: StyleChecker,
}

impl CodeAnalyzer {
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            engine: RuleEngine::new(config),
            style: StyleChecker::new(config),
        }
    }

    /// Check that the source parses. An unparsable submission yields exactly
    /// one CRITICAL/SYNTAX issue carrying the failing line.
    pub fn analyze_syntax(&self, code: &str) -> Vec<Issue> {
        match parser::parse(code) {
            Ok(_) => vec![],
            Err(fault) => vec![fault.to_issue()],
        }
    }

    /// Run the external style linter. Best-effort: faults yield no issues.
    pub fn check_style(&self, code: &str) -> Vec<Issue> {
        self.style.check(code)
    }

    /// Evaluate the structural rules. Unparsable input yields no findings;
    /// the syntax fault is reported by `analyze_syntax` alone.
    pub fn detect_smells(&self, code: &str) -> Vec<Issue> {
        match parser::parse(code) {
            Ok(tree) => self.engine.detect(&tree),
            Err(_) => vec![],
        }
    }

    /// Collect improvement suggestions. Unparsable input yields none.
    pub fn suggest_improvements(&self, code: &str) -> Vec<Improvement> {
        match parser::parse(code) {
            Ok(tree) => advisor::suggest(&tree),
            Err(_) => vec![],
        }
    }

    /// Full review: all passes, scored and labeled. Issue order is syntax,
    /// then style, then smells.
    pub fn review(&self, code: &str, context: &str) -> CodeReview {
        let mut issues = self.analyze_syntax(code);
        issues.extend(self.check_style(code));
        issues.extend(self.detect_smells(code));
        let improvements = self.suggest_improvements(code);

        let score = scoring::calculate_score(&issues);
        let status = scoring::determine_status(score, &issues);
        info!(score, %status, issues = issues.len(), "review complete");

        CodeReview {
            code: code.to_string(),
            context: context.to_string(),
            issues,
            improvements,
            score,
            status,
            timestamp: Utc::now(),
        }
    }

    /// Fast verdict from syntax errors and critical smells only.
    pub fn quick_check(&self, code: &str) -> QuickCheck {
        let syntax_issues = self.analyze_syntax(code);
        let critical_smells = self.critical_smells(code);

        let total_critical = syntax_issues.len() + critical_smells.len();
        QuickCheck {
            critical_issues: total_critical,
            has_syntax_errors: !syntax_issues.is_empty(),
            security_issues: critical_smells
                .iter()
                .filter(|i| i.issue_type == IssueType::Security)
                .count(),
            quick_status: if total_critical > 0 {
                QuickStatus::Fail
            } else {
                QuickStatus::Pass
            },
        }
    }

    /// Full review rendered as the deterministic text report.
    pub fn full_report(&self, code: &str) -> String {
        let review = self.review(code, "");
        report::render_full(
            &review.issues,
            &review.improvements,
            review.score,
            review.status.as_str(),
        )
    }

    /// Quick check rendered as the deterministic text report.
    pub fn quick_report(&self, code: &str) -> String {
        let syntax_issues = self.analyze_syntax(code);
        let critical_smells = self.critical_smells(code);
        report::render_quick(&syntax_issues, &critical_smells)
    }

    fn critical_smells(&self, code: &str) -> Vec<Issue> {
        self.detect_smells(code)
            .into_iter()
            .filter(|i| i.severity == Severity::Critical)
            .collect()
    }
}

impl Default for CodeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
