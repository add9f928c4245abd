//! Core data models for coderev
//!
//! These models represent the outcome of a single analysis run: detected
//! issues, improvement suggestions, and the aggregate review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for issues, ordinal with `Critical` as the worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Classification of an issue, independent of its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Syntax,
    Style,
    Smell,
    Security,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Syntax => write!(f, "syntax"),
            IssueType::Style => write!(f, "style"),
            IssueType::Smell => write!(f, "smell"),
            IssueType::Security => write!(f, "security"),
        }
    }
}

/// A single detected defect. Immutable once created; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub description: String,
    pub severity: Severity,
    pub issue_type: IssueType,
    /// 1-based line in the source; absent when not attributable to a line.
    #[serde(default)]
    pub line_number: Option<u32>,
    /// Optional remediation text.
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(
        description: impl Into<String>,
        severity: Severity,
        issue_type: IssueType,
    ) -> Self {
        Self {
            description: description.into(),
            severity,
            issue_type,
            line_number: None,
            suggestion: None,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Category of an improvement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Documentation,
    Typing,
    Testing,
    Style,
}

/// A non-defect suggestion. Lower priority means more urgent (range 1-3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub description: String,
    pub category: Category,
    pub priority: u8,
}

impl Improvement {
    pub fn new(description: impl Into<String>, category: Category, priority: u8) -> Self {
        Self {
            description: description.into(),
            category,
            priority,
        }
    }
}

/// Four-valued quality verdict derived from score and critical-issue presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "EXCELLENT")]
    Excellent,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "NEEDS WORK")]
    NeedsWork,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Critical => "CRITICAL",
            ReviewStatus::Excellent => "EXCELLENT",
            ReviewStatus::Good => "GOOD",
            ReviewStatus::NeedsWork => "NEEDS WORK",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate result of one analysis run.
///
/// Constructed once per request from the analyzer outputs; never mutated
/// afterwards and not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeReview {
    /// The original input, retained verbatim.
    pub code: String,
    /// Caller-supplied free text, empty by default.
    pub context: String,
    pub issues: Vec<Issue>,
    pub improvements: Vec<Improvement>,
    pub score: i32,
    pub status: ReviewStatus,
    pub timestamp: DateTime<Utc>,
}

impl CodeReview {
    pub fn critical_issues_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count()
    }

    pub fn warning_issues_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn has_critical_issues(&self) -> bool {
        self.critical_issues_count() > 0
    }
}

/// Verdict of the fast syntax + critical-smell pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickStatus {
    Pass,
    Fail,
}

impl std::fmt::Display for QuickStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuickStatus::Pass => write!(f, "pass"),
            QuickStatus::Fail => write!(f, "fail"),
        }
    }
}

/// Result of a quick check: only syntax errors and critical smells counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCheck {
    pub critical_issues: usize,
    pub has_syntax_errors: bool,
    pub security_issues: usize,
    pub quick_status: QuickStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> Issue {
        Issue::new("test issue", severity, IssueType::Smell)
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_issue_structural_equality() {
        let a = Issue::new("dup", Severity::Warning, IssueType::Style).with_line(3);
        let b = Issue::new("dup", Severity::Warning, IssueType::Style).with_line(3);
        assert_eq!(a, b);

        let c = b.clone().with_suggestion("fix it");
        assert_ne!(a, c);
    }

    #[test]
    fn test_review_derived_counts() {
        let review = CodeReview {
            code: String::new(),
            context: String::new(),
            issues: vec![
                issue(Severity::Critical),
                issue(Severity::Warning),
                issue(Severity::Warning),
                issue(Severity::Info),
            ],
            improvements: vec![],
            score: 5,
            status: ReviewStatus::Critical,
            timestamp: Utc::now(),
        };

        assert_eq!(review.critical_issues_count(), 1);
        assert_eq!(review.warning_issues_count(), 2);
        assert!(review.has_critical_issues());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ReviewStatus::Critical.to_string(), "CRITICAL");
        assert_eq!(ReviewStatus::Excellent.to_string(), "EXCELLENT");
        assert_eq!(ReviewStatus::Good.to_string(), "GOOD");
        assert_eq!(ReviewStatus::NeedsWork.to_string(), "NEEDS WORK");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ReviewStatus::NeedsWork).unwrap();
        assert_eq!(json, "\"NEEDS WORK\"");
        let json = serde_json::to_string(&QuickStatus::Fail).unwrap();
        assert_eq!(json, "\"fail\"");
    }
}
