//! Deterministic text report rendering
//!
//! Composes the full and quick reports from findings. Sections with zero
//! items are omitted entirely: no heading, no stray blank line.

use crate::models::{Improvement, Issue, IssueType, QuickStatus};
use std::fmt::Write;

/// Render the full review report.
pub fn render_full(
    issues: &[Issue],
    improvements: &[Improvement],
    score: i32,
    status: &str,
) -> String {
    let mut out = String::new();

    out.push_str("CODE ANALYSIS RESULTS\n\n");
    let _ = writeln!(out, "Issues found: {}", issues.len());
    let _ = writeln!(out, "Score: {score}/10");
    let _ = writeln!(out, "Status: {status}");

    if !issues.is_empty() {
        out.push_str("\nISSUES FOUND:\n");
        for (i, issue) in issues.iter().enumerate() {
            let _ = writeln!(out, "{}. [{}] {}", i + 1, issue.severity, issue.description);
            if let Some(line) = issue.line_number {
                let _ = writeln!(out, "   Line: {line}");
            }
            if let Some(suggestion) = &issue.suggestion {
                let _ = writeln!(out, "   Recommendation: {suggestion}");
            }
        }
    }

    if !improvements.is_empty() {
        out.push_str("\nIMPROVEMENT SUGGESTIONS:\n");
        for (i, improvement) in improvements.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, improvement.description);
        }
    }

    out
}

/// Render the quick check report from syntax issues and critical smells.
pub fn render_quick(syntax_issues: &[Issue], critical_smells: &[Issue]) -> String {
    let total_critical = syntax_issues.len() + critical_smells.len();
    let security_count = critical_smells
        .iter()
        .filter(|i| i.issue_type == IssueType::Security)
        .count();
    let status = if total_critical > 0 {
        QuickStatus::Fail
    } else {
        QuickStatus::Pass
    };

    let mut out = String::new();
    out.push_str("QUICK CODE CHECK\n\n");
    let _ = writeln!(out, "Status: {}", status.to_string().to_uppercase());
    let _ = writeln!(out, "Critical issues: {total_critical}");
    let _ = writeln!(out, "Syntax errors: {}", syntax_issues.len());
    let _ = writeln!(out, "Security issues: {security_count}");

    push_quick_section(&mut out, "SYNTAX ERRORS", syntax_issues);
    push_quick_section(&mut out, "CRITICAL ISSUES", critical_smells);

    out
}

fn push_quick_section(out: &mut String, title: &str, issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for (i, issue) in issues.iter().enumerate() {
        match issue.line_number {
            Some(line) => {
                let _ = writeln!(out, "{}. {} (line {})", i + 1, issue.description, line);
            }
            None => {
                let _ = writeln!(out, "{}. {}", i + 1, issue.description);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Severity};

    fn smell(description: &str, line: u32) -> Issue {
        Issue::new(description, Severity::Critical, IssueType::Smell).with_line(line)
    }

    #[test]
    fn test_full_report_header_only_when_empty() {
        let report = render_full(&[], &[], 10, "EXCELLENT");

        assert!(report.contains("CODE ANALYSIS RESULTS"));
        assert!(report.contains("Issues found: 0"));
        assert!(report.contains("Score: 10/10"));
        assert!(report.contains("Status: EXCELLENT"));
        assert!(!report.contains("ISSUES FOUND"));
        assert!(!report.contains("IMPROVEMENT SUGGESTIONS"));
        assert!(!report.ends_with("\n\n"), "no trailing blank-line artifact");
    }

    #[test]
    fn test_full_report_sections() {
        let issues = vec![Issue::new(
            "Use of eval() is unsafe",
            Severity::Critical,
            IssueType::Security,
        )
        .with_line(2)
        .with_suggestion("Find an alternative approach")];
        let improvements = vec![Improvement::new(
            "Add unit tests for your functions",
            Category::Testing,
            1,
        )];

        let report = render_full(&issues, &improvements, 7, "CRITICAL");

        assert!(report.contains("ISSUES FOUND:\n1. [critical] Use of eval() is unsafe"));
        assert!(report.contains("   Line: 2\n"));
        assert!(report.contains("   Recommendation: Find an alternative approach\n"));
        assert!(report.contains("IMPROVEMENT SUGGESTIONS:\n1. Add unit tests"));
    }

    #[test]
    fn test_full_report_omits_line_when_absent() {
        let issues = vec![Issue::new("Empty except block", Severity::Critical, IssueType::Smell)];
        let report = render_full(&issues, &[], 7, "CRITICAL");
        assert!(!report.contains("Line:"));
    }

    #[test]
    fn test_quick_report_pass() {
        let report = render_quick(&[], &[]);
        assert!(report.contains("Status: PASS"));
        assert!(report.contains("Critical issues: 0"));
        assert!(report.contains("Syntax errors: 0"));
        assert!(report.contains("Security issues: 0"));
        assert!(!report.contains("SYNTAX ERRORS"));
        assert!(!report.contains("CRITICAL ISSUES"));
    }

    #[test]
    fn test_quick_report_fail_with_sections() {
        let syntax = vec![Issue::new(
            "Syntax error at line 1: invalid syntax",
            Severity::Critical,
            IssueType::Syntax,
        )
        .with_line(1)];
        let smells = vec![
            smell("Empty except block", 4),
            Issue::new("Use of eval() is unsafe", Severity::Critical, IssueType::Security)
                .with_line(6),
        ];

        let report = render_quick(&syntax, &smells);

        assert!(report.contains("Status: FAIL"));
        assert!(report.contains("Critical issues: 3"));
        assert!(report.contains("Syntax errors: 1"));
        assert!(report.contains("Security issues: 1"));
        assert!(report.contains("SYNTAX ERRORS:\n1. Syntax error at line 1: invalid syntax (line 1)"));
        assert!(report.contains("CRITICAL ISSUES:\n1. Empty except block (line 4)"));
        assert!(report.contains("2. Use of eval() is unsafe (line 6)"));
    }
}
