//! Long function rule
//!
//! Flags functions whose body spans more than the configured number of
//! source lines. Long functions usually mix several responsibilities and
//! are the first candidates for extraction.

use crate::detectors::Rule;
use crate::models::{Issue, IssueType, Severity};
use crate::tree::{NodeKind, SyntaxNode};

const SUGGESTION: &str = "Split the function into smaller parts";

pub struct LongFunctionRule {
    max_lines: u32,
}

impl LongFunctionRule {
    pub fn new(max_lines: u32) -> Self {
        Self { max_lines }
    }
}

impl Rule for LongFunctionRule {
    fn name(&self) -> &'static str {
        "long-function"
    }

    fn check(&self, node: &SyntaxNode) -> Vec<Issue> {
        let NodeKind::Function(info) = &node.kind else {
            return vec![];
        };

        let lines = node.span_lines();
        if lines <= self.max_lines {
            return vec![];
        }

        vec![Issue::new(
            format!("Function '{}' is too long ({} lines)", info.name, lines),
            Severity::Warning,
            IssueType::Smell,
        )
        .with_line(node.line_start)
        .with_suggestion(SUGGESTION)]
    }
}
