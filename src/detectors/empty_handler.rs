//! Empty exception handler rule
//!
//! Flags `except` blocks whose body is empty or consists solely of no-op
//! statements (`pass`, bare `...`). Swallowed exceptions hide failures and
//! make debugging much harder.

use crate::detectors::Rule;
use crate::models::{Issue, IssueType, Severity};
use crate::tree::{NodeKind, SyntaxNode};

const SUGGESTION: &str = "Add exception handling or logging";

pub struct EmptyHandlerRule;

impl EmptyHandlerRule {
    /// True when the handler body carries no real statement.
    fn is_empty_body(node: &SyntaxNode) -> bool {
        let Some(block) = node.children.iter().find(|c| c.kind == NodeKind::Block) else {
            // No body block at all counts as empty.
            return true;
        };
        block.children.is_empty()
            || (block.children.len() == 1 && block.children[0].kind == NodeKind::Noop)
    }
}

impl Rule for EmptyHandlerRule {
    fn name(&self) -> &'static str {
        "empty-exception-handler"
    }

    fn check(&self, node: &SyntaxNode) -> Vec<Issue> {
        if node.kind != NodeKind::ExceptHandler || !Self::is_empty_body(node) {
            return vec![];
        }

        vec![Issue::new(
            "Empty except block",
            Severity::Critical,
            IssueType::Smell,
        )
        .with_line(node.line_start)
        .with_suggestion(SUGGESTION)]
    }
}
