//! Dynamic code execution rule
//!
//! Flags direct unqualified calls to `eval` and `exec`. A same-named method
//! on an object (`node.eval(...)`) is not the builtin and does not trigger.

use crate::detectors::Rule;
use crate::models::{Issue, IssueType, Severity};
use crate::tree::{CallTarget, NodeKind, SyntaxNode};

const SUGGESTION: &str = "Find an alternative approach";

/// Dynamic-code-execution builtins checked by bare name.
const UNSAFE_CALLS: &[&str] = &["eval", "exec"];

pub struct UnsafeEvalRule;

impl Rule for UnsafeEvalRule {
    fn name(&self) -> &'static str {
        "unsafe-eval"
    }

    fn check(&self, node: &SyntaxNode) -> Vec<Issue> {
        let NodeKind::Call(CallTarget::Name(name)) = &node.kind else {
            return vec![];
        };
        if !UNSAFE_CALLS.contains(&name.as_str()) {
            return vec![];
        }

        vec![Issue::new(
            format!("Use of {name}() is unsafe"),
            Severity::Critical,
            IssueType::Security,
        )
        .with_line(node.line_start)
        .with_suggestion(SUGGESTION)]
    }
}
