//! Structural defect detection rules
//!
//! A fixed set of independent rules evaluated over the syntax tree. The
//! engine visits every node exactly once and lets each rule inspect it;
//! findings from different rules on the same node are all kept, with no
//! deduplication and no early exit.

mod empty_handler;
mod long_function;
mod long_parameter;
mod unsafe_eval;

pub use empty_handler::EmptyHandlerRule;
pub use long_function::LongFunctionRule;
pub use long_parameter::LongParameterRule;
pub use unsafe_eval::UnsafeEvalRule;

use crate::config::AnalyzerConfig;
use crate::models::Issue;
use crate::tree::{SyntaxNode, SyntaxTree};
use tracing::debug;

/// A single detection rule. Rules are stateless between invocations and
/// produce zero or more issues for any node they are shown.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Inspect one node. Must tolerate any node shape.
    fn check(&self, node: &SyntaxNode) -> Vec<Issue>;
}

/// Evaluates all rules over a tree.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Engine with the standard rule set and the given thresholds.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            rules: vec![
                Box::new(LongFunctionRule::new(config.long_function_lines)),
                Box::new(LongParameterRule::new(config.max_params)),
                Box::new(EmptyHandlerRule),
                Box::new(UnsafeEvalRule),
            ],
        }
    }

    /// Walk every node once and accumulate findings from all rules.
    pub fn detect(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let mut issues = Vec::new();
        for node in tree.walk() {
            for rule in &self.rules {
                issues.extend(rule.check(node));
            }
        }
        debug!(count = issues.len(), "rule engine finished");
        issues
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
