//! Long parameter list rule
//!
//! Flags functions declaring more than the configured number of positional
//! parameters. Related parameters usually want to be grouped into a
//! dataclass or configuration object.

use crate::detectors::Rule;
use crate::models::{Issue, IssueType, Severity};
use crate::tree::{NodeKind, SyntaxNode};

const SUGGESTION: &str = "Group related parameters into a structure";

pub struct LongParameterRule {
    max_params: usize,
}

impl LongParameterRule {
    pub fn new(max_params: usize) -> Self {
        Self { max_params }
    }
}

impl Rule for LongParameterRule {
    fn name(&self) -> &'static str {
        "long-parameter-list"
    }

    fn check(&self, node: &SyntaxNode) -> Vec<Issue> {
        let NodeKind::Function(info) = &node.kind else {
            return vec![];
        };

        if info.param_count <= self.max_params {
            return vec![];
        }

        vec![Issue::new(
            format!(
                "Function '{}' has too many parameters ({})",
                info.name, info.param_count
            ),
            Severity::Warning,
            IssueType::Smell,
        )
        .with_line(node.line_start)
        .with_suggestion(SUGGESTION)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn check(source: &str) -> Vec<Issue> {
        let tree = parser::parse(source).expect("test source should parse");
        let rule = LongParameterRule::new(5);
        tree.walk().flat_map(|n| rule.check(n)).collect()
    }

    #[test]
    fn test_five_params_pass() {
        assert!(check("def f(a, b, c, d, e):\n    pass\n").is_empty());
    }

    #[test]
    fn test_six_params_flagged() {
        let issues = check("def f(a, b, c, d, e, g):\n    pass\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].issue_type, IssueType::Smell);
        assert!(issues[0].description.contains("(6)"));
        assert_eq!(issues[0].suggestion.as_deref(), Some(SUGGESTION));
    }

    #[test]
    fn test_splats_do_not_count() {
        assert!(check("def f(a, b, c, d, e, *args, **kwargs):\n    pass\n").is_empty());
    }

    #[test]
    fn test_keyword_only_params_do_not_count() {
        assert!(check("def f(a, b, *, c, d, e, g):\n    pass\n").is_empty());
    }
}
