//! Improvement advisor
//!
//! Suggests non-defect improvements: missing docstrings on top-level
//! functions and classes, plus a fixed set of general recommendations that
//! apply to every submission.

use crate::models::{Category, Improvement};
use crate::tree::{NodeKind, SyntaxTree};

const TYPING_ADVICE: &str = "Use type hints to make the code easier to read";
const TESTING_ADVICE: &str = "Add unit tests for your functions";
const FORMATTING_ADVICE: &str = "Consider using f-strings for string formatting";

/// Names listed in a docstring suggestion are capped at this many.
const NAME_CAP: usize = 3;

/// Collect improvement suggestions for a parsed submission.
pub fn suggest(tree: &SyntaxTree) -> Vec<Improvement> {
    let mut functions_without_docs = Vec::new();
    let mut classes_without_docs = Vec::new();

    for node in tree.top_level() {
        match &node.kind {
            NodeKind::Function(info) if !info.has_docstring => {
                functions_without_docs.push(info.name.clone());
            }
            NodeKind::Class(info) if !info.has_docstring => {
                classes_without_docs.push(info.name.clone());
            }
            _ => {}
        }
    }

    let mut improvements = Vec::new();

    if !functions_without_docs.is_empty() {
        improvements.push(Improvement::new(
            format!(
                "Add docstrings to functions: {}",
                functions_without_docs[..functions_without_docs.len().min(NAME_CAP)].join(", ")
            ),
            Category::Documentation,
            2,
        ));
    }

    if !classes_without_docs.is_empty() {
        improvements.push(Improvement::new(
            format!(
                "Add docstrings to classes: {}",
                classes_without_docs[..classes_without_docs.len().min(NAME_CAP)].join(", ")
            ),
            Category::Documentation,
            2,
        ));
    }

    improvements.push(Improvement::new(TYPING_ADVICE, Category::Typing, 3));
    improvements.push(Improvement::new(TESTING_ADVICE, Category::Testing, 1));
    improvements.push(Improvement::new(FORMATTING_ADVICE, Category::Style, 3));

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn suggest_for(source: &str) -> Vec<Improvement> {
        suggest(&parser::parse(source).expect("test source should parse"))
    }

    #[test]
    fn test_fixed_improvements_always_present() {
        let improvements = suggest_for("x = 1\n");
        assert_eq!(improvements.len(), 3);
        assert_eq!(improvements[0].category, Category::Typing);
        assert_eq!(improvements[0].priority, 3);
        assert_eq!(improvements[1].category, Category::Testing);
        assert_eq!(improvements[1].priority, 1);
        assert_eq!(improvements[2].category, Category::Style);
        assert_eq!(improvements[2].priority, 3);
    }

    #[test]
    fn test_undocumented_function_and_class() {
        let improvements = suggest_for("def f():\n    pass\n\nclass C:\n    pass\n");
        assert_eq!(improvements.len(), 5);
        assert!(improvements[0].description.contains("functions: f"));
        assert_eq!(improvements[0].category, Category::Documentation);
        assert_eq!(improvements[0].priority, 2);
        assert!(improvements[1].description.contains("classes: C"));
    }

    #[test]
    fn test_documented_definitions_not_listed() {
        let source = "\
def f():
    \"\"\"Documented.\"\"\"
    pass

class C:
    \"\"\"Documented.\"\"\"
    pass
";
        let improvements = suggest_for(source);
        assert_eq!(improvements.len(), 3);
        assert!(improvements
            .iter()
            .all(|i| i.category != Category::Documentation));
    }

    #[test]
    fn test_name_list_capped_at_three() {
        let source = "\
def a(): pass
def b(): pass
def c(): pass
def d(): pass
";
        let improvements = suggest_for(source);
        let docs = &improvements[0];
        assert!(docs.description.ends_with("a, b, c"));
        assert!(!docs.description.contains(", d"));
    }
}
