//! Explicit syntax tree produced by the parser adapter
//!
//! Detection rules pattern-match on `NodeKind` instead of inspecting the
//! underlying tree-sitter nodes, so the rest of the crate never touches the
//! parser's own types.

/// Target of a call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallTarget {
    /// Direct unqualified call, e.g. `eval(...)`.
    Name(String),
    /// Attribute access, e.g. `obj.eval(...)` or `module.fn(...)`.
    Qualified,
    /// Anything else (subscripts, call results, lambdas).
    Other,
}

/// Signature facts extracted from a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    /// Count of positional parameters, including `self`/`cls`.
    pub param_count: usize,
    pub has_docstring: bool,
}

/// Facts extracted from a class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: String,
    pub has_docstring: bool,
}

/// Tagged node kind. Kinds the rules do not care about collapse to `Other`,
/// but their children are still converted so traversal sees every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    Function(FunctionInfo),
    Class(ClassInfo),
    ExceptHandler,
    Call(CallTarget),
    /// A statement with no effect: `pass` or a bare `...`.
    Noop,
    Block,
    Other,
}

/// A node in the converted syntax tree. Lines are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub line_start: u32,
    pub line_end: u32,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Number of source lines the node's span covers beyond its first line.
    pub fn span_lines(&self) -> u32 {
        self.line_end.saturating_sub(self.line_start)
    }

    /// Pre-order traversal visiting every node exactly once.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Iterator over a subtree in pre-order.
pub struct Walk<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse so children come out in source order.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A parsed source file: the converted tree plus nothing else. The original
/// text is not retained here; callers keep it if they need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Walk every node in the tree, root included.
    pub fn walk(&self) -> Walk<'_> {
        self.root.walk()
    }

    /// Direct children of the module node, decorated definitions unwrapped
    /// by the parser adapter. Used for top-level docstring checks.
    pub fn top_level(&self) -> &[SyntaxNode] {
        &self.root.children
    }
}
