//! Python parser adapter built on tree-sitter
//!
//! Converts raw source text into the crate's own [`SyntaxTree`] or a
//! [`SyntaxFault`]. The tree-sitter types never escape this module: on
//! success callers get the tagged tree, on failure a normalized fault with
//! the 1-based failing line.

use crate::models::{Issue, IssueType, Severity};
use crate::tree::{CallTarget, ClassInfo, FunctionInfo, NodeKind, SyntaxNode, SyntaxTree};
use thiserror::Error;
use tracing::debug;
use tree_sitter::Node;

/// Typed fault for unparsable input. Distinct from an empty success so
/// callers can tell "no syntax issue" from "could not parse".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error at line {line}: {message}")]
pub struct SyntaxFault {
    /// 1-based line of the first parse error.
    pub line: u32,
    pub message: String,
}

impl SyntaxFault {
    /// Map the fault to the single CRITICAL/SYNTAX issue it represents.
    pub fn to_issue(&self) -> Issue {
        Issue::new(self.to_string(), Severity::Critical, IssueType::Syntax)
            .with_line(self.line)
    }
}

/// Parse Python source into a tagged syntax tree.
///
/// Any failure, including a parser that cannot be constructed, is reported
/// as a `SyntaxFault`; the native tree-sitter error types stay internal.
pub fn parse(source: &str) -> Result<SyntaxTree, SyntaxFault> {
    let mut parser = tree_sitter::Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    if parser.set_language(&language.into()).is_err() {
        return Err(SyntaxFault {
            line: 1,
            message: "parser initialization failed".to_string(),
        });
    }

    let tree = match parser.parse(source, None) {
        Some(tree) => tree,
        None => {
            return Err(SyntaxFault {
                line: 1,
                message: "parsing was cancelled".to_string(),
            })
        }
    };

    let root = tree.root_node();
    if root.has_error() {
        let fault = first_error(&root).unwrap_or(SyntaxFault {
            line: 1,
            message: "invalid syntax".to_string(),
        });
        debug!(line = fault.line, "parse failed: {}", fault.message);
        return Err(fault);
    }

    Ok(SyntaxTree {
        root: convert(&root, source.as_bytes()),
    })
}

/// Locate the first ERROR or MISSING node in source order.
fn first_error(root: &Node) -> Option<SyntaxFault> {
    let mut cursor = root.walk();
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "invalid syntax".to_string()
            };
            return Some(SyntaxFault {
                line: node.start_position().row as u32 + 1,
                message,
            });
        }
        // Reverse push keeps source order while popping.
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    None
}

/// Convert a tree-sitter node into the tagged tree. Comments are dropped;
/// decorated definitions are unwrapped to the definition itself.
fn convert(node: &Node, source: &[u8]) -> SyntaxNode {
    if node.kind() == "decorated_definition" {
        if let Some(inner) = node.child_by_field_name("definition") {
            return convert(&inner, source);
        }
    }

    let kind = classify(node, source);
    let children = if matches!(kind, NodeKind::ExceptHandler) {
        convert_handler_children(node, source)
    } else {
        convert_children(node, source)
    };

    SyntaxNode {
        kind,
        line_start: node.start_position().row as u32 + 1,
        line_end: node.end_position().row as u32 + 1,
        children,
    }
}

fn convert_children(node: &Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut children = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        children.push(convert(&child, source));
    }
    children
}

/// Handler bodies written inline (`except Exception: pass`) carry their
/// statements directly instead of a block node. Wrap everything after the
/// colon in a synthetic block so the handler shape is uniform.
fn convert_handler_children(node: &Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut cursor = node.walk();
    let has_block = node.named_children(&mut cursor).any(|c| c.kind() == "block");
    if has_block {
        return convert_children(node, source);
    }

    let colon_end = node
        .children(&mut cursor)
        .find(|c| c.kind() == ":")
        .map(|c| c.end_byte());
    let Some(colon_end) = colon_end else {
        return convert_children(node, source);
    };

    let mut children = Vec::new();
    let mut body = Vec::new();
    let mut body_span: Option<(u32, u32)> = None;
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        let converted = convert(&child, source);
        if child.start_byte() >= colon_end {
            body_span = Some(match body_span {
                Some((start, _)) => (start, converted.line_end),
                None => (converted.line_start, converted.line_end),
            });
            body.push(converted);
        } else {
            children.push(converted);
        }
    }

    let (line_start, line_end) =
        body_span.unwrap_or((node.end_position().row as u32 + 1, node.end_position().row as u32 + 1));
    children.push(SyntaxNode {
        kind: NodeKind::Block,
        line_start,
        line_end,
        children: body,
    });
    children
}

fn classify(node: &Node, source: &[u8]) -> NodeKind {
    match node.kind() {
        "module" => NodeKind::Module,
        "function_definition" => NodeKind::Function(FunctionInfo {
            name: field_text(node, "name", source),
            param_count: count_positional_params(node),
            has_docstring: body_has_docstring(node),
        }),
        "class_definition" => NodeKind::Class(ClassInfo {
            name: field_text(node, "name", source),
            has_docstring: body_has_docstring(node),
        }),
        "except_clause" | "except_group_clause" => NodeKind::ExceptHandler,
        "call" => NodeKind::Call(call_target(node, source)),
        "pass_statement" => NodeKind::Noop,
        "expression_statement" if is_bare_ellipsis(node) => NodeKind::Noop,
        "block" => NodeKind::Block,
        _ => NodeKind::Other,
    }
}

fn field_text(node: &Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(source).ok())
        .unwrap_or_default()
        .to_string()
}

/// Count positional parameters, `self`/`cls` included. Splats and the `/`
/// separator are skipped, and counting stops at the keyword-only boundary
/// (a bare `*` or `*args`).
fn count_positional_params(func: &Node) -> usize {
    let Some(params) = func.child_by_field_name("parameters") else {
        return 0;
    };
    let mut cursor = params.walk();
    let mut count = 0;
    for p in params.named_children(&mut cursor) {
        match p.kind() {
            "keyword_separator" | "list_splat_pattern" => break,
            "identifier" | "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                count += 1;
            }
            _ => {}
        }
    }
    count
}

/// True when the first statement of the definition body is a string literal.
fn body_has_docstring(def: &Node) -> bool {
    let Some(body) = def.child_by_field_name("body") else {
        return false;
    };
    let Some(first) = body.named_child(0) else {
        return false;
    };
    first.kind() == "expression_statement"
        && first.named_child(0).is_some_and(|e| e.kind() == "string")
}

fn call_target(call: &Node, source: &[u8]) -> CallTarget {
    match call.child_by_field_name("function") {
        Some(f) if f.kind() == "identifier" => {
            CallTarget::Name(f.utf8_text(source).unwrap_or_default().to_string())
        }
        Some(f) if f.kind() == "attribute" => CallTarget::Qualified,
        _ => CallTarget::Other,
    }
}

fn is_bare_ellipsis(stmt: &Node) -> bool {
    stmt.named_child_count() == 1 && stmt.named_child(0).is_some_and(|e| e.kind() == "ellipsis")
}
