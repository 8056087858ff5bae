//! Upward tree walks that recover declaration context near a problem node.

use smol_str::SmolStr;

use crate::tree::{ChildRole, NodeId, NodeKind, SyntaxTree};

/// Nearest node, starting at `start` itself, whose kind satisfies
/// `matches`.
pub(crate) fn find_ancestor(
    tree: &SyntaxTree,
    start: NodeId,
    matches: impl Fn(&NodeKind) -> bool,
) -> Option<NodeId> {
    tree.self_and_ancestors(start)
        .find(|&node| matches(tree.kind(node)))
}

/// Nearest enclosing declaration fragment.
///
/// Ascends from `start`: a variable fragment answers itself, while a
/// field or local declaration answers its first fragment child. All
/// fragments of one declaration share a type, so the first serves as
/// the example.
pub(crate) fn find_declaration_fragment(tree: &SyntaxTree, start: NodeId) -> Option<NodeId> {
    for node in tree.self_and_ancestors(start) {
        match tree.kind(node) {
            NodeKind::VariableFragment { .. } => return Some(node),
            NodeKind::FieldDeclaration { .. } | NodeKind::LocalDeclaration { .. } => {
                return tree.child(node, ChildRole::Fragment);
            }
            _ => {}
        }
    }
    None
}

/// Declared name of a fragment node.
pub(crate) fn fragment_name(tree: &SyntaxTree, fragment: NodeId) -> Option<SmolStr> {
    match tree.kind(fragment) {
        NodeKind::VariableFragment { name } => Some(name.clone()),
        _ => None,
    }
}
