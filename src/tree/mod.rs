//! Language-neutral syntax tree for one compiled unit.
//!
//! The tree is an arena of nodes with parent links stored as indices:
//! the surrounding compilation pipeline builds it once per unit with
//! [`TreeBuilder`], and the classifier only ever reads it — locating a
//! node by span with [`SyntaxTree::node_at`], then walking strictly
//! upward through [`SyntaxTree::self_and_ancestors`].
//!
//! ## Key Types
//!
//! - [`SyntaxTree`] — the immutable arena, read-only after [`TreeBuilder::finish`]
//! - [`NodeId`] — index of a node, minted only by the builder
//! - [`NodeKind`] — tagged variant over the node shapes the classifier inspects
//! - [`ChildRole`] — typed child slots ("left operand", "arguments list")
//! - [`MethodBinding`] — resolved method signature, present only when
//!   semantic resolution succeeded

mod builder;
mod node;

pub use builder::TreeBuilder;
pub use node::{ChildRole, InfixOp, MethodBinding, NodeId, NodeKind, PostfixOp, PrefixOp};

use node::NodeData;

use crate::base::Span;

/// An immutable, parent-linked syntax tree for one compiled unit.
///
/// Ascending from any node is O(depth); no lookup panics for ids minted
/// by this tree's builder.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub(crate) fn from_nodes(nodes: Vec<NodeData>) -> Self {
        Self { nodes }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// The unit root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Kind tag of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.data(id).kind
    }

    /// Source span of a node.
    pub fn span(&self, id: NodeId) -> Span {
        self.data(id).span
    }

    /// Source text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.data(id).text
    }

    /// Resolved semantic type, when binding resolution succeeded.
    pub fn resolved_type(&self, id: NodeId) -> Option<&str> {
        self.data(id).resolved_type.as_deref()
    }

    /// Resolved method signature, when binding resolution succeeded.
    pub fn method_binding(&self, id: NodeId) -> Option<&MethodBinding> {
        self.data(id).method_binding.as_ref()
    }

    /// Parent of a node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    /// The node itself, then its parents up to the root.
    pub fn self_and_ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&node| self.parent(node))
    }

    /// First child with the given role.
    pub fn child(&self, id: NodeId, role: ChildRole) -> Option<NodeId> {
        self.children_with_role(id, role).next()
    }

    /// All children with the given role, in insertion order.
    pub fn children_with_role(
        &self,
        id: NodeId,
        role: ChildRole,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.data(id)
            .children
            .iter()
            .filter(move |(child_role, _)| *child_role == role)
            .map(|(_, child)| *child)
    }

    /// All children regardless of role, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.data(id).children.iter().map(|(_, child)| *child)
    }

    /// Deepest node whose span contains `target`.
    ///
    /// This is the host-facing `nodeAt(start, end)` lookup: descend from
    /// the root, preferring the first child that covers the range, until
    /// no child does. Returns `None` when not even the root covers the
    /// range (a stale or out-of-unit position).
    pub fn node_at(&self, target: Span) -> Option<NodeId> {
        let mut current = self.root();
        if !self.span(current).contains_range(target) {
            return None;
        }
        'descend: loop {
            for child in self.children(current) {
                if self.span(child).contains_range(target) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }
}
