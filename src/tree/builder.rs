//! Construction of syntax trees by the host's parsing pipeline.

use smol_str::SmolStr;

use crate::base::{Span, TextSize};

use super::node::{ChildRole, MethodBinding, NodeData, NodeId, NodeKind};
use super::SyntaxTree;

/// Builds an immutable [`SyntaxTree`] one node at a time.
///
/// The builder is the only way to mint [`NodeId`]s; parent links and
/// role-tagged child lists are maintained as nodes are added, so the
/// finished tree needs no fixup pass.
///
/// # Example
/// ```
/// use helplink::tree::{ChildRole, NodeKind, TreeBuilder};
/// use helplink::base::span;
///
/// let mut builder = TreeBuilder::new(NodeKind::Unit, "int x = 1;");
/// let root = builder.root();
/// let fragment = builder.add_child(
///     root,
///     ChildRole::Fragment,
///     NodeKind::VariableFragment { name: "x".into() },
///     span(4, 9),
///     "x = 1",
/// );
/// builder.set_resolved_type(fragment, "int");
/// let tree = builder.finish();
/// assert_eq!(tree.resolved_type(fragment), Some("int"));
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    /// Seed the tree with its root node, spanning the whole unit text.
    pub fn new(kind: NodeKind, text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        let span = Span::new(TextSize::new(0), TextSize::of(text.as_str()));
        Self {
            nodes: vec![NodeData::new(kind, span, text, None)],
        }
    }

    /// The root node seeded by [`TreeBuilder::new`].
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Add a child node under `parent` with the given role.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        role: ChildRole,
        kind: NodeKind,
        span: Span,
        text: impl Into<SmolStr>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(NodeData::new(kind, span, text.into(), Some(parent)));
        self.nodes[parent.index()].children.push((role, id));
        id
    }

    /// Attach a resolved semantic type to a node.
    ///
    /// Hosts call this only when binding resolution succeeded; nodes
    /// without a resolved type degrade to defaults during inference.
    pub fn set_resolved_type(&mut self, id: NodeId, type_name: impl Into<SmolStr>) {
        self.nodes[id.index()].resolved_type = Some(type_name.into());
    }

    /// Attach a resolved method signature to an invocation or
    /// declaration node.
    pub fn set_method_binding(&mut self, id: NodeId, binding: MethodBinding) {
        self.nodes[id.index()].method_binding = Some(binding);
    }

    /// Freeze the arena into an immutable tree.
    pub fn finish(self) -> SyntaxTree {
        SyntaxTree::from_nodes(self.nodes)
    }
}
