//! Expression-type inference by upward walk.
//!
//! When a problem leaves a hole in the source (a missing variable, an
//! unknown method), the surrounding expression is the best evidence of
//! what type the user intended. The walk ascends from the problem node
//! and lets the first ancestor with an inference rule decide; it never
//! fails, degrading to `"Object"` when nothing matches or semantic
//! resolution is unavailable.

use smol_str::SmolStr;
use tracing::trace;

use crate::text::element_type;
use crate::tree::{ChildRole, InfixOp, NodeId, NodeKind, PrefixOp, SyntaxTree};

/// Default type when no rule applies or resolution is unavailable.
pub(crate) const OBJECT: &str = "Object";

/// Infer the type of the expression context nearest to `start`.
///
/// The first node in `start`'s ancestor chain (including `start`
/// itself) whose kind has a rule decides; proximity, not rule order,
/// breaks ties. `missing_name` seeds invocation-argument matching:
/// when the walk reaches a resolved method invocation, an argument
/// textually equal to `missing_name` answers with the declared
/// parameter type at that position.
pub fn infer_type(missing_name: &str, start: NodeId, tree: &SyntaxTree) -> SmolStr {
    for node in tree.self_and_ancestors(start) {
        if let Some(inferred) = type_from_node(missing_name, node, tree) {
            trace!(
                "[INFER] name='{}' decided by {:?} -> {}",
                missing_name,
                tree.kind(node),
                inferred
            );
            return inferred;
        }
    }
    trace!("[INFER] name='{}' no matching ancestor", missing_name);
    SmolStr::new(OBJECT)
}

/// Apply the inference rule for one node kind, if it has one.
fn type_from_node(missing_name: &str, node: NodeId, tree: &SyntaxTree) -> Option<SmolStr> {
    let inferred = match tree.kind(node) {
        NodeKind::PrefixExpr(op) => match op {
            PrefixOp::Not => SmolStr::new("boolean"),
            // The other unary operators also apply to floating-point
            // values, but all of them apply to integers.
            _ => SmolStr::new("int"),
        },
        NodeKind::InfixExpr(op) => infix_type(*op, node, tree),
        // The only postfix operators are increment and decrement.
        NodeKind::PostfixExpr(_) => SmolStr::new("int"),
        NodeKind::ConditionalExpr => SmolStr::new("boolean"),
        NodeKind::InstanceOfExpr => SmolStr::new(OBJECT),
        NodeKind::VariableFragment { .. } => resolved_or_object(node, tree),
        NodeKind::MethodInvocation { .. } => invocation_param_type(missing_name, node, tree),
        NodeKind::ArrayCreation { .. } | NodeKind::ArrayAccess => SmolStr::new("int"),
        NodeKind::ArrayInitializer => match tree.resolved_type(node) {
            Some(array_type) => SmolStr::new(element_type(array_type)),
            None => SmolStr::new(OBJECT),
        },
        NodeKind::CastExpr { target_type } => target_type.clone(),
        NodeKind::Assignment => resolved_or_object(node, tree),
        NodeKind::ExpressionStatement => match tree.child(node, ChildRole::Expression) {
            Some(inner) => resolved_or_object(inner, tree),
            None => SmolStr::new(OBJECT),
        },
        NodeKind::CharLiteral => SmolStr::new("char"),
        NodeKind::BooleanLiteral => SmolStr::new("boolean"),
        NodeKind::StringLiteral => SmolStr::new("String"),
        NodeKind::NullLiteral => SmolStr::new(OBJECT),
        NodeKind::NumberLiteral => resolved_or_object(node, tree),
        _ => return None,
    };
    Some(inferred)
}

/// Infix rule: prefer a resolved operand type (left first), then fall
/// back on the operator class.
fn infix_type(op: InfixOp, node: NodeId, tree: &SyntaxTree) -> SmolStr {
    let operand_type = tree
        .child(node, ChildRole::LeftOperand)
        .and_then(|left| tree.resolved_type(left))
        .or_else(|| {
            tree.child(node, ChildRole::RightOperand)
                .and_then(|right| tree.resolved_type(right))
        });
    if let Some(resolved) = operand_type {
        return SmolStr::new(resolved);
    }

    if op.is_conditional() {
        SmolStr::new("boolean")
    } else if op.is_numeric() {
        SmolStr::new("int")
    } else {
        // No type information at all; assume boolean.
        SmolStr::new("boolean")
    }
}

/// Invocation rule: match `missing_name` against the call's arguments
/// and answer with the declared parameter type at that position.
fn invocation_param_type(missing_name: &str, node: NodeId, tree: &SyntaxTree) -> SmolStr {
    let Some(binding) = tree.method_binding(node) else {
        return SmolStr::new(OBJECT);
    };
    let position = tree
        .children_with_role(node, ChildRole::Argument)
        .position(|argument| tree.text(argument) == missing_name);
    match position.and_then(|index| binding.param_types.get(index)) {
        Some(param_type) => param_type.clone(),
        None => SmolStr::new(OBJECT),
    }
}

fn resolved_or_object(node: NodeId, tree: &SyntaxTree) -> SmolStr {
    match tree.resolved_type(node) {
        Some(resolved) => SmolStr::new(resolved),
        None => SmolStr::new(OBJECT),
    }
}
