//! Classification of compiler problems into help topics.
//!
//! The classifier takes one compiler-reported [`Problem`] together with
//! the unit's [`SyntaxTree`] and decides which pre-authored explanation
//! page fits, recovering the page's parameters from the tree: declared
//! names from enclosing fragments, types from the surrounding
//! expression, signatures from resolved bindings.
//!
//! Classification is total: structural mismatches and unknown codes
//! yield `None`, unresolved semantic lookups degrade to a default type,
//! and nothing here panics on malformed input.

mod context;
mod infer;
mod message;
mod topic;


pub use infer::infer_type;
pub use message::classify_message;
pub use topic::{EnclosingMethod, HelpTopic};

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::problem::{Problem, ProblemCode};
use crate::text::{element_type, is_identifier, trim_type};
use crate::tree::{ChildRole, NodeId, NodeKind, SyntaxTree};

use context::{find_ancestor, find_declaration_fragment, fragment_name};
use infer::OBJECT;

/// Classify one problem against the tree of its compiled unit.
///
/// Returns `None` when the problem's code has no page, when its span is
/// outside the tree, or when the surrounding structure does not match
/// what the code implies (a mislocated problem, typically).
pub fn classify_problem(problem: &Problem, tree: &SyntaxTree) -> Option<HelpTopic> {
    let Some(node) = tree.node_at(problem.span) else {
        trace!(
            "[CLASSIFY] {} at {:?}: no covering node",
            problem.code, problem.span
        );
        return None;
    };
    trace!(
        "[CLASSIFY] {} at {:?} on {:?}",
        problem.code,
        problem.span,
        tree.kind(node)
    );

    let topic = match problem.code {
        ProblemCode::MissingArrayDimension => missing_dimension(tree, node),
        ProblemCode::IllegalArrayDimension => missing_first_dimension(tree, node),
        ProblemCode::DimensionWithInitializer => extra_initializer(tree, node),
        ProblemCode::UndefinedMethod => missing_method(tree, node),
        ProblemCode::ParameterMismatch => parameter_mismatch(problem, tree, node),
        ProblemCode::ShouldReturnValue => missing_return(tree, node),
        ProblemCode::TypeMismatch | ProblemCode::ReturnTypeMismatch => {
            type_mismatch(problem, tree, node)
        }
        ProblemCode::UndefinedType => missing_type(problem, tree, node),
        ProblemCode::UnresolvedVariable => missing_variable(problem, tree, node),
        ProblemCode::UninitializedLocalVariable => uninitialized_variable(problem, tree, node),
        ProblemCode::StaticMethodRequested => non_static_from_static(problem, tree, node),
        ProblemCode::UndefinedField | ProblemCode::UndefinedName => {
            variable_declarators(tree, node)
        }
        ProblemCode::InsertToComplete => insert_to_complete(problem, tree, node),
        ProblemCode::DeleteToken => problem.argument(0).and_then(unexpected_token_topic),
        ProblemCode::MessageSendOnBaseType | ProblemCode::MessageSendOnArrayType => {
            method_call_on_wrong_type(problem, tree, node)
        }
    };

    match &topic {
        Some(topic) => debug!("[CLASSIFY] {} -> page '{}'", problem.code, topic.page()),
        None => debug!("[CLASSIFY] {} -> no topic", problem.code),
    }
    topic
}

/// Array creation with neither dimensions nor an initializer. The
/// problem node's own text names the type.
fn missing_dimension(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let fragment = find_declaration_fragment(tree, node)?;
    let var_name = fragment_name(tree, fragment)?;
    Some(HelpTopic::MissingDimension {
        type_name: SmolStr::new(trim_type(tree.text(node))),
        var_name,
    })
}

fn missing_first_dimension(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let (type_name, var_name) = array_creation_context(tree, node)?;
    Some(HelpTopic::MissingFirstDimension {
        type_name,
        var_name,
    })
}

fn extra_initializer(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let (type_name, var_name) = array_creation_context(tree, node)?;
    Some(HelpTopic::ExtraInitializer {
        type_name,
        var_name,
    })
}

/// Element type and declared name for a problem inside an array
/// creation. The parent must be the creation itself.
fn array_creation_context(tree: &SyntaxTree, node: NodeId) -> Option<(SmolStr, SmolStr)> {
    let parent = tree.parent(node)?;
    let NodeKind::ArrayCreation { type_name } = tree.kind(parent) else {
        return None;
    };
    let fragment = find_declaration_fragment(tree, node)?;
    let var_name = fragment_name(tree, fragment)?;
    let element = SmolStr::new(trim_type(&element_type(type_name)));
    Some((element, var_name))
}

/// Call to a method that does not exist. The problem node is the
/// method name; its parent must be the invocation.
fn missing_method(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let parent = tree.parent(node)?;
    let NodeKind::MethodInvocation { name } = tree.kind(parent) else {
        return None;
    };

    let provided_args: Vec<SmolStr> = tree
        .children_with_role(parent, ChildRole::Argument)
        .map(|argument| SmolStr::new(tree.text(argument)))
        .collect();

    // The call itself is every argument's nearest context here, and an
    // undefined method has no binding, so each slot gets the default.
    let slot_type = SmolStr::new(trim_type(&infer_type("", parent, tree)));
    let provided_types = vec![slot_type; provided_args.len()];

    let return_type = match tree.parent(parent) {
        Some(grandparent) => SmolStr::new(trim_type(&infer_type("", grandparent, tree))),
        None => SmolStr::new(OBJECT),
    };

    Some(HelpTopic::MissingMethod {
        method_name: name.clone(),
        return_type,
        provided_args,
        provided_types,
    })
}

/// Call whose arguments do not fit the resolved signature. Needs both
/// the enclosing invocation and its binding.
fn parameter_mismatch(problem: &Problem, tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let class_name = SmolStr::new(problem.argument(0)?);
    let parent = tree.parent(node)?;
    let NodeKind::MethodInvocation { name } = tree.kind(parent) else {
        return None;
    };
    let binding = tree.method_binding(parent)?;

    let provided_types: Vec<SmolStr> = tree
        .children_with_role(parent, ChildRole::Argument)
        .map(|argument| SmolStr::new(trim_type(&infer_type("", argument, tree))))
        .collect();
    let required_types: Vec<SmolStr> = binding
        .param_types
        .iter()
        .map(|required| SmolStr::new(trim_type(required)))
        .collect();

    Some(HelpTopic::ParameterMismatch {
        class_name,
        method_name: name.clone(),
        return_type: SmolStr::new(trim_type(&binding.return_type)),
        provided_types,
        required_types,
    })
}

/// Non-void method that can finish without returning. The problem node
/// sits directly under the method declaration.
fn missing_return(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let parent = tree.parent(node)?;
    let NodeKind::MethodDeclaration { name, return_type } = tree.kind(parent) else {
        return None;
    };
    let binding = tree.method_binding(parent)?;

    let required_types: Vec<SmolStr> = binding
        .param_types
        .iter()
        .map(|required| SmolStr::new(trim_type(required)))
        .collect();

    Some(HelpTopic::MissingReturn {
        method_name: name.clone(),
        return_type: SmolStr::new(trim_type(return_type)),
        required_types,
    })
}

fn type_mismatch(problem: &Problem, tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let provided_type = SmolStr::new(trim_type(problem.argument(0)?));
    let required_type = SmolStr::new(trim_type(problem.argument(1)?));
    Some(HelpTopic::TypeMismatch {
        provided_type,
        required_type,
        var_name: example_var_name(tree, node),
    })
}

fn missing_type(problem: &Problem, tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let type_name = SmolStr::new(trim_type(problem.argument(0)?));
    Some(HelpTopic::MissingType {
        type_name,
        var_name: example_var_name(tree, node),
    })
}

/// Nearest declared name, with a placeholder when no declaration
/// encloses the node. All fragments of one declaration share a type,
/// so the first is as good an example as any.
fn example_var_name(tree: &SyntaxTree, node: NodeId) -> SmolStr {
    find_declaration_fragment(tree, node)
        .and_then(|fragment| fragment_name(tree, fragment))
        .unwrap_or_else(|| SmolStr::new("example"))
}

fn missing_variable(problem: &Problem, tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let var_name = SmolStr::new(problem.argument(0)?);
    let type_name = inferred_from_parent(&var_name, tree, node);
    Some(HelpTopic::MissingVariable {
        type_name,
        var_name,
    })
}

fn uninitialized_variable(
    problem: &Problem,
    tree: &SyntaxTree,
    node: NodeId,
) -> Option<HelpTopic> {
    let var_name = SmolStr::new(problem.argument(0)?);
    let type_name = inferred_from_parent(&var_name, tree, node);
    Some(HelpTopic::UninitializedVariable {
        var_name,
        type_name,
    })
}

/// Inference seeded just above the node, so the node's own kind does
/// not answer for itself.
fn inferred_from_parent(missing_name: &str, tree: &SyntaxTree, node: NodeId) -> SmolStr {
    match tree.parent(node) {
        Some(parent) => SmolStr::new(trim_type(&infer_type(missing_name, parent, tree))),
        None => SmolStr::new(OBJECT),
    }
}

/// Non-static method called from a static context. The enclosing
/// declaration and any resolved enclosing invocation are optional
/// extras for the page.
fn non_static_from_static(
    problem: &Problem,
    tree: &SyntaxTree,
    node: NodeId,
) -> Option<HelpTopic> {
    let file_name = SmolStr::new(problem.argument(0)?);
    let method_name = SmolStr::new(problem.argument(1)?);

    let enclosing_method = find_ancestor(tree, node, |kind| {
        matches!(kind, NodeKind::MethodDeclaration { .. })
    })
    .and_then(|declaration| match tree.kind(declaration) {
        NodeKind::MethodDeclaration { name, return_type } => {
            Some(EnclosingMethod::new(name.clone(), trim_type(return_type)))
        }
        _ => None,
    });

    let invoked_return_type = find_ancestor(tree, node, |kind| {
        matches!(kind, NodeKind::MethodInvocation { .. })
    })
    .and_then(|invocation| tree.method_binding(invocation))
    .map(|binding| SmolStr::new(trim_type(&binding.return_type)));

    Some(HelpTopic::NonStaticFromStatic {
        method_name,
        enclosing_method,
        invoked_return_type,
        file_name,
    })
}

/// Statement that starts like an expression where the parser wanted
/// declarators, e.g. a bare call at class level.
fn variable_declarators(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    // A qualified name reads better whole than as its last segment.
    let expr_text = match tree.parent(node) {
        Some(parent) if matches!(tree.kind(parent), NodeKind::QualifiedName) => tree.text(parent),
        _ => tree.text(node),
    };
    Some(HelpTopic::VariableDeclarators {
        expr_text: SmolStr::new(expr_text),
        type_name: inferred_from_parent("", tree, node),
    })
}

/// Sub-dispatch for parser "insert X to complete Y" repairs, which
/// cover several distinct mistakes.
fn insert_to_complete(problem: &Problem, tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    if problem.has_argument("VariableDeclarators") {
        return variable_declarators(tree, node);
    }

    let parent = tree.parent(node);
    let grandparent = parent.and_then(|parent| tree.parent(parent));

    let parent_is_creation =
        parent.is_some_and(|parent| matches!(tree.kind(parent), NodeKind::ArrayCreation { .. }));
    let grandparent_is_access = grandparent
        .is_some_and(|grandparent| matches!(tree.kind(grandparent), NodeKind::ArrayAccess));
    let parent_is_array_field = parent.is_some_and(|parent| match tree.kind(parent) {
        NodeKind::FieldDeclaration { type_name } => type_name.ends_with("[]"),
        _ => false,
    });
    if parent_is_creation
        || grandparent_is_access
        || problem.has_argument("Dimensions")
        || parent_is_array_field
    {
        return incorrect_declaration(tree, node);
    }

    // Broken control structures usually report on the statement or just
    // inside it, and the stray value is almost always integer-related.
    let near_control_statement = [Some(node), parent, grandparent]
        .into_iter()
        .flatten()
        .any(|nearby| tree.kind(nearby).is_control_statement());
    if near_control_statement {
        return unexpected_token_topic("int");
    }

    None
}

/// Malformed array declaration. The declared element type comes from
/// the fragment's resolved type with one dimension stripped.
fn incorrect_declaration(tree: &SyntaxTree, node: NodeId) -> Option<HelpTopic> {
    let fragment = find_declaration_fragment(tree, node)?;
    let var_name = fragment_name(tree, fragment)?;
    let type_name = match tree.resolved_type(fragment) {
        Some(resolved) => SmolStr::new(trim_type(&element_type(resolved))),
        None => SmolStr::new(OBJECT),
    };
    Some(HelpTopic::IncorrectDeclaration {
        type_name,
        var_name,
    })
}

/// Identifier-looking tokens only; stray punctuation says nothing
/// useful about the mistake.
pub(crate) fn unexpected_token_topic(token: &str) -> Option<HelpTopic> {
    if !is_identifier(token) {
        return None;
    }
    Some(HelpTopic::UnexpectedToken {
        type_name: SmolStr::new(trim_type(token)),
    })
}

/// Method invoked on a primitive or array value.
fn method_call_on_wrong_type(
    problem: &Problem,
    tree: &SyntaxTree,
    node: NodeId,
) -> Option<HelpTopic> {
    let type_name = SmolStr::new(trim_type(problem.argument(0)?));
    let method_name = SmolStr::new(problem.argument(1)?);

    let invocation = find_ancestor(tree, node, |kind| {
        matches!(kind, NodeKind::MethodInvocation { .. })
    });

    // A bare expression statement around an unresolved call is a good
    // sign the value is discarded. The exact return type is not the
    // crux of this error, so "void" is close enough there.
    let return_type = match invocation {
        None => SmolStr::new("void"),
        Some(invocation) => match tree.parent(invocation) {
            None => SmolStr::new(OBJECT),
            Some(parent) => {
                let discarded = matches!(tree.kind(parent), NodeKind::ExpressionStatement)
                    && tree
                        .child(parent, ChildRole::Expression)
                        .and_then(|inner| tree.resolved_type(inner))
                        .is_none();
                if discarded {
                    SmolStr::new("void")
                } else {
                    SmolStr::new(trim_type(&infer_type("", parent, tree)))
                }
            }
        },
    };

    Some(HelpTopic::MethodCallOnWrongType {
        method_name,
        return_type,
        type_name,
        var_text: SmolStr::new(tree.text(node)),
    })
}
