//! Tree-backed classification through the public API.
//!
//! The shared sketch exercises the realistic paths: resolved bindings,
//! a mix of resolved and unresolved names, and problems the compiler
//! locates at arguments, names, and whole declarations.

use helplink::base::span;
use helplink::{ChildRole, HelpTopic, NodeKind, Problem, ProblemCode, TreeBuilder, classify_problem};
use rstest::rstest;

use crate::helpers::sketch_fixtures::sketch;

#[test]
fn test_unresolved_argument_takes_the_parameter_type() {
    let fixture = sketch();
    let problem = Problem::with_args(
        ProblemCode::UnresolvedVariable,
        ["h"],
        fixture.unresolved_arg,
    );

    // `h` sits in the second slot of the resolved `rect(float, float)`.
    assert_eq!(
        classify_problem(&problem, &fixture.tree),
        Some(HelpTopic::MissingVariable {
            type_name: "float".into(),
            var_name: "h".into(),
        })
    );
}

#[test]
fn test_uninitialized_field_reports_the_declared_type() {
    let fixture = sketch();
    let problem = Problem::with_args(
        ProblemCode::UninitializedLocalVariable,
        ["count"],
        fixture.count_name,
    );

    assert_eq!(
        classify_problem(&problem, &fixture.tree),
        Some(HelpTopic::UninitializedVariable {
            var_name: "count".into(),
            type_name: "int".into(),
        })
    );
}

#[test]
fn test_parameter_mismatch_recovers_the_full_signature() {
    let fixture = sketch();
    let problem = Problem::with_args(ProblemCode::ParameterMismatch, ["Sketch"], span(73, 75));

    assert_eq!(
        classify_problem(&problem, &fixture.tree),
        Some(HelpTopic::ParameterMismatch {
            class_name: "Sketch".into(),
            method_name: "rect".into(),
            return_type: "void".into(),
            provided_types: vec!["int".into(), "Object".into()],
            required_types: vec!["float".into(), "float".into()],
        })
    );
}

#[test]
fn test_undefined_method_defaults_unresolved_slots() {
    let source = "tally(3);";
    let mut builder = TreeBuilder::new(NodeKind::Unit, source);
    let root = builder.root();
    let statement = builder.add_child(
        root,
        ChildRole::Child,
        NodeKind::ExpressionStatement,
        span(0, 9),
        source,
    );
    let call = builder.add_child(
        statement,
        ChildRole::Expression,
        NodeKind::MethodInvocation {
            name: "tally".into(),
        },
        span(0, 8),
        "tally(3)",
    );
    builder.add_child(call, ChildRole::Child, NodeKind::SimpleName, span(0, 5), "tally");
    let argument = builder.add_child(
        call,
        ChildRole::Argument,
        NodeKind::NumberLiteral,
        span(6, 7),
        "3",
    );
    builder.set_resolved_type(argument, "int");
    let tree = builder.finish();

    let problem = Problem::new(ProblemCode::UndefinedMethod, span(0, 5));

    // An undefined call resolves nothing, so every recovered type
    // degrades to Object.
    assert_eq!(
        classify_problem(&problem, &tree),
        Some(HelpTopic::MissingMethod {
            method_name: "tally".into(),
            return_type: "Object".into(),
            provided_args: vec!["3".into()],
            provided_types: vec!["Object".into()],
        })
    );
}

#[test]
fn test_insert_dimensions_points_at_the_declaration() {
    let source = "float[] scores = new float[];";
    let mut builder = TreeBuilder::new(NodeKind::Unit, source);
    let root = builder.root();
    let field = builder.add_child(
        root,
        ChildRole::Child,
        NodeKind::FieldDeclaration {
            type_name: "float[]".into(),
        },
        span(0, 29),
        source,
    );
    let fragment = builder.add_child(
        field,
        ChildRole::Fragment,
        NodeKind::VariableFragment {
            name: "scores".into(),
        },
        span(8, 28),
        "scores = new float[]",
    );
    builder.set_resolved_type(fragment, "float[]");
    builder.add_child(
        fragment,
        ChildRole::Child,
        NodeKind::ArrayCreation {
            type_name: "float[]".into(),
        },
        span(17, 28),
        "new float[]",
    );
    let tree = builder.finish();

    let problem = Problem::with_args(ProblemCode::InsertToComplete, [";", "Dimensions"], span(17, 28));

    assert_eq!(
        classify_problem(&problem, &tree),
        Some(HelpTopic::IncorrectDeclaration {
            type_name: "float".into(),
            var_name: "scores".into(),
        })
    );
}

#[rstest]
#[case::parameter_mismatch(ProblemCode::ParameterMismatch)]
#[case::type_mismatch(ProblemCode::TypeMismatch)]
#[case::return_type_mismatch(ProblemCode::ReturnTypeMismatch)]
#[case::undefined_type(ProblemCode::UndefinedType)]
#[case::unresolved_variable(ProblemCode::UnresolvedVariable)]
#[case::uninitialized_local(ProblemCode::UninitializedLocalVariable)]
#[case::static_method_requested(ProblemCode::StaticMethodRequested)]
#[case::delete_token(ProblemCode::DeleteToken)]
#[case::send_on_base_type(ProblemCode::MessageSendOnBaseType)]
#[case::send_on_array_type(ProblemCode::MessageSendOnArrayType)]
fn test_codes_with_missing_arguments_never_classify(#[case] code: ProblemCode) {
    let fixture = sketch();
    let problem = Problem::new(code, fixture.rect_call);

    assert_eq!(classify_problem(&problem, &fixture.tree), None);
}
