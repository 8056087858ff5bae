//! The page/parameter compatibility contract, one case per topic.
//!
//! Paths, key names, and key order are load-bearing: the destination
//! pages parse them. Each case pins the complete link.

use helplink::{EnclosingMethod, HelpTopic};
use rstest::rstest;

use crate::helpers::link_fixtures::{BASE, assembler, embedded_assembler};

#[rstest]
#[case::missing_dimension(
    HelpTopic::MissingDimension { type_name: "int".into(), var_name: "nums".into() },
    "incorrectdimensionexpression1?typename=int&arrname=nums"
)]
#[case::missing_first_dimension(
    HelpTopic::MissingFirstDimension { type_name: "String".into(), var_name: "words".into() },
    "incorrectdimensionexpression2?typename=String&arrname=words"
)]
#[case::extra_initializer(
    HelpTopic::ExtraInitializer { type_name: "float".into(), var_name: "scores".into() },
    "incorrectdimensionexpression3?typename=float&arrname=scores"
)]
#[case::incorrect_declaration(
    HelpTopic::IncorrectDeclaration { type_name: "float".into(), var_name: "scores".into() },
    "incorrectvariabledeclaration?typename=float&foundname=scores"
)]
#[case::missing_method(
    HelpTopic::MissingMethod {
        method_name: "tally".into(),
        return_type: "int".into(),
        provided_args: vec!["a".into(), "b".into()],
        provided_types: vec!["int".into(), "int".into()],
    },
    "methodnotfound?methodname=tally&correctmethodname=correctName&typename=int\
     &providedparams=a%2Cb&providedtypes=int%2Cint"
)]
#[case::parameter_mismatch(
    HelpTopic::ParameterMismatch {
        class_name: "Sketch".into(),
        method_name: "rect".into(),
        return_type: "void".into(),
        provided_types: vec!["int".into(), "Object".into()],
        required_types: vec!["float".into(), "float".into()],
    },
    "parametermismatch?classname=Sketch&methodname=rect&methodtypename=void\
     &providedtypes=int%2CObject&requiredtypes=float%2Cfloat"
)]
#[case::missing_return(
    HelpTopic::MissingReturn {
        method_name: "tally".into(),
        return_type: "int".into(),
        required_types: vec!["int".into(), "int".into()],
    },
    "returnmissing?methodname=tally&typename=int&requiredtypes=int%2Cint"
)]
#[case::type_mismatch(
    HelpTopic::TypeMismatch {
        provided_type: "String".into(),
        required_type: "int".into(),
        var_name: "count".into(),
    },
    "typemismatch?typeonename=String&typetwoname=int&varname=count"
)]
#[case::missing_type(
    HelpTopic::MissingType { type_name: "Strng".into(), var_name: "name".into() },
    "typenotfound?classname=Strng&correctclassname=CorrectName&varname=name"
)]
#[case::missing_variable(
    HelpTopic::MissingVariable { type_name: "int".into(), var_name: "count".into() },
    "variablenotfound?classname=int&varname=count"
)]
#[case::uninitialized_variable(
    HelpTopic::UninitializedVariable { var_name: "count".into(), type_name: "int".into() },
    "variablenotinit?varname=count&typename=int"
)]
#[case::unexpected_token(
    HelpTopic::UnexpectedToken { type_name: "int".into() },
    "unexpectedtoken?typename=int"
)]
#[case::non_static_from_static(
    HelpTopic::NonStaticFromStatic {
        method_name: "frameRate".into(),
        enclosing_method: Some(EnclosingMethod::new("settings", "void")),
        invoked_return_type: Some("float".into()),
        file_name: "Sketch".into(),
    },
    "nonstaticfromstatic?methodname=frameRate&staticmethodname=settings\
     &staticmethodreturntype=void&methodreturntype=float&filename=Sketch"
)]
#[case::variable_declarators(
    HelpTopic::VariableDeclarators { expr_text: "System.out".into(), type_name: "Object".into() },
    "syntaxerrorvariabledeclarators?methodonename=System.out&typename=Object"
)]
#[case::method_call_on_wrong_type(
    HelpTopic::MethodCallOnWrongType {
        method_name: "size".into(),
        return_type: "void".into(),
        type_name: "int".into(),
        var_text: "5".into(),
    },
    "methodcallonwrongtype?methodname=size&returntype=void&typename=int&varname=5"
)]
#[case::extra_closing_brace(
    HelpTopic::ExtraClosingBrace { original: "}\n}".into(), fixed: "}\n".into() },
    "extraneousclosingcurlybrace?original=%7D%0A%7D&fixed=%7D%0A"
)]
#[case::incorrect_method_declaration(
    HelpTopic::IncorrectMethodDeclaration { method_name: "draw".into() },
    "incorrectmethoddeclaration?methodname=draw"
)]
fn test_page_and_parameter_contract(#[case] topic: HelpTopic, #[case] expected: &str) {
    assert_eq!(assembler().assemble(&topic), format!("{BASE}{expected}"));
}

#[test]
fn test_embedded_links_end_with_the_globals() {
    let topic = HelpTopic::UnexpectedToken {
        type_name: "int".into(),
    };
    assert_eq!(
        embedded_assembler().assemble(&topic),
        format!("{BASE}unexpectedtoken?typename=int&embed=true&fontsize=12")
    );
    assert_eq!(
        embedded_assembler().default_link(),
        format!("{BASE}?embed=true&fontsize=12")
    );
}
