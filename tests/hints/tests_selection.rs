//! Link selection for a whole compiled unit.

use helplink::{Offset, Problem, ProblemCode, link_for_unit};

use crate::helpers::link_fixtures::{BASE, assembler, embedded_assembler};
use crate::helpers::sketch_fixtures::sketch;

#[test]
fn test_first_classifiable_problem_decides_the_link() {
    let fixture = sketch();
    let problems = [
        // Mislocated: the field is not inside a method, so this one
        // yields nothing and the next problem is tried.
        Problem::new(ProblemCode::ShouldReturnValue, fixture.field_decl),
        Problem::with_args(
            ProblemCode::UnresolvedVariable,
            ["h"],
            fixture.unresolved_arg,
        ),
    ];

    assert_eq!(
        link_for_unit(&problems, &fixture.tree, Offset::new(0), &assembler()),
        format!("{BASE}variablenotfound?classname=float&varname=h")
    );
}

#[test]
fn test_problems_before_the_unit_start_are_skipped() {
    let fixture = sketch();
    let problems = [
        Problem::with_args(
            ProblemCode::UninitializedLocalVariable,
            ["count"],
            fixture.count_name,
        ),
        Problem::with_args(
            ProblemCode::UnresolvedVariable,
            ["h"],
            fixture.unresolved_arg,
        ),
    ];

    // From the top of the unit the field problem wins.
    assert_eq!(
        link_for_unit(&problems, &fixture.tree, Offset::new(0), &assembler()),
        format!("{BASE}variablenotinit?varname=count&typename=int")
    );

    // From the first method on, it is out of range.
    assert_eq!(
        link_for_unit(&problems, &fixture.tree, fixture.setup_offset, &assembler()),
        format!("{BASE}variablenotfound?classname=float&varname=h")
    );
}

#[test]
fn test_unclassifiable_batch_falls_back_to_the_default_link() {
    let fixture = sketch();
    let problems = [Problem::new(ProblemCode::ShouldReturnValue, fixture.field_decl)];

    assert_eq!(
        link_for_unit(
            &problems,
            &fixture.tree,
            Offset::new(0),
            &embedded_assembler()
        ),
        format!("{BASE}?embed=true&fontsize=12")
    );
}
