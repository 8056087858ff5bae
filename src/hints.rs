//! Link selection facade.
//!
//! The one call a host editor makes after a compile pass: feed in the
//! unit's problems and recovered tree, get back the address of the
//! explanation page to surface.

use tracing::debug;

use crate::base::Offset;
use crate::classify::classify_problem;
use crate::link::LinkAssembler;
use crate::problem::Problem;
use crate::tree::SyntaxTree;

/// Pick the help link for one compiled unit.
///
/// Problems positioned before `unit_start` sit in generated preamble
/// the author never wrote and are skipped. The remaining problems are
/// classified in order and the first classifiable one decides the
/// link; when none classifies, the assembler's default link stands in.
///
/// Callers must supply problems ordered by source position, since the
/// order decides which problem wins.
pub fn link_for_unit(
    problems: &[Problem],
    tree: &SyntaxTree,
    unit_start: Offset,
    assembler: &LinkAssembler,
) -> String {
    debug_assert!(
        problems
            .windows(2)
            .all(|pair| pair[0].span.start() <= pair[1].span.start()),
        "problems must be ordered by source position"
    );

    let topic = problems
        .iter()
        .filter(|problem| problem.span.start() >= unit_start)
        .find_map(|problem| classify_problem(problem, tree));

    match topic {
        Some(topic) => {
            debug!("[HINTS] selected page '{}'", topic.page());
            assembler.assemble(&topic)
        }
        None => {
            debug!("[HINTS] no problem classified, using the default link");
            assembler.default_link()
        }
    }
}
