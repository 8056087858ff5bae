//! Problem values as delivered by the compiler collaborator.

use smol_str::SmolStr;

use crate::base::Span;

use super::ProblemCode;

/// One compiler-reported problem in a compiled unit.
///
/// Immutable value: a [`ProblemCode`], the code-dependent argument
/// strings, and the byte span of the problem in the unit source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Enumerated problem kind.
    pub code: ProblemCode,
    /// Ordered free-text arguments; their meaning depends on `code`.
    pub arguments: Vec<SmolStr>,
    /// Source span the compiler attached to the problem.
    pub span: Span,
}

impl Problem {
    /// Create a problem with no arguments.
    pub fn new(code: ProblemCode, span: Span) -> Self {
        Self {
            code,
            arguments: Vec::new(),
            span,
        }
    }

    /// Create a problem with arguments.
    pub fn with_args(
        code: ProblemCode,
        arguments: impl IntoIterator<Item = impl Into<SmolStr>>,
        span: Span,
    ) -> Self {
        Self {
            code,
            arguments: arguments.into_iter().map(Into::into).collect(),
            span,
        }
    }

    /// Argument at `index`, if the compiler supplied that many.
    ///
    /// Classification reads arguments through this accessor so a
    /// malformed problem (fewer arguments than its code implies) skips
    /// cleanly instead of panicking.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(SmolStr::as_str)
    }

    /// Check whether any argument equals `value` exactly.
    pub fn has_argument(&self, value: &str) -> bool {
        self.arguments.iter().any(|argument| argument == value)
    }
}
