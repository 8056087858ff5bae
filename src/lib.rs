//! # helplink
//!
//! Core library for classifying compiler problems from sketch-style
//! Java editors and assembling the parameterized help-page links that
//! explain them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! hints     → Link selection facade (one link per compiled unit)
//!   ↓
//! link      → LinkConfig/LinkAssembler, page paths and parameters
//!   ↓
//! classify  → Problem classifier, type inference, HelpTopic
//!   ↓
//! problem   → Problem values, ProblemCode
//!   ↓
//! tree      → Language-neutral syntax tree (arena, roles, bindings)
//!   ↓
//! text      → Char-level source scanners (braces, declarators)
//!   ↓
//! base      → Primitives (Span, Offset)
//! ```

// ============================================================================
// MODULES (dependency order: base → text → tree → problem → classify → link → hints)
// ============================================================================

/// Foundation types: Span, Offset
pub mod base;

/// Char-level source scanners: brace matching, declarator splitting, identifiers
pub mod text;

/// Language-neutral syntax tree: arena storage, child roles, resolved bindings
pub mod tree;

/// Compiler problems: ProblemCode, Problem values
pub mod problem;

/// Classification: dispatch over problem codes, context recovery, type inference
pub mod classify;

/// Link assembly: validated config, page paths, ordered encoded parameters
pub mod link;

/// Facade: pick the one help link for a compiled unit
pub mod hints;

// Re-export the facade entry point
pub use hints::link_for_unit;

// Re-export commonly needed types
pub use base::{Offset, Span};
pub use classify::{EnclosingMethod, HelpTopic, classify_message, classify_problem};
pub use link::{ConfigError, LinkAssembler, LinkConfig};
pub use problem::{Problem, ProblemCode};
pub use tree::{
    ChildRole, InfixOp, MethodBinding, NodeId, NodeKind, PostfixOp, PrefixOp, SyntaxTree,
    TreeBuilder,
};
