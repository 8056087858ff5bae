//! Foundation types for the help-link engine.
//!
//! This module provides the span primitives used throughout the crate:
//! - [`Span`], [`Offset`] - Source positions (byte offsets into one compiled unit)
//!
//! All positions in this crate are byte offsets into the source text of the
//! compiled unit being analyzed, represented with the `text-size` types.
//! This module has NO dependencies on other helplink modules.

/// A byte-offset range in the compiled unit's source.
pub type Span = text_size::TextRange;

/// A byte offset into the compiled unit's source.
pub type Offset = text_size::TextSize;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

/// Build a span from raw byte offsets.
///
/// Convenience for host integrations and tests; equivalent to
/// `TextRange::new(start.into(), end.into())`.
pub fn span(start: u32, end: u32) -> Span {
    TextRange::new(TextSize::new(start), TextSize::new(end))
}
