//! Compiler problem codes and values
//!
//! The input side of classification: an enumerated [`ProblemCode`] for
//! each diagnostic kind the engine understands, and the immutable
//! [`Problem`] value the host hands over per reported diagnostic.

mod codes;
mod problem;

pub use codes::ProblemCode;
pub use problem::Problem;
