//! Link assembly tests
//!
//! The page/parameter compatibility contract and the embedded-page
//! globals.

pub mod tests_assembly;
