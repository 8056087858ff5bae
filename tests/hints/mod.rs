//! Facade tests
//!
//! One help link per compiled unit, default link included.

pub mod tests_selection;
