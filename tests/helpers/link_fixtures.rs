//! Assembler construction shared across the suite.

use helplink::{LinkAssembler, LinkConfig};

/// Base address every fixture link starts from.
pub const BASE: &str = "http://help.example/";

/// Assembler for standalone pages: no global parameters.
pub fn assembler() -> LinkAssembler {
    LinkAssembler::new(LinkConfig::new(BASE, false, 12).expect("fixture config is valid"))
}

/// Assembler for embedded pages: links end with `embed=true&fontsize=12`.
pub fn embedded_assembler() -> LinkAssembler {
    LinkAssembler::new(LinkConfig::new(BASE, true, 12).expect("fixture config is valid"))
}
