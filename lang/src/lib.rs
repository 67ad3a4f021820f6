//! Routing Policy Specification Language (RPSL) toolchain.
//!
//! RPSL is the line-oriented, colon-delimited text format Internet routing registries use to
//! describe maintainers, contacts, autonomous systems, and routing policy. This crate contains
//! tools for RPSL object analysis, starting with a lexer that turns a single RPSL object into a
//! stream of typed, position-annotated tokens.
//!

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod toolchain;
