//! # Bytecode
//!
//! A tiny assembly language for a sixteen register machine.
//!
//! Source text is scanned into tokens, parsed in a single pass into a
//! program, and the program is run by an interpreter.
//! ```text
//! READ r1          # ask for a number
//! MUL r1, 2, r2
//! WRITE r2         # print it doubled
//! ```
//!
//! Run a file with `bytecode program.asm`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
