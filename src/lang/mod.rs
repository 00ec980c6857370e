/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the
assembly language. Source text goes through a [`Scanner`] and a single
forward pass of [`parse`] to become an [`ast::Program`].

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Scanner;
pub use parse::assemble;
pub use parse::parse;

pub mod ast;
pub mod token;
