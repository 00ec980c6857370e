/*!
## Rust Machine Module

This Rust module is the register machine that runs a parsed program:
sixteen registers, a sparse memory and a program counter.

*/

/// Instruction index into a program.
pub type Address = usize;
/// Machine word for registers, memory cells and literals.
pub type Integer = i64;

mod console;
mod location;
mod memory;
mod runtime;
mod state;

pub use console::parse_integer;
pub use console::Console;
pub use console::LineConsole;
pub use location::Location;
pub use memory::Memory;
pub use runtime::Event;
pub use runtime::Runtime;
pub use state::Registers;
pub use state::State;
