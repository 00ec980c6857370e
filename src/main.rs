//! # Bytecode
//!
//! Runs an assembly source file on the register machine.
//!

mod term;

fn main() {
    term::main()
}
