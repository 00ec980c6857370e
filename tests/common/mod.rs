#![allow(dead_code)]
use bytecode::lang::{assemble, Error};
use bytecode::mach::{Integer, LineConsole, Runtime};

pub fn runtime(source: &str) -> Runtime {
    Runtime::new(assemble(source).expect("program should assemble"))
}

/// Run `source` to completion with `input` on stdin, returning the
/// finished runtime and everything written.
pub fn exec(source: &str, input: &str) -> (Runtime, String) {
    let mut r = runtime(source);
    let mut console = LineConsole::new(input.as_bytes(), Vec::new());
    if let Err(error) = r.run(&mut console) {
        panic!("unexpected {}", error);
    }
    let (_, out) = console.into_inner();
    (r, String::from_utf8(out).unwrap())
}

/// Run `source`, expecting it to fail, returning the error and anything
/// written before the failure.
pub fn exec_err(source: &str, input: &str) -> (Error, String) {
    let mut r = runtime(source);
    let mut console = LineConsole::new(input.as_bytes(), Vec::new());
    let error = r.run(&mut console).expect_err("program should fail");
    let (_, out) = console.into_inner();
    (error, String::from_utf8(out).unwrap())
}

pub fn reg(r: &Runtime, index: usize) -> Integer {
    r.registers().as_slice()[index]
}
