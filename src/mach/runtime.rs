use super::{Address, Console, Integer, Location, Memory, Registers, State};
use crate::error;
use crate::lang::ast::{Instruction, Program};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Result of a bounded [`Runtime::execute`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    /// The cycle allowance ran out and the program can continue.
    Running,
    /// The program counter left the program or the machine was halted.
    Stopped,
}

/// ## Execution engine
///
/// Owns the machine state for a single run of one program. There is no
/// halt instruction; a run ends when the program counter leaves the
/// program, either by falling off the end or through a taken `JUMP` to
/// an address outside it.
pub struct Runtime {
    program: Program,
    state: State,
    pc: Integer,
    running: bool,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            state: State::default(),
            pc: 0,
            running: true,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn pc(&self) -> Integer {
        self.pc
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    /// The instruction `step` would execute, if any.
    pub fn next_instruction(&self) -> Option<&Instruction> {
        if !self.running {
            return None;
        }
        self.fetch_address().and_then(|a| self.program.get(a))
    }

    /// Halt the machine from outside, e.g. on CTRL-C.
    pub fn interrupt(&mut self) -> Error {
        self.running = false;
        match self.fetch_address() {
            Some(address) => error!(Break, address),
            None => error!(Break),
        }
    }

    /// Run until the program stops.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        while self.step(console)? {}
        Ok(())
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, console: &mut dyn Console, cycles: usize) -> Result<Event> {
        for _ in 0..cycles {
            if !self.step(console)? {
                return Ok(Event::Stopped);
            }
        }
        if self.next_instruction().is_some() {
            Ok(Event::Running)
        } else {
            self.running = false;
            Ok(Event::Stopped)
        }
    }

    /// Execute one instruction. Returns `false` once there is nothing
    /// left to do.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<bool> {
        let (address, instruction) = match self.fetch_address() {
            Some(address) if self.running => (address, self.program.instructions()[address]),
            _ => {
                self.running = false;
                return Ok(false);
            }
        };
        self.pc += 1;
        if let Err(error) = self.dispatch(instruction, console) {
            self.running = false;
            return Err(error.in_address(address));
        }
        Ok(true)
    }

    /// A negative or too large program counter is outside the program.
    fn fetch_address(&self) -> Option<Address> {
        if self.pc < 0 {
            return None;
        }
        let address = self.pc as Address;
        if address < self.program.len() {
            Some(address)
        } else {
            None
        }
    }

    fn dispatch(&mut self, instruction: Instruction, console: &mut dyn Console) -> Result<()> {
        use Instruction::*;
        let state = &mut self.state;
        match instruction {
            Copy { src, dst } => {
                let value = state.value(src)?;
                Location::from(dst).store(state, value)?;
            }
            Load { addr, dst } => {
                let value = Location::resolve(addr).fetch(state)?;
                Location::from(dst).store(state, value)?;
            }
            Store { src, addr } => {
                let value = state.value(src)?;
                Location::resolve(addr).store(state, value)?;
            }
            Arith { op, lhs, rhs, dst } => {
                let value = op.apply(state.value(lhs)?, state.value(rhs)?);
                Location::from(dst).store(state, value)?;
            }
            Read { dst } => {
                let value = console.read_integer()?;
                Location::from(dst).store(state, value)?;
            }
            Write { src } => {
                console.write_integer(state.value(src)?)?;
            }
            Jump { cond, src, addr } => {
                if cond.holds(state.value(src)?) {
                    self.pc = state.value(addr)?;
                }
            }
        }
        Ok(())
    }
}
