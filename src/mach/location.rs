use super::{Integer, State};
use crate::lang::ast::{Operand, Register};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// A settable place in the machine.
///
/// Resolving an operand as a target never yields a constant: a register
/// names its slot and a literal names the memory cell at that address.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Location {
    RegisterSlot(Register),
    MemoryCell(Integer),
}

impl Location {
    pub fn resolve(operand: Operand) -> Location {
        match operand {
            Operand::Register(r) => Location::RegisterSlot(r),
            Operand::Literal(address) => Location::MemoryCell(address),
        }
    }

    pub fn fetch(self, state: &State) -> Result<Integer> {
        match self {
            Location::RegisterSlot(r) => state.registers.get(r),
            Location::MemoryCell(address) => Ok(state.memory.get(address)),
        }
    }

    pub fn store(self, state: &mut State, value: Integer) -> Result<()> {
        match self {
            Location::RegisterSlot(r) => state.registers.set(r, value),
            Location::MemoryCell(address) => {
                state.memory.set(address, value);
                Ok(())
            }
        }
    }
}

impl From<Register> for Location {
    fn from(register: Register) -> Self {
        Location::RegisterSlot(register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_memory_cell() {
        let mut s = State::default();
        let loc = Location::resolve(Operand::Literal(-40));
        assert_eq!(loc, Location::MemoryCell(-40));
        loc.store(&mut s, 5).unwrap();
        assert_eq!(s.memory.get(-40), 5);
        assert_eq!(loc.fetch(&s), Ok(5));
    }

    #[test]
    fn test_register_is_slot() {
        let mut s = State::default();
        let loc = Location::resolve(Operand::Register(Register(4)));
        loc.store(&mut s, 11).unwrap();
        assert_eq!(s.registers.get(Register(4)), Ok(11));
        assert!(s.memory.is_empty());
    }
}
