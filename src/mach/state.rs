use super::{Integer, Memory};
use crate::error;
use crate::lang::ast::{Operand, Register};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Register file, all zero at power on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Registers {
    slots: [Integer; Register::COUNT],
}

impl Registers {
    pub fn get(&self, register: Register) -> Result<Integer> {
        match self.slots.get(register.index()) {
            Some(v) => Ok(*v),
            None => Err(out_of_range(register)),
        }
    }
    pub fn set(&mut self, register: Register, value: Integer) -> Result<()> {
        match self.slots.get_mut(register.index()) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(out_of_range(register)),
        }
    }
    pub fn as_slice(&self) -> &[Integer] {
        &self.slots
    }
}

fn out_of_range(register: Register) -> Error {
    error!(InternalError; &format!("REGISTER {} OUT OF RANGE", register))
}

/// Everything an instruction can read or write.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    pub registers: Registers,
    pub memory: Memory,
}

impl State {
    /// A register reads its content; a literal reads as itself.
    pub fn value(&self, operand: Operand) -> Result<Integer> {
        match operand {
            Operand::Register(r) => self.registers.get(r),
            Operand::Literal(n) => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_bounds() {
        let mut r = Registers::default();
        assert_eq!(r.set(Register(15), 3), Ok(()));
        assert_eq!(r.get(Register(15)), Ok(3));
        let e = r.get(Register(16)).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::InternalError);
        assert!(r.set(Register(200), 1).is_err());
    }

    #[test]
    fn test_value() {
        let mut s = State::default();
        s.registers.set(Register(2), -9).unwrap();
        assert_eq!(s.value(Operand::Register(Register(2))), Ok(-9));
        assert_eq!(s.value(Operand::Literal(-9)), Ok(-9));
    }
}
