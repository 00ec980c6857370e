use crate::mach::{Address, Integer};

/// ## Instruction set
///
/// Every instruction carries exactly the operands its grammar allows.
/// A slot typed [`Register`] only ever holds a register; a slot typed
/// [`Operand`] holds either a register or a literal.
///
/// For example: `ADD r1, 2, r3` parses to
/// `Arith { op: Add, lhs: Register(r1), rhs: Literal(2), dst: r3 }`

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction {
    /// `CP src, dst`
    Copy { src: Operand, dst: Register },
    /// `LOAD addr, dst`
    Load { addr: Operand, dst: Register },
    /// `STORE src, addr`
    Store { src: Operand, addr: Operand },
    /// `ADD | SUB | MUL lhs, rhs, dst`
    Arith {
        op: ArithOp,
        lhs: Operand,
        rhs: Operand,
        dst: Register,
    },
    /// `READ dst`
    Read { dst: Register },
    /// `WRITE src`
    Write { src: Operand },
    /// `JUMP cond, src, addr`
    Jump {
        cond: Condition,
        src: Operand,
        addr: Operand,
    },
}

impl Instruction {
    pub fn is_jump(&self) -> bool {
        matches!(self, Instruction::Jump { .. })
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Copy { src, dst } => write!(f, "CP {},{}", src, dst),
            Load { addr, dst } => write!(f, "LOAD {},{}", addr, dst),
            Store { src, addr } => write!(f, "STORE {},{}", src, addr),
            Arith { op, lhs, rhs, dst } => write!(f, "{} {},{},{}", op, lhs, rhs, dst),
            Read { dst } => write!(f, "READ {}", dst),
            Write { src } => write!(f, "WRITE {}", src),
            Jump { cond, src, addr } => write!(f, "JUMP {},{},{}", cond, src, addr),
        }
    }
}

/// Identity of one of the sixteen machine registers.
///
/// The scanner only produces `r0` through `r15`. A hand-built
/// instruction may name any index; the runtime rejects those.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Register(pub u8);

impl Register {
    pub const COUNT: usize = 16;

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    Register(Register),
    /// An immediate value, or a memory address when used as a target.
    Literal(Integer),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{}", r),
            Operand::Literal(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Condition {
    Zero,
    Pos,
    Neg,
}

impl Condition {
    pub fn from_str(s: &str) -> Option<Condition> {
        match s {
            "zero" => Some(Condition::Zero),
            "pos" => Some(Condition::Pos),
            "neg" => Some(Condition::Neg),
            _ => None,
        }
    }

    pub fn holds(self, value: Integer) -> bool {
        match self {
            Condition::Zero => value == 0,
            Condition::Pos => value > 0,
            Condition::Neg => value < 0,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Condition::Zero => write!(f, "zero"),
            Condition::Pos => write!(f, "pos"),
            Condition::Neg => write!(f, "neg"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl ArithOp {
    /// Two's complement arithmetic; overflow wraps instead of trapping.
    pub fn apply(self, lhs: Integer, rhs: Integer) -> Integer {
        match self {
            ArithOp::Add => lhs.wrapping_add(rhs),
            ArithOp::Sub => lhs.wrapping_sub(rhs),
            ArithOp::Mul => lhs.wrapping_mul(rhs),
        }
    }
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "ADD"),
            ArithOp::Sub => write!(f, "SUB"),
            ArithOp::Mul => write!(f, "MUL"),
        }
    }
}

/// Parsed instructions in source order. The index of an instruction
/// is its jump address.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Program {
        Program { instructions }
    }
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction)
    }
    pub fn len(&self) -> usize {
        self.instructions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
    pub fn get(&self, address: Address) -> Option<&Instruction> {
        self.instructions.get(address)
    }
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program::new(instructions)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (address, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{:>4} {}", address, instruction)?;
        }
        Ok(())
    }
}
