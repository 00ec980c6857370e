use super::ast::{Condition, Register};
use crate::mach::Integer;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Word(Word),
    Register(u8),
    Number(Integer),
    Condition(Condition),
    Comma,
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{}", w),
            Token::Register(r) => write!(f, "{}", Register(*r)),
            Token::Number(n) => write!(f, "{}", n),
            Token::Condition(c) => write!(f, "{}", c),
            Token::Comma => write!(f, ","),
            Token::Eof => write!(f, "END OF INPUT"),
        }
    }
}

/// Instruction keywords, in the order the scanner tries them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Cp,
    Load,
    Store,
    Add,
    Mul,
    Sub,
    Read,
    Write,
    Jump,
}

impl Word {
    pub const ALL: [Word; 9] = [
        Word::Cp,
        Word::Load,
        Word::Store,
        Word::Add,
        Word::Mul,
        Word::Sub,
        Word::Read,
        Word::Write,
        Word::Jump,
    ];

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Cp => "CP",
            Load => "LOAD",
            Store => "STORE",
            Add => "ADD",
            Mul => "MUL",
            Sub => "SUB",
            Read => "READ",
            Write => "WRITE",
            Jump => "JUMP",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
