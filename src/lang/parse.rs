use super::{ast::*, lex::Scanner, token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Scan and parse source text in one go.
pub fn assemble(source: &str) -> Result<Program> {
    parse(&mut Scanner::new(source))
}

pub fn parse(scanner: &mut Scanner) -> Result<Program> {
    Parser::parse(scanner)
}

struct Parser<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'s, 'a> Parser<'s, 'a> {
    fn parse(scanner: &'s mut Scanner<'a>) -> Result<Program> {
        let mut parse = Parser { scanner };
        let mut program = Program::default();
        loop {
            match parse.scanner.next()? {
                Token::Eof => return Ok(program),
                Token::Word(word) => program.push(parse.instruction(word)?),
                t => return Err(parse.unexpected("INSTRUCTION", &t)),
            }
        }
    }

    fn instruction(&mut self, word: Word) -> Result<Instruction> {
        use Word::*;
        Ok(match word {
            Cp => {
                let src = self.value()?;
                self.comma()?;
                let dst = self.register()?;
                Instruction::Copy { src, dst }
            }
            Load => {
                let addr = self.value()?;
                self.comma()?;
                let dst = self.register()?;
                Instruction::Load { addr, dst }
            }
            Store => {
                let src = self.value()?;
                self.comma()?;
                let addr = self.value()?;
                Instruction::Store { src, addr }
            }
            Add | Mul | Sub => {
                let lhs = self.value()?;
                self.comma()?;
                let rhs = self.value()?;
                self.comma()?;
                let dst = self.register()?;
                let op = match word {
                    Add => ArithOp::Add,
                    Mul => ArithOp::Mul,
                    _ => ArithOp::Sub,
                };
                Instruction::Arith { op, lhs, rhs, dst }
            }
            Read => Instruction::Read {
                dst: self.register()?,
            },
            Write => Instruction::Write { src: self.value()? },
            Jump => {
                let cond = self.condition()?;
                self.comma()?;
                let src = self.value()?;
                self.comma()?;
                let addr = self.value()?;
                Instruction::Jump { cond, src, addr }
            }
        })
    }

    fn value(&mut self) -> Result<Operand> {
        match self.scanner.next()? {
            Token::Register(r) => Ok(Operand::Register(Register(r))),
            Token::Number(n) => Ok(Operand::Literal(n)),
            t => Err(self.unexpected("VALUE", &t)),
        }
    }

    fn register(&mut self) -> Result<Register> {
        match self.scanner.next()? {
            Token::Register(r) => Ok(Register(r)),
            t => Err(self.unexpected("REGISTER", &t)),
        }
    }

    fn condition(&mut self) -> Result<Condition> {
        match self.scanner.next()? {
            Token::Condition(c) => Ok(c),
            t => Err(self.unexpected("CONDITION", &t)),
        }
    }

    fn comma(&mut self) -> Result<()> {
        match self.scanner.next()? {
            Token::Comma => Ok(()),
            t => Err(self.unexpected("COMMA", &t)),
        }
    }

    fn unexpected(&self, expected: &str, found: &Token) -> Error {
        let msg = format!("EXPECTED {}, FOUND {}", expected, found);
        error!(SyntaxError, ..&self.scanner.column(); &msg)
    }
}
