use super::Integer;
use crate::error;
use crate::lang::Error;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

/// The outside world as seen by `READ` and `WRITE`.
pub trait Console {
    /// Block until one integer is available.
    fn read_integer(&mut self) -> Result<Integer>;
    fn write_integer(&mut self, value: Integer) -> Result<()>;
}

/// Parse one line of input as a signed integer.
pub fn parse_integer(line: &str) -> Result<Integer> {
    let s = line.trim();
    match s.parse::<Integer>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(IllegalInput; &format!("EXPECTED INTEGER, FOUND {:?}", s))),
    }
}

/// Line oriented console: one integer per input line, one integer per
/// output line.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> LineConsole<R, W> {
        LineConsole {
            reader,
            writer,
            line: String::new(),
        }
    }
    pub fn writer(&self) -> &W {
        &self.writer
    }
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_integer(&mut self) -> Result<Integer> {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => Err(error!(InputPastEnd)),
            Ok(_) => parse_integer(&self.line),
            Err(e) => Err(error!(IllegalInput; &e.to_string())),
        }
    }

    fn write_integer(&mut self, value: Integer) -> Result<()> {
        match writeln!(self.writer, "{}", value).and_then(|_| self.writer.flush()) {
            Ok(()) => Ok(()),
            Err(e) => Err(error!(OutputError; &e.to_string())),
        }
    }
}
