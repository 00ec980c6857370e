use super::Column;
use crate::mach::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Attach the address of the instruction that failed. An address
    /// already present is kept since it came from a more precise site.
    pub fn in_address(mut self, address: Address) -> Error {
        if self.address.is_none() {
            self.address = Some(address);
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        self.column = column.clone();
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.to_string();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IllegalCharacter,
    Overflow,
    SyntaxError,
    InternalError,
    InputPastEnd,
    IllegalInput,
    OutputError,
    Break,
    FileNotFound,
    FileError,
}

impl ErrorCode {
    /// Lexical and syntax errors point into the source text.
    pub fn is_source_error(self) -> bool {
        use ErrorCode::*;
        matches!(self, IllegalCharacter | Overflow | SyntaxError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            IllegalCharacter => "ILLEGAL CHARACTER",
            Overflow => "OVERFLOW",
            SyntaxError => "SYNTAX ERROR",
            InternalError => "INTERNAL ERROR",
            InputPastEnd => "INPUT PAST END",
            IllegalInput => "ILLEGAL INPUT",
            OutputError => "OUTPUT ERROR",
            Break => "BREAK",
            FileNotFound => "FILE NOT FOUND",
            FileError => "FILE ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" {}", address));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)
        } else if suffix.starts_with(';') {
            write!(f, "{}{}", self.code, suffix)
        } else {
            write!(f, "{} IN{}", self.code, suffix)
        }
    }
}
