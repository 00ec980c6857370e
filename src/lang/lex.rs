use super::{ast::Condition, token::*, Column, Error};
use crate::error;
use crate::mach::Integer;

type Result<T> = std::result::Result<T, Error>;

/// Scan the whole source, returning every token before [`Token::Eof`].
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(s);
    let mut tokens = vec![];
    loop {
        match scanner.next()? {
            Token::Eof => return Ok(tokens),
            t => tokens.push(t),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy token stream over source text.
///
/// The only state is the cursor, so scanning again from the start is
/// done by building a fresh `Scanner` over the same text.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    col: Column,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            col: 0..0,
        }
    }

    /// Character span of the token most recently returned by `next`.
    pub fn column(&self) -> Column {
        self.col.clone()
    }

    pub fn peek(&mut self) -> Result<Token> {
        let saved_pos = self.pos;
        let saved_col = self.col.clone();
        let token = self.next();
        self.pos = saved_pos;
        self.col = saved_col;
        token
    }

    pub fn next(&mut self) -> Result<Token> {
        let source = self.source;
        loop {
            let rest = &source[self.pos..];
            if rest.is_empty() {
                let end = self.char_offset(self.pos);
                self.col = end..end;
                return Ok(Token::Eof);
            }
            if let Some(len) = self.skip(rest) {
                self.pos += len;
                continue;
            }
            let (len, token) = self.recognize(rest)?;
            let start = self.char_offset(self.pos);
            self.pos += len;
            self.col = start..start + rest[..len].chars().count();
            return Ok(token);
        }
    }

    /// Whitespace runs and comments produce no token.
    fn skip(&self, rest: &str) -> Option<usize> {
        let first = rest.chars().next()?;
        if is_whitespace(first) {
            return Some(rest.find(|c: char| !is_whitespace(c)).unwrap_or(rest.len()));
        }
        if first == '#' {
            return Some(rest.find('\n').unwrap_or(rest.len()));
        }
        None
    }

    /// First recognizer to match at the cursor wins.
    fn recognize(&self, rest: &str) -> Result<(usize, Token)> {
        for word in Word::ALL.iter() {
            if let Some(len) = keyword(rest, word.as_str()) {
                return Ok((len, Token::Word(*word)));
            }
        }
        if let Some((len, index)) = register(rest) {
            return Ok((len, Token::Register(index)));
        }
        if let Some(len) = number(rest) {
            return match rest[..len].parse::<Integer>() {
                Ok(n) => Ok((len, Token::Number(n))),
                Err(_) => {
                    let start = self.char_offset(self.pos);
                    let col = start..start + len;
                    Err(error!(Overflow, ..&col; &format!("INTEGER {} OUT OF RANGE", &rest[..len])))
                }
            };
        }
        for cond in ["zero", "pos", "neg"].iter() {
            if let Some(len) = keyword(rest, cond) {
                if let Some(c) = Condition::from_str(cond) {
                    return Ok((len, Token::Condition(c)));
                }
            }
        }
        if rest.starts_with(',') {
            return Ok((1, Token::Comma));
        }
        Err(self.illegal_character(rest))
    }

    fn illegal_character(&self, rest: &str) -> Error {
        let ch = rest.chars().next().unwrap_or_default();
        let start = self.char_offset(self.pos);
        let col = start..start + 1;
        error!(IllegalCharacter, ..&col; &format!("{:?} AT POSITION {}", ch, start))
    }

    fn char_offset(&self, byte_pos: usize) -> usize {
        self.source[..byte_pos].chars().count()
    }
}

/// `word` followed by a word boundary.
fn keyword(rest: &str, word: &str) -> Option<usize> {
    if !rest.starts_with(word) {
        return None;
    }
    match rest[word.len()..].chars().next() {
        Some(c) if is_word_char(c) => None,
        _ => Some(word.len()),
    }
}

/// `r0` through `r15` followed by a word boundary.
fn register(rest: &str) -> Option<(usize, u8)> {
    let mut chars = rest.chars();
    if chars.next()? != 'r' {
        return None;
    }
    let first = chars.next()?.to_digit(10)?;
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {
            let second = c.to_digit(10)?;
            if first != 1 || second > 5 {
                return None;
            }
            match chars.next() {
                Some(c) if is_word_char(c) => None,
                _ => Some((3, (10 + second) as u8)),
            }
        }
        Some(c) if is_word_char(c) => None,
        _ => Some((2, first as u8)),
    }
}

/// Optional `-` then one or more ASCII digits.
fn number(rest: &str) -> Option<usize> {
    let sign = if rest.starts_with('-') { 1 } else { 0 };
    let digits = rest[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len() - sign);
    if digits == 0 {
        None
    } else {
        Some(sign + digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_boundary() {
        assert_eq!(keyword("LOAD r1", "LOAD"), Some(4));
        assert_eq!(keyword("LOAD,", "LOAD"), Some(4));
        assert_eq!(keyword("LOAD", "LOAD"), Some(4));
        assert_eq!(keyword("LOADED", "LOAD"), None);
        assert_eq!(keyword("LOAD_1", "LOAD"), None);
        assert_eq!(keyword("load", "LOAD"), None);
    }

    #[test]
    fn test_register_forms() {
        assert_eq!(register("r0"), Some((2, 0)));
        assert_eq!(register("r9,"), Some((2, 9)));
        assert_eq!(register("r10 "), Some((3, 10)));
        assert_eq!(register("r15"), Some((3, 15)));
        assert_eq!(register("r16"), None);
        assert_eq!(register("r20"), None);
        assert_eq!(register("r05"), None);
        assert_eq!(register("r1x"), None);
        assert_eq!(register("r"), None);
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(number("42,"), Some(2));
        assert_eq!(number("-17"), Some(3));
        assert_eq!(number("-"), None);
        assert_eq!(number("-x"), None);
        assert_eq!(number("x1"), None);
    }

    #[test]
    fn test_columns_count_characters() {
        let mut s = Scanner::new("# é\nCP");
        assert_eq!(s.next(), Ok(Token::Word(Word::Cp)));
        assert_eq!(s.column(), 4..6);
    }
}
