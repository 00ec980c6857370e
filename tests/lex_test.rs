use bytecode::lang::ast::Condition;
use bytecode::lang::token::{Token, Word};
use bytecode::lang::{lex, ErrorCode, Scanner};

fn token(s: &str) -> Option<Token> {
    let mut tokens = lex(s).ok()?;
    if tokens.len() == 1 {
        tokens.pop()
    } else {
        None
    }
}

#[test]
fn test_instruction_words() {
    let v = lex("CP LOAD STORE ADD MUL SUB READ WRITE JUMP").unwrap();
    let words: Vec<Token> = Word::ALL.iter().map(|w| Token::Word(*w)).collect();
    assert_eq!(v, words);
}

#[test]
fn test_words_are_case_sensitive() {
    let e = lex("cp 1,r1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::IllegalCharacter);
}

#[test]
fn test_word_needs_boundary() {
    assert_eq!(lex("LOADX").unwrap_err().code(), ErrorCode::IllegalCharacter);
    assert_eq!(
        lex("CP,").unwrap(),
        vec![Token::Word(Word::Cp), Token::Comma]
    );
}

#[test]
fn test_registers() {
    let v = lex("r0 r1 r9 r10 r15").unwrap();
    assert_eq!(
        v,
        vec![
            Token::Register(0),
            Token::Register(1),
            Token::Register(9),
            Token::Register(10),
            Token::Register(15),
        ]
    );
}

#[test]
fn test_register_out_of_range() {
    for s in ["r16", "r20", "CP 1, r16", "WRITE r20"].iter() {
        let e = lex(s).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalCharacter, "{}", s);
    }
}

#[test]
fn test_numbers() {
    assert_eq!(token("42"), Some(Token::Number(42)));
    assert_eq!(token("-17"), Some(Token::Number(-17)));
    assert_eq!(token("0"), Some(Token::Number(0)));
    assert_eq!(token("-0"), Some(Token::Number(0)));
    assert_eq!(token("999"), Some(Token::Number(999)));
    assert_eq!(
        token("-9223372036854775808"),
        Some(Token::Number(i64::MIN))
    );
}

#[test]
fn test_number_overflow() {
    let e = lex("CP 9223372036854775808, r1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Overflow);
    assert_eq!(e.column(), 3..22);
}

#[test]
fn test_conditions() {
    let v = lex("zero pos neg").unwrap();
    assert_eq!(
        v,
        vec![
            Token::Condition(Condition::Zero),
            Token::Condition(Condition::Pos),
            Token::Condition(Condition::Neg),
        ]
    );
    assert_eq!(lex("zeros").unwrap_err().code(), ErrorCode::IllegalCharacter);
}

#[test]
fn test_comments_and_whitespace() {
    let v = lex("LOAD r1, -42 # This is a comment\nJUMP zero, r15").unwrap();
    assert_eq!(
        v,
        vec![
            Token::Word(Word::Load),
            Token::Register(1),
            Token::Comma,
            Token::Number(-42),
            Token::Word(Word::Jump),
            Token::Condition(Condition::Zero),
            Token::Comma,
            Token::Register(15),
        ]
    );
    assert_eq!(lex("  # only a comment").unwrap(), vec![]);
    assert_eq!(lex("\t\r\n").unwrap(), vec![]);
}

#[test]
fn test_empty() {
    assert_eq!(lex("").unwrap(), vec![]);
}

#[test]
fn test_eof_repeats() {
    let mut s = Scanner::new("WRITE 1");
    assert_eq!(s.next(), Ok(Token::Word(Word::Write)));
    assert_eq!(s.next(), Ok(Token::Number(1)));
    assert_eq!(s.next(), Ok(Token::Eof));
    assert_eq!(s.next(), Ok(Token::Eof));
    assert_eq!(s.peek(), Ok(Token::Eof));
}

#[test]
fn test_peek_then_next() {
    let source = "  CP -5,r3 # c\n JUMP neg,r3,7";
    let mut peeking = Scanner::new(source);
    let mut plain = Scanner::new(source);
    loop {
        let peeked = peeking.peek();
        let next = peeking.next();
        assert_eq!(peeked, next);
        assert_eq!(next, plain.next());
        assert_eq!(peeking.column(), plain.column());
        if next == Ok(Token::Eof) {
            break;
        }
    }
}

#[test]
fn test_peek_keeps_column() {
    let mut s = Scanner::new("READ r2");
    s.next().unwrap();
    assert_eq!(s.column(), 0..4);
    assert_eq!(s.peek(), Ok(Token::Register(2)));
    assert_eq!(s.column(), 0..4);
    s.next().unwrap();
    assert_eq!(s.column(), 5..7);
}

#[test]
fn test_illegal_character() {
    let e = lex("CP 1, r1\nWRITE @").unwrap_err();
    assert_eq!(e.code(), ErrorCode::IllegalCharacter);
    assert_eq!(e.column(), 15..16);
    assert_eq!(e.to_string(), "ILLEGAL CHARACTER IN (15..16); '@' AT POSITION 15");
}

#[test]
fn test_restartable() {
    let source = "ADD r1, 2, r3";
    assert_eq!(lex(source), lex(source));
    let mut first = Scanner::new(source);
    first.next().unwrap();
    let mut second = Scanner::new(source);
    assert_eq!(second.next(), Ok(Token::Word(Word::Add)));
}
