pub use super::ident::Ident;
use super::{Column, Error, LineNumber, MaxValue};
use crate::error;
use std::convert::TryFrom;

/// A scanned token with its position in the raw source line.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub lexeme: String,
    pub line: LineNumber,
    pub column: usize,
}

impl Token {
    pub fn new(kind: Kind, lexeme: &str, line: LineNumber, column: usize) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            line,
            column,
        }
    }

    pub fn col(&self) -> Column {
        self.column..self.column + self.lexeme.chars().count().max(1)
    }

    pub fn is_crlf(&self) -> bool {
        self.kind == Kind::Crlf
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    LineNumber(String),
    Number(String),
    String(String),
    Comment(String),
    Ident(Ident),
    Word(Word),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Colon,
    Crlf,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            LineNumber(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
            Comment(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Colon => write!(f, ":"),
            Crlf => writeln!(f),
        }
    }
}

/// Decimal digits truncated to a 16-bit two's complement value.
pub fn wrapping_value(digits: &str) -> i16 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u16, |acc, d| acc.wrapping_mul(10).wrapping_add((d - b'0') as u16)) as i16
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let digits = match &token.kind {
            Kind::LineNumber(s) | Kind::Number(s) => s,
            _ => return Err(error!(MissingTarget, ..&token.col())),
        };
        if let Ok(line) = digits.parse::<u16>() {
            if line >= 1 && line <= LineNumber::max_value() {
                return Ok(Some(line));
            }
        }
        Err(error!(LineNumberRange, ..&token.col();
            format!("Line number is out of range (1-32767): '{}'.", digits)))
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Print,
    Rem,
    Return,
    Rnd,
    Run,
    Then,
    Usr,
}

impl Word {
    pub const ALL: [(&'static str, Word); 15] = [
        ("CLEAR", Word::Clear),
        ("END", Word::End),
        ("GOTO", Word::Goto),
        ("GOSUB", Word::Gosub),
        ("IF", Word::If),
        ("INPUT", Word::Input),
        ("LET", Word::Let),
        ("LIST", Word::List),
        ("PRINT", Word::Print),
        ("RUN", Word::Run),
        ("RETURN", Word::Return),
        ("RND", Word::Rnd),
        ("REM", Word::Rem),
        ("THEN", Word::Then),
        ("USR", Word::Usr),
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Return => write!(f, "RETURN"),
            Rnd => write!(f, "RND"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
            Usr => write!(f, "USR"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_relational(self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_value() {
        assert_eq!(wrapping_value("32767"), 32767);
        assert_eq!(wrapping_value("32768"), -32768);
        assert_eq!(wrapping_value("65537"), 1);
    }

    #[test]
    fn test_line_number_range() {
        let t = Token::new(Kind::LineNumber("40000".into()), "40000", None, 0);
        let e = LineNumber::try_from(&t).unwrap_err();
        assert_eq!(e.number(), 9);
        let t = Token::new(Kind::Number("100".into()), "100", None, 5);
        assert_eq!(LineNumber::try_from(&t).unwrap(), Some(100));
    }
}
