use super::{token::*, Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Scan one line of source into tokens. The returned vector always
/// ends with a `Kind::Crlf` sentinel.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = BasicLexer {
        chars: s.trim_end_matches(|c| c == '\n' || c == '\r').chars().collect(),
        index: 0,
        line: None,
        tokens: vec![],
    };
    lexer.line_number();
    while let Some(ch) = lexer.skip_whitespace() {
        lexer.token(ch)?;
    }
    let end = lexer.chars.len();
    lexer.push(Kind::Crlf, "\n", end);
    Ok(lexer.tokens)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct BasicLexer {
    chars: Vec<char>,
    index: usize,
    line: LineNumber,
    tokens: Vec<Token>,
}

impl BasicLexer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn skip_whitespace(&mut self) -> Option<char> {
        while let Some(ch) = self.peek() {
            if !is_basic_whitespace(ch) {
                return Some(ch);
            }
            self.index += 1;
        }
        None
    }

    fn push(&mut self, kind: Kind, lexeme: &str, column: usize) {
        self.tokens.push(Token::new(kind, lexeme, self.line, column));
    }

    fn error_column(&self) -> std::ops::Range<usize> {
        self.index..self.index + 1
    }

    // Digits may be separated by spaces: "1 0 0" is 100.
    fn digits(&mut self) -> String {
        let mut s = String::new();
        let mut end = self.index;
        while let Some(ch) = self.peek() {
            if is_basic_digit(ch) {
                s.push(ch);
                self.index += 1;
                end = self.index;
            } else if is_basic_whitespace(ch) {
                self.index += 1;
            } else {
                break;
            }
        }
        self.index = end;
        s
    }

    fn line_number(&mut self) {
        self.skip_whitespace();
        let s = self.digits();
        if s.is_empty() {
            return;
        }
        self.line = s
            .parse::<u16>()
            .ok()
            .filter(|n| *n >= 1 && *n <= 32767);
        self.push(Kind::LineNumber(s.clone()), &s, 0);
    }

    fn token(&mut self, ch: char) -> Result<()> {
        let start = self.index;
        let single = match ch {
            '(' => Some(Kind::LParen),
            ')' => Some(Kind::RParen),
            ',' => Some(Kind::Comma),
            ';' => Some(Kind::Semicolon),
            ':' => Some(Kind::Colon),
            '+' => Some(Kind::Operator(Operator::Plus)),
            '-' => Some(Kind::Operator(Operator::Minus)),
            '*' => Some(Kind::Operator(Operator::Multiply)),
            '/' => Some(Kind::Operator(Operator::Divide)),
            '=' => Some(Kind::Operator(Operator::Equal)),
            _ => None,
        };
        if let Some(kind) = single {
            self.index += 1;
            self.push(kind, &ch.to_string(), start);
            return Ok(());
        }
        match ch {
            '<' | '>' => {
                self.relational(ch);
                Ok(())
            }
            '"' => self.string(),
            _ if is_basic_digit(ch) => {
                let s = self.digits();
                self.push(Kind::Number(s.clone()), &s, start);
                Ok(())
            }
            _ if is_basic_alphabetic(ch) => {
                self.alphabetic(ch);
                Ok(())
            }
            _ => Err(error!(UnexpectedCharacter, self.line, ..&self.error_column();
                format!("Syntax error - unexpected expression : '{}'.", ch))),
        }
    }

    fn relational(&mut self, ch: char) {
        let start = self.index;
        self.index += 1;
        let next = self.peek();
        let (op, lexeme) = match (ch, next) {
            ('<', Some('=')) => (Operator::LessEqual, "<="),
            ('<', Some('>')) => (Operator::NotEqual, "<>"),
            ('>', Some('=')) => (Operator::GreaterEqual, ">="),
            ('>', Some('<')) => (Operator::NotEqual, "><"),
            ('<', _) => (Operator::Less, "<"),
            _ => (Operator::Greater, ">"),
        };
        if lexeme.len() == 2 {
            self.index += 1;
        }
        self.push(Kind::Operator(op), lexeme, start);
    }

    fn string(&mut self) -> Result<()> {
        let start = self.index;
        self.index += 1;
        let mut s = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.index += 1;
                    let lexeme = format!("\"{}\"", s);
                    self.push(Kind::String(s), &lexeme, start);
                    return Ok(());
                }
                Some(ch) => {
                    s.push(ch);
                    self.index += 1;
                }
                None => {
                    return Err(error!(UnterminatedString, self.line, ..&(self.index..self.index + 1);
                        format!("Unterminated string (started at position {}).", start)))
                }
            }
        }
    }

    // Returns the index just past the keyword when `word` can be spelled
    // from the current position, ignoring interior whitespace.
    fn keyword(&self, word: &str) -> Option<usize> {
        let mut at = self.index;
        for expected in word.chars() {
            loop {
                let ch = self.chars.get(at)?;
                if is_basic_whitespace(*ch) {
                    at += 1;
                    continue;
                }
                if ch.to_ascii_uppercase() != expected {
                    return None;
                }
                at += 1;
                break;
            }
        }
        Some(at)
    }

    fn candidates(first: char) -> &'static [&'static str] {
        match first {
            'C' => &["CLEAR"],
            'E' => &["END"],
            'G' => &["GOTO", "GOSUB"],
            'I' => &["IF", "INPUT"],
            'L' => &["LET", "LIST"],
            'P' => &["PRINT", "PRETURN", "PR"],
            'R' => &["RUN", "RETURN", "RND", "REM"],
            'T' => &["THEN"],
            'U' => &["USR"],
            _ => &[],
        }
    }

    fn alphabetic(&mut self, ch: char) {
        let start = self.index;
        let first = ch.to_ascii_uppercase();
        for candidate in BasicLexer::candidates(first) {
            let end = match self.keyword(candidate) {
                Some(end) => end,
                None => continue,
            };
            // "IF X>PRETURN" is the variable P followed by RETURN.
            if *candidate == "PRETURN" {
                break;
            }
            let word = match Word::ALL.iter().find(|(s, _)| s == candidate) {
                Some((_, word)) => *word,
                None => Word::Print,
            };
            let lexeme: String = self.chars[start..end]
                .iter()
                .filter(|c| !is_basic_whitespace(**c))
                .collect();
            self.index = end;
            self.push(Kind::Word(word), &lexeme, start);
            if word == Word::Rem {
                let comment: String = self.chars[end..].iter().collect();
                self.index = self.chars.len();
                self.push(Kind::Comment(comment.clone()), &comment, end);
            }
            return;
        }
        self.index += 1;
        if let Some(ident) = Ident::from_char(first) {
            self.push(Kind::Ident(ident), &ch.to_string(), start);
        }
    }
}
