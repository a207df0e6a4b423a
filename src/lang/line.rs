use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;

/// A stored program line: its number, the text as typed, and the
/// parsed statement.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: u16,
    source: String,
    statement: Statement,
}

impl Line {
    pub fn new(number: u16, source: &str, statement: Statement) -> Line {
        Line {
            number,
            source: source.trim_end().to_string(),
            statement,
        }
    }

    /// Scan and parse one line of input. Errors carry the source text.
    pub fn entry(source: &str) -> Result<Entry, Error> {
        let source = source.trim_end();
        lex(source)
            .and_then(|tokens| parse(&tokens))
            .map_err(|e| e.in_source(source))
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_source() {
        let e = Line::entry("10 PRINT (1  \n").unwrap_err();
        assert_eq!(
            e.to_string(),
            "Syntax Error: Error #296: Syntax error - expected a closing parenthesis, got end of line.\n10 PRINT (1\n-----------^"
        );
    }

    #[test]
    fn test_store() {
        match Line::entry("30 RETURN").unwrap() {
            Entry::Store(n, stmt) => {
                let line = Line::new(n, "30 RETURN", stmt);
                assert_eq!(line.number(), 30);
                assert_eq!(line.to_string(), "30 RETURN");
            }
            e => panic!("{:?}", e),
        }
    }
}
