use super::{ast::*, token::*, Column, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// What a single line of input asks for.
#[derive(Debug, PartialEq)]
pub enum Entry {
    Store(u16, Statement),
    Delete(u16),
    Direct(Statement),
}

pub fn parse(tokens: &[Token]) -> Result<Entry> {
    let mut parser = Parser::new(tokens);
    let line_number = match parser.peek_kind() {
        Kind::LineNumber(_) => LineNumber::try_from(parser.next())?,
        _ => None,
    };
    match parser.entry(line_number) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parse a lone expression, as typed in answer to INPUT.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression> {
    let mut tokens = tokens.to_vec();
    if let Some(first) = tokens.first_mut() {
        if let Kind::LineNumber(digits) = &first.kind {
            first.kind = Kind::Number(digits.clone());
        }
    }
    let mut parser = Parser::new(&tokens);
    let expr = parser.expression()?;
    parser.expect_end()?;
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        debug_assert!(tokens.last().map_or(false, Token::is_crlf));
        Parser { tokens, pos: 0 }
    }

    fn entry(&mut self, line_number: LineNumber) -> Result<Entry> {
        if let Some(number) = line_number {
            if self.peek().is_crlf() {
                return Ok(Entry::Delete(number));
            }
            let statement = self.statement()?;
            self.expect_end()?;
            return Ok(Entry::Store(number, statement));
        }
        let statement = self.statement()?;
        self.expect_end()?;
        Ok(Entry::Direct(statement))
    }

    fn peek(&self) -> &'a Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    fn peek_kind(&self) -> &'a Kind {
        &self.peek().kind
    }

    fn next(&mut self) -> &'a Token {
        let t = self.peek();
        if !t.is_crlf() {
            self.pos += 1;
        }
        t
    }

    fn next_if(&mut self, kind: &Kind) -> Option<&'a Token> {
        if self.peek_kind() == kind {
            Some(self.next())
        } else {
            None
        }
    }

    fn column(&self) -> Column {
        self.peek().col()
    }

    fn found(&self) -> String {
        match self.peek_kind() {
            Kind::Crlf => "end of line".to_string(),
            _ => format!("'{}'", self.peek().lexeme),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        if self.peek().is_crlf() {
            return Ok(());
        }
        Err(error!(ExpectedEndOfLine, ..&self.column();
            format!("Expected the end of the line but found {}.", self.found())))
    }

    fn expect_rparen(&mut self) -> Result<()> {
        if self.next_if(&Kind::RParen).is_some() {
            return Ok(());
        }
        Err(error!(MissingParenthesis, ..&self.column();
            format!("Syntax error - expected a closing parenthesis, got {}.", self.found())))
    }

    fn statement(&mut self) -> Result<Statement> {
        let word = match self.peek_kind() {
            Kind::Ident(_) => return self.r#let(self.column()),
            Kind::Word(word) => *word,
            _ => {
                return Err(error!(UnexpectedExpression, ..&self.column();
                    format!("Syntax error - unexpected expression {}.", self.found())))
            }
        };
        let column = self.next().col();
        match word {
            Word::Clear => Ok(Statement::Clear(column)),
            Word::End => Ok(Statement::End(column)),
            Word::Return => Ok(Statement::Return(column)),
            Word::Rem => {
                let text = match self.peek_kind() {
                    Kind::Comment(s) => {
                        self.next();
                        s.clone()
                    }
                    _ => String::new(),
                };
                Ok(Statement::Rem(column, text))
            }
            Word::Goto | Word::Gosub => {
                if self.peek().is_crlf() {
                    return Err(error!(MissingTarget, ..&self.column();
                        format!("Missing line number for '{}'.", word)));
                }
                let target = self.expression()?;
                if word == Word::Goto {
                    Ok(Statement::Goto(column, target))
                } else {
                    Ok(Statement::Gosub(column, target))
                }
            }
            Word::Let => self.r#let(column),
            Word::Print => self.print(column),
            Word::List => self.list(column),
            Word::If => self.r#if(column),
            Word::Input => self.input(column),
            Word::Run => self.run(column),
            Word::Then | Word::Rnd | Word::Usr => {
                self.pos -= 1;
                Err(error!(UnexpectedExpression, ..&self.column();
                    format!("Syntax error - unexpected expression {}.", self.found())))
            }
        }
    }

    fn r#let(&mut self, column: Column) -> Result<Statement> {
        let var = match self.peek_kind() {
            Kind::Ident(ident) => Variable(self.next().col(), *ident),
            _ => {
                return Err(error!(LetMissingVariable, ..&self.column();
                    format!("LET is missing a variable name but found {}.", self.found())))
            }
        };
        if self.next_if(&Kind::Operator(Operator::Equal)).is_none() {
            return Err(error!(LetMissingEquals, ..&self.column();
                format!("LET is missing an '=' but found {}.", self.found())));
        }
        if self.peek().is_crlf() {
            return Err(error!(LetMissingExpression, ..&self.column()));
        }
        Ok(Statement::Let(column, var, self.expression()?))
    }

    fn print(&mut self, column: Column) -> Result<Statement> {
        let mut items = vec![];
        match self.peek_kind() {
            Kind::Crlf => return Ok(Statement::Print(column, items)),
            Kind::Comma | Kind::Semicolon | Kind::Colon => {
                return Err(error!(PrintLeadingSeparator, ..&self.column()))
            }
            _ => {}
        }
        loop {
            let item = match self.peek_kind() {
                Kind::Crlf | Kind::Colon => break,
                Kind::String(s) => PrintItem::String(self.next().col(), s.clone()),
                Kind::Comma => PrintItem::Comma(self.next().col()),
                Kind::Semicolon => PrintItem::Semicolon(self.next().col()),
                _ => PrintItem::Expression(self.expression()?),
            };
            items.push(item);
        }
        self.next_if(&Kind::Colon);
        Ok(Statement::Print(column, items))
    }

    fn list(&mut self, column: Column) -> Result<Statement> {
        if self.peek().is_crlf() {
            return Ok(Statement::List(column, None, None));
        }
        let from = self.expression()?;
        let to = match self.next_if(&Kind::Comma) {
            Some(_) => Some(self.expression()?),
            None => None,
        };
        Ok(Statement::List(column, Some(from), to))
    }

    fn r#if(&mut self, column: Column) -> Result<Statement> {
        let lhs = self.expression()?;
        let relation = match self.peek_kind() {
            Kind::Operator(op) if op.is_relational() => match op {
                Operator::Equal => Relation::Equal,
                Operator::NotEqual => Relation::NotEqual,
                Operator::Less => Relation::Less,
                Operator::LessEqual => Relation::LessEqual,
                Operator::Greater => Relation::Greater,
                _ => Relation::GreaterEqual,
            },
            _ => {
                return Err(error!(MissingRelation, ..&self.column();
                    format!("IF is missing the relational operator but found {}.", self.found())))
            }
        };
        self.next();
        let rhs = self.expression()?;
        self.next_if(&Kind::Word(Word::Then));
        let then = self.statement()?;
        Ok(Statement::If(column, lhs, relation, rhs, Box::new(then)))
    }

    fn input(&mut self, column: Column) -> Result<Statement> {
        let mut vars = vec![];
        loop {
            match self.peek_kind() {
                Kind::Ident(ident) => vars.push(Variable(self.next().col(), *ident)),
                _ => {
                    return Err(error!(InputMissingVariable, ..&self.column();
                        format!("INPUT expected a variable name but found {}.", self.found())))
                }
            }
            if self.next_if(&Kind::Comma).is_none() {
                return Ok(Statement::Input(column, vars));
            }
        }
    }

    fn run(&mut self, column: Column) -> Result<Statement> {
        let mut args = vec![];
        while !self.peek().is_crlf() {
            if self.next_if(&Kind::Comma).is_some() {
                if self.peek().is_crlf() {
                    return Err(error!(MissingParenthesis, ..&self.column();
                        "Syntax error - RUN parameters cannot end with a comma."));
                }
                continue;
            }
            args.push(self.expression()?);
        }
        Ok(Statement::Run(column, args))
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let column = self.column();
            lhs = match self.peek_kind() {
                Kind::Operator(Operator::Plus) => {
                    self.next();
                    Expression::Add(column, Box::new(lhs), Box::new(self.factor()?))
                }
                Kind::Operator(Operator::Minus) => {
                    self.next();
                    Expression::Subtract(column, Box::new(lhs), Box::new(self.factor()?))
                }
                _ => return Ok(lhs),
            };
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        let mut lhs = self.unary()?;
        loop {
            let column = self.column();
            lhs = match self.peek_kind() {
                Kind::Operator(Operator::Multiply) => {
                    self.next();
                    Expression::Multiply(column, Box::new(lhs), Box::new(self.unary()?))
                }
                Kind::Operator(Operator::Divide) => {
                    self.next();
                    Expression::Divide(column, Box::new(lhs), Box::new(self.unary()?))
                }
                _ => return Ok(lhs),
            };
        }
    }

    fn unary(&mut self) -> Result<Expression> {
        let column = self.column();
        match self.peek_kind() {
            Kind::Operator(Operator::Minus) => {
                self.next();
                Ok(Expression::Negation(column, Box::new(self.unary()?)))
            }
            Kind::Operator(Operator::Plus) => {
                self.next();
                Ok(Expression::Absolute(column, Box::new(self.unary()?)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        let column = self.column();
        match self.peek_kind() {
            Kind::Number(digits) => {
                self.next();
                Ok(Expression::Integer(column, wrapping_value(digits)))
            }
            Kind::Ident(ident) => {
                self.next();
                Ok(Expression::Var(column, *ident))
            }
            Kind::LParen => {
                self.next();
                let expr = self.expression()?;
                self.expect_rparen()?;
                Ok(Expression::Grouping(column, Box::new(expr)))
            }
            Kind::Word(Word::Rnd) => {
                self.next();
                self.function_lparen("RND")?;
                let expr = self.expression()?;
                self.expect_rparen()?;
                Ok(Expression::Rnd(column, Box::new(expr)))
            }
            Kind::Word(Word::Usr) => {
                self.next();
                self.function_lparen("USR")?;
                let mut args = vec![self.expression()?];
                while args.len() < 3 && self.next_if(&Kind::Comma).is_some() {
                    args.push(self.expression()?);
                }
                self.expect_rparen()?;
                Ok(Expression::Usr(column, args))
            }
            _ => Err(error!(UnexpectedExpression, ..&column;
                format!("Syntax error - unexpected expression {}.", self.found()))),
        }
    }

    fn function_lparen(&mut self, name: &str) -> Result<()> {
        if self.next_if(&Kind::LParen).is_some() {
            return Ok(());
        }
        Err(error!(UnexpectedExpression, ..&self.column();
            format!("Syntax error - missing left parenthesis to the {} function.", name)))
    }
}
