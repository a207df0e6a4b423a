/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Tiny BASIC.

*/

pub type Column = std::ops::Range<usize>;
pub type LineNumber = Option<u16>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        32767
    }
}

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Category;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_expression;
pub use parse::Entry;
