//! # Tiny BASIC
//!
//! Interpreter, debugger and linter for Tiny BASIC.
//!

fn main() {
    tinybasic::term::main()
}
