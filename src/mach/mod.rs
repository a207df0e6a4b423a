/*!
## Rust Machine Module

This Rust module stores and runs Tiny BASIC programs, and hosts the
debugger and the linter.

*/

mod breakpoints;
mod command;
mod function;
mod lint;
mod listing;
mod memory;
mod output;
mod runtime;
mod stack;
mod var;

pub use breakpoints::Breakpoints;
pub use breakpoints::Hit;
pub use command::Command;
pub use command::Opt;
pub use command::Target;
pub use function::Function;
pub use lint::lint;
pub use listing::Listing;
pub use memory::Memory;
pub use output::Capture;
pub use output::Output;
pub use output::Stdout;
pub use runtime::Advance;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use var::Var;
