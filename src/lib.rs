//! # Tiny BASIC
//!
//! An interactive environment for Tiny BASIC: twelve statements, two
//! functions and twenty six integer variables, with a source-level
//! debugger and a linter.
//!
//! Install with `cargo install tiny-basic` then run `tinybasic`.
//! If you get the following, you have achieved success.
//! ```text
//! Tiny BASIC: interpreter, debugger and linter
//! Type %help for commands, CTRL-D to quit.
//! tbp:> █
//! ```
//!
//! The library can also be driven directly. Lines go in with
//! [`Runtime::enter`](mach/struct.Runtime.html#method.enter) and the
//! engine is polled with
//! [`Runtime::execute`](mach/struct.Runtime.html#method.execute).
//! ```
//! use tinybasic::mach::{Capture, Event, Runtime};
//!
//! let out = Capture::new();
//! let mut runtime = Runtime::new(Box::new(out.clone()));
//! runtime.enter("10 PRINT 7/2");
//! runtime.enter("20 END");
//! runtime.enter("RUN");
//! assert_eq!(runtime.execute(5000), Event::Stopped);
//! assert_eq!(out.take(), "3\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/chapter_4.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_4;

#[path = "doc/chapter_5.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_5;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
pub mod term;
