//! # NanoBASIC
//!
//! A small dialect of Tiny BASIC with integer arithmetic, `GOTO`,
//! `GOSUB`, and single-line `IF`.
//!
//! Install with `cargo install --path .` then run a program file.
//! ```text
//! nanobasic demos/fib.bas
//! ```
//!
//! Source text can also be given inline. Separate lines with real newlines.
//! ```text
//! nanobasic -e '10 PRINT "Hello World"'
//! Hello World
//! ```
//!
//! The library is split the same way as the executable:
//! [`lang`] turns source text into a [`Program`](lang::Program),
//! [`mach`] runs it, and [`term`] is the command line host.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
