/*!
## Rust Machine Module

This Rust module is a tree-walking interpreter for NanoBASIC.

*/

mod io;
mod operation;
mod runtime;
mod stack;
mod var;

pub use io::Input;
pub use io::Output;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use var::Var;
