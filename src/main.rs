//! # NanoBASIC
//!
//! Run a NanoBASIC program from a file or from the command line.
//!

fn main() {
    std::process::exit(nanobasic::term::main());
}
