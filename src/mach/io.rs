use crate::lang::LineNumber;
use std::collections::VecDeque;
use std::io;

/// Where `PRINT` and `LIST` send their lines.
pub trait Output {
    /// Writes one complete line. `line` carries no terminator.
    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Called before each statement runs while tracing is on.
    fn trace(&mut self, _line_number: LineNumber) -> io::Result<()> {
        Ok(())
    }
}

/// Where `INPUT` gets its values.
pub trait Input {
    /// Returns the next line of input, or `None` once the source is exhausted.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl Output for Vec<String> {
    fn print(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl Input for VecDeque<String> {
    fn input(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}
