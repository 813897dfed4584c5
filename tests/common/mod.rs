#![allow(dead_code)]
use nanobasic::lang::Program;
use nanobasic::mach::{Event, Runtime};
use std::collections::VecDeque;
use std::str::FromStr;

pub fn exec(source: &str) -> String {
    exec_input(source, &[])
}

/// Runs `source` to completion feeding `input` to `INPUT` one line at a time.
/// Output lines end with `\n`; an error is appended as `?<error>`.
pub fn exec_input(source: &str, input: &[&str]) -> String {
    exec_n(source, input, 5000)
}

pub fn exec_n(source: &str, input: &[&str], cycles: usize) -> String {
    let program = match Program::from_str(source) {
        Ok(program) => program,
        Err(error) => return format!("?{}\n", error),
    };
    let mut input: VecDeque<String> = input.iter().map(|s| s.to_string()).collect();
    let mut output: Vec<String> = vec![];
    let mut runtime = Runtime::new(&program);
    let mut prev_running = false;
    let mut s = String::new();
    loop {
        match runtime.execute(cycles, &mut input, &mut output) {
            Ok(Event::Stopped) => break,
            Ok(Event::Running) => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
                prev_running = true;
            }
            Err(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
        }
    }
    let mut out: String = output.iter().map(|line| format!("{}\n", line)).collect();
    out.push_str(&s);
    out
}
