/*!
## Terminal

Runs one NanoBASIC program from the command line.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Error, LineNumber, Program};
use crate::mach::{Event, Input, Output, Runtime, State};
use ansi_term::Style;
use anyhow::{bail, Context};
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Statements executed between checks for Ctrl-C.
const CYCLES: usize = 5000;

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "nanobasic", version, about = "Run a NanoBASIC program")]
pub struct Args {
    /// Source file to run
    #[arg(required_unless_present = "source", conflicts_with = "source")]
    pub path: Option<PathBuf>,

    /// Run this source text instead of a file
    #[arg(short = 'e', long = "source", value_name = "SOURCE")]
    pub source: Option<String>,

    /// Write the parsed tree to <name>_AST.txt beside the source file
    #[arg(long, conflicts_with = "source")]
    pub dump_ast: bool,

    /// Print each line number as it executes
    #[arg(long)]
    pub trace: bool,
}

/// Returns the process exit status.
pub fn main() -> i32 {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    match main_loop(&args, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(format!("{:#}", error)));
            EXIT_ERROR
        }
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> anyhow::Result<i32> {
    let source = match (&args.path, &args.source) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?,
        (None, Some(source)) => source.clone(),
        (None, None) => bail!("No program given"),
    };
    let program = match Program::from_str(&source) {
        Ok(program) => program,
        Err(error) => {
            report(&error);
            return Ok(EXIT_ERROR);
        }
    };
    if args.dump_ast {
        if let Some(path) = &args.path {
            let ast_path = ast_path(path);
            fs::write(&ast_path, program.dump())
                .with_context(|| format!("Writing {}", ast_path.display()))?;
        }
    }

    let mut console = Console;
    let mut keyboard = Keyboard::new(interrupted.clone());
    let mut runtime = Runtime::new(&program);
    runtime.set_tron(args.trace);
    loop {
        let result = runtime.execute(CYCLES, &mut keyboard, &mut console);
        if interrupted.swap(false, Ordering::SeqCst) {
            let suffix = match runtime.state() {
                State::Running(line_number) => format!(" IN {}", line_number),
                _ => String::new(),
            };
            eprintln!("{}", Style::new().bold().paint(format!("BREAK{}", suffix)));
            return Ok(EXIT_INTERRUPTED);
        }
        match result {
            Ok(Event::Running) => {}
            Ok(Event::Stopped) => return Ok(0),
            Err(error) => {
                report(&error);
                return Ok(EXIT_ERROR);
            }
        }
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}

/// `dir/prog.bas` dumps to `dir/prog_AST.txt`.
pub fn ast_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}_AST.txt", stem))
}

/// Standard output, with the trace going to standard error.
pub struct Console;

impl Output for Console {
    fn print(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{}", line)?;
        lock.flush()
    }

    fn trace(&mut self, line_number: LineNumber) -> io::Result<()> {
        let mut stderr = io::stderr();
        writeln!(stderr, "{}", Style::new().dimmed().paint(format!("[{}]", line_number)))
    }
}

/// Standard input. Uses line editing when attached to a terminal.
pub struct Keyboard {
    interface: Option<Interface<DefaultTerminal>>,
    interrupted: Arc<AtomicBool>,
}

impl Keyboard {
    pub fn new(interrupted: Arc<AtomicBool>) -> Keyboard {
        Keyboard {
            interface: None,
            interrupted,
        }
    }

    fn interface(&mut self) -> io::Result<&Interface<DefaultTerminal>> {
        if self.interface.is_none() {
            let interface = Interface::new("NanoBASIC")?;
            interface.set_report_signal(Signal::Interrupt, true);
            self.interface = Some(interface);
        }
        match &self.interface {
            Some(interface) => Ok(interface),
            None => Err(io::Error::new(io::ErrorKind::Other, "NO TERMINAL")),
        }
    }
}

impl Input for Keyboard {
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            let mut line = String::new();
            return match io::stdin().read_line(&mut line)? {
                0 => Ok(None),
                _ => Ok(Some(line)),
            };
        }
        let interface = self.interface()?;
        interface.set_prompt(prompt)?;
        match interface.read_line()? {
            ReadResult::Input(line) => Ok(Some(line)),
            ReadResult::Eof => Ok(None),
            ReadResult::Signal(_) => {
                self.interrupted.store(true, Ordering::SeqCst);
                Err(io::Error::new(io::ErrorKind::Interrupted, "BREAK"))
            }
        }
    }
}
