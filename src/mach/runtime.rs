use super::{Input, Operation, Output, Stack, Var};
use crate::error;
use crate::lang::ast::{BooleanExpr, Expression, Printable, Statement};
use crate::lang::{Error, LineNumber, Program};

type Result<T> = std::result::Result<T, Error>;

/// Separates the items of one `PRINT`.
const PRINT_SEPARATOR: &str = "\t";

/// Where a run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Loaded; the next `execute` starts from the first line.
    Ready,
    /// The line about to execute.
    Running(LineNumber),
    /// `END`, or execution fell off the last line.
    Halted,
    /// Stopped by a runtime error.
    Failed,
}

/// What `execute` stopped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    Stopped,
}

/// ## Interpreter
///
/// One run of a `Program`. The variables and the `GOSUB` stack belong to
/// the run; the program is only borrowed, so several runs may share it.
///
/// Execution is a loop over the program counter. No statement recurses into
/// the next one, so long chains of `GOTO` use no host stack.
pub struct Runtime<'a> {
    program: &'a Program,
    vars: Var,
    stack: Stack<Option<LineNumber>>,
    state: State,
    tron: bool,
}

impl<'a> Runtime<'a> {
    pub fn new(program: &'a Program) -> Runtime<'a> {
        Runtime {
            program,
            vars: Var::new(),
            stack: Stack::new("GOSUB NESTED TOO DEEPLY"),
            state: State::Ready,
            tron: false,
        }
    }

    pub fn program(&self) -> &'a Program {
        self.program
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Turn line number tracing on or off.
    pub fn set_tron(&mut self, tron: bool) {
        self.tron = tron;
    }

    /// Run from the first line until the program halts or fails.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<()>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.state = State::Ready;
        loop {
            if let Event::Stopped = self.execute(usize::MAX, input, output)? {
                return Ok(());
            }
        }
    }

    /// Execute at most `cycles` statements.
    ///
    /// A `Ready` runtime starts as if by `RUN`. A halted or failed one stays
    /// stopped. Runtime errors carry the line that was executing.
    pub fn execute<I, O>(&mut self, cycles: usize, input: &mut I, output: &mut O) -> Result<Event>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        if self.state == State::Ready {
            self.state = self.restart();
        }
        for _ in 0..cycles {
            let line_number = match self.state {
                State::Running(line_number) => line_number,
                State::Ready | State::Halted | State::Failed => return Ok(Event::Stopped),
            };
            match self.step(line_number, input, output) {
                Ok(state) => self.state = state,
                Err(error) => {
                    self.state = State::Failed;
                    return Err(error.in_line_number(line_number));
                }
            }
        }
        match self.state {
            State::Running(_) => Ok(Event::Running),
            _ => Ok(Event::Stopped),
        }
    }

    fn step<I, O>(&mut self, line_number: LineNumber, input: &mut I, output: &mut O) -> Result<State>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let statement = match self.program.get(line_number) {
            Some(statement) => statement,
            None => return Err(error!(UndefinedLine; format!("TARGET {}", line_number))),
        };
        if self.tron {
            output
                .trace(line_number)
                .map_err(|e| error!(IoError; e.to_string()))?;
        }
        self.statement(line_number, statement, input, output)
    }

    fn statement<I, O>(
        &mut self,
        line_number: LineNumber,
        statement: &Statement,
        input: &mut I,
        output: &mut O,
    ) -> Result<State>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        use Statement::*;
        match statement {
            Clear => {
                self.vars.clear();
                self.stack.clear();
                Ok(self.advance(line_number))
            }
            End => Ok(State::Halted),
            Gosub(expr) => {
                let target = self.target(expr)?;
                self.stack.push(self.program.next_line(line_number))?;
                Ok(State::Running(target))
            }
            Goto(expr) => Ok(State::Running(self.target(expr)?)),
            If(cond, then) => {
                if self.condition(cond)? {
                    self.statement(line_number, then, input, output)
                } else {
                    Ok(self.advance(line_number))
                }
            }
            Input(ident) => {
                let value = self.input(input)?;
                self.vars.store(ident, value);
                Ok(self.advance(line_number))
            }
            Let(ident, expr) => {
                let value = self.expression(expr)?;
                self.vars.store(ident, value);
                Ok(self.advance(line_number))
            }
            List => {
                for line in self.program.listing() {
                    output
                        .print(&line)
                        .map_err(|e| error!(IoError; e.to_string()))?;
                }
                Ok(self.advance(line_number))
            }
            Print(items) => {
                let mut fields: Vec<String> = vec![];
                for item in items {
                    fields.push(match item {
                        Printable::String(s) => s.clone(),
                        Printable::Expression(expr) => self.expression(expr)?.to_string(),
                    });
                }
                output
                    .print(&fields.join(PRINT_SEPARATOR))
                    .map_err(|e| error!(IoError; e.to_string()))?;
                Ok(self.advance(line_number))
            }
            Return => match self.stack.pop() {
                Some(Some(line_number)) => Ok(State::Running(line_number)),
                Some(None) => Ok(State::Halted),
                None => Err(error!(ReturnWithoutGosub)),
            },
            Run => Ok(self.restart()),
        }
    }

    /// Clear variables and the stack, then point at the first line.
    fn restart(&mut self) -> State {
        self.vars.clear();
        self.stack.clear();
        match self.program.first_line() {
            Some(line_number) => State::Running(line_number),
            None => State::Halted,
        }
    }

    fn advance(&self, line_number: LineNumber) -> State {
        match self.program.next_line(line_number) {
            Some(line_number) => State::Running(line_number),
            None => State::Halted,
        }
    }

    fn target(&self, expr: &Expression) -> Result<LineNumber> {
        let value = self.expression(expr)?;
        match LineNumber::try_from(value) {
            Ok(line_number) if self.program.get(line_number).is_some() => Ok(line_number),
            _ => Err(error!(UndefinedLine; format!("TARGET {}", value))),
        }
    }

    fn input<I: Input + ?Sized>(&mut self, input: &mut I) -> Result<i64> {
        let line = match input.input("? ") {
            Ok(Some(line)) => line,
            Ok(None) => return Err(error!(InputPastEnd)),
            Err(e) => return Err(error!(IoError; e.to_string())),
        };
        let line = line.trim();
        line.parse::<i64>()
            .map_err(|_| error!(InvalidInput; format!("\"{}\"", line)))
    }

    fn condition(&self, cond: &BooleanExpr) -> Result<bool> {
        let lhs = self.expression(&cond.lhs)?;
        let rhs = self.expression(&cond.rhs)?;
        Ok(cond.op.compare(lhs, rhs))
    }

    fn expression(&self, expr: &Expression) -> Result<i64> {
        use Expression::*;
        match expr {
            Integer(n) => Ok(*n),
            Var(ident) => Ok(self.vars.fetch(ident)),
            Negation(expr) => Operation::negate(self.expression(expr)?),
            Grouping(expr) => self.expression(expr),
            Multiply(lhs, rhs) => Operation::multiply(self.expression(lhs)?, self.expression(rhs)?),
            Divide(lhs, rhs) => Operation::divide(self.expression(lhs)?, self.expression(rhs)?),
            Add(lhs, rhs) => Operation::sum(self.expression(lhs)?, self.expression(rhs)?),
            Subtract(lhs, rhs) => Operation::subtract(self.expression(lhs)?, self.expression(rhs)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::str::FromStr;

    #[test]
    fn test_cycle_budget() {
        let program = Program::from_str("10 GOTO 10\n").unwrap();
        let mut runtime = Runtime::new(&program);
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output: Vec<String> = vec![];
        assert_eq!(
            runtime.execute(100, &mut input, &mut output).unwrap(),
            Event::Running
        );
        assert_eq!(runtime.state(), State::Running(10));
    }

    #[test]
    fn test_stays_stopped() {
        let program = Program::from_str("10 END\n").unwrap();
        let mut runtime = Runtime::new(&program);
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output: Vec<String> = vec![];
        assert_eq!(
            runtime.execute(5, &mut input, &mut output).unwrap(),
            Event::Stopped
        );
        assert_eq!(runtime.state(), State::Halted);
        assert_eq!(
            runtime.execute(5, &mut input, &mut output).unwrap(),
            Event::Stopped
        );
    }

    #[derive(Default)]
    struct Traced {
        lines: Vec<String>,
    }

    impl Output for Traced {
        fn print(&mut self, line: &str) -> std::io::Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }

        fn trace(&mut self, line_number: LineNumber) -> std::io::Result<()> {
            self.lines.push(format!("[{}]", line_number));
            Ok(())
        }
    }

    #[test]
    fn test_tron() {
        let program = Program::from_str("10 GOSUB 30\n20 END\n30 PRINT 7\n40 RETURN\n").unwrap();
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output = Traced::default();
        let mut runtime = Runtime::new(&program);
        runtime.set_tron(true);
        runtime.run(&mut input, &mut output).unwrap();
        assert_eq!(output.lines, vec!["[10]", "[30]", "7", "[40]", "[20]"]);

        let mut output = Traced::default();
        runtime.set_tron(false);
        runtime.run(&mut input, &mut output).unwrap();
        assert_eq!(output.lines, vec!["7"]);
    }

    #[test]
    fn test_failed_keeps_vars() {
        let program = Program::from_str("10 LET A = 4\n20 LET B = A / 0\n").unwrap();
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output: Vec<String> = vec![];
        let mut runtime = Runtime::new(&program);
        let error = runtime.run(&mut input, &mut output).unwrap_err();
        assert_eq!(error.to_string(), "DIVISION BY ZERO IN 20");
        assert_eq!(runtime.state(), State::Failed);
        assert_eq!(runtime.vars().fetch("A"), 4);
    }

    #[test]
    fn test_run_statement_restarts() {
        let program =
            Program::from_str("10 PRINT A\n20 LET A = A + 1\n30 IF A = 1 THEN RUN\n").unwrap();
        let mut runtime = Runtime::new(&program);
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output: Vec<String> = vec![];
        assert_eq!(
            runtime.execute(7, &mut input, &mut output).unwrap(),
            Event::Running
        );
        assert_eq!(output, vec!["0", "0", "0"]);
        assert_eq!(runtime.vars().fetch("A"), 0);
    }

    #[test]
    fn test_empty_program_halts() {
        let program = Program::default();
        let mut runtime = Runtime::new(&program);
        let mut input: VecDeque<String> = VecDeque::new();
        let mut output: Vec<String> = vec![];
        runtime.run(&mut input, &mut output).unwrap();
        assert_eq!(runtime.state(), State::Halted);
        assert!(output.is_empty());
    }
}
