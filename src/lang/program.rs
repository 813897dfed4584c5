use super::ast::{self, AcceptVisitor, Printable, Statement};
use super::{lex, parse, Error, LineNumber};
use std::collections::{btree_map::Iter, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::str::FromStr;

/// A parsed program: one statement per line number, kept in ascending order.
///
/// Nothing mutates a `Program` after parsing, so one can be shared by any
/// number of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    source: BTreeMap<LineNumber, Statement>,
}

impl Program {
    /// Returns the statement already stored under `line_number`, if any.
    pub(super) fn insert(&mut self, line_number: LineNumber, statement: Statement) -> Option<&Statement> {
        use std::collections::btree_map::Entry;
        match self.source.entry(line_number) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => {
                entry.insert(statement);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, line_number: LineNumber) -> Option<&Statement> {
        self.source.get(&line_number)
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The next stored line after `line_number`, which need not be stored itself.
    pub fn next_line(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(ln, _)| *ln)
    }

    pub fn lines(&self) -> Iter<'_, LineNumber, Statement> {
        self.source.iter()
    }

    /// Canonical text of every line, as printed by `LIST`.
    pub fn listing(&self) -> Vec<String> {
        self.lines()
            .map(|(ln, statement)| format!("{} {}", ln, statement))
            .collect()
    }

    /// Tree form of every line, for debugging the parser.
    pub fn dump(&self) -> String {
        let mut s = String::new();
        for (ln, statement) in self.lines() {
            let mut dumper = Dumper::default();
            statement.accept(&mut dumper);
            debug_assert_eq!(dumper.stack.len(), 1);
            s.push_str(&format!("{} {}\n", ln, dumper.stack.join(" ")));
        }
        s
    }
}

impl FromStr for Program {
    type Err = Error;

    /// Lex and parse a whole source text.
    fn from_str(s: &str) -> Result<Program, Error> {
        let tokens = lex(s)?;
        parse(&tokens)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.listing() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Dumper {
    stack: Vec<String>,
}

impl Dumper {
    fn pop(&mut self) -> String {
        self.stack.pop().unwrap_or_default()
    }

    fn pop_n(&mut self, len: usize) -> Vec<String> {
        let at = self.stack.len().saturating_sub(len);
        self.stack.split_off(at)
    }
}

impl ast::Visitor for Dumper {
    fn visit_statement(&mut self, statement: &Statement) {
        use Statement::*;
        let s = match statement {
            Clear | End | List | Return | Run => format!("{:?}", statement),
            Gosub(_) => format!("Gosub({})", self.pop()),
            Goto(_) => format!("Goto({})", self.pop()),
            If(..) => {
                let then = self.pop();
                let cond = self.pop();
                format!("If({}, {})", cond, then)
            }
            Input(ident) => format!("Input({})", ident),
            Let(ident, _) => format!("Let({}, {})", ident, self.pop()),
            Print(items) => format!("Print({})", self.pop_n(items.len()).join(", ")),
        };
        self.stack.push(s);
    }

    fn visit_printable(&mut self, printable: &Printable) {
        if let Printable::String(s) = printable {
            self.stack.push(format!("String({:?})", s));
        }
    }

    fn visit_boolean(&mut self, boolean: &ast::BooleanExpr) {
        let rhs = self.pop();
        let lhs = self.pop();
        self.stack.push(format!("{:?}({}, {})", boolean.op, lhs, rhs));
    }

    fn visit_expression(&mut self, expression: &ast::Expression) {
        use ast::Expression::*;
        let s = match expression {
            Integer(n) => format!("Integer({})", n),
            Var(ident) => format!("Var({})", ident),
            Negation(_) => format!("Negation({})", self.pop()),
            Grouping(_) => format!("Grouping({})", self.pop()),
            Multiply(..) | Divide(..) | Add(..) | Subtract(..) => {
                let rhs = self.pop();
                let lhs = self.pop();
                let name = match expression {
                    Multiply(..) => "Multiply",
                    Divide(..) => "Divide",
                    Add(..) => "Add",
                    _ => "Subtract",
                };
                format!("{}({}, {})", name, lhs, rhs)
            }
        };
        self.stack.push(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_str() {
        let program: Program = "20 END\n10 PRINT 1\n".parse().unwrap();
        assert_eq!(program.listing(), vec!["10 PRINT 1", "20 END"]);
        assert!("10 PRINT 1 2".parse::<Program>().is_err());
    }

    #[test]
    fn test_next_line_skips_gaps() {
        let program = Program::from_str("10 END\n40 END\n25 END\n").unwrap();
        assert_eq!(program.first_line(), Some(10));
        assert_eq!(program.next_line(10), Some(25));
        assert_eq!(program.next_line(26), Some(40));
        assert_eq!(program.next_line(40), None);
    }

    #[test]
    fn test_dump() {
        let program =
            Program::from_str("20 X = X + 1\n10 PRINT \"HI\", -(2 * A)\n30 IF X < 3 THEN GOSUB 10\n")
                .unwrap();
        assert_eq!(
            program.dump(),
            "10 Print(String(\"HI\"), Negation(Grouping(Multiply(Integer(2), Var(A)))))\n\
             20 Let(X, Add(Var(X), Integer(1)))\n\
             30 If(Less(Var(X), Integer(3)), Gosub(Integer(10)))\n"
        );
    }
}
