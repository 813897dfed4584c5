use std::sync::Arc;

/// Variable name. Case-sensitive.
pub type Ident = Arc<str>;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Clear,
    End,
    Gosub(Expression),
    Goto(Expression),
    If(BooleanExpr, Box<Statement>),
    Input(Ident),
    Let(Ident, Expression),
    List,
    Print(Vec<Printable>),
    Return,
    Run,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Printable {
    String(String),
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub struct BooleanExpr {
    pub op: Relop,
    pub lhs: Expression,
    pub rhs: Expression,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relop {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i64),
    Var(Ident),
    Negation(Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Grouping(Box<Expression>),
}

impl Relop {
    pub fn compare(self, lhs: i64, rhs: i64) -> bool {
        use Relop::*;
        match self {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}

// Canonical source form, used by LIST.

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Gosub(expr) => write!(f, "GOSUB {}", expr),
            Goto(expr) => write!(f, "GOTO {}", expr),
            If(cond, then) => write!(f, "IF {} THEN {}", cond, then),
            Input(ident) => write!(f, "INPUT {}", ident),
            Let(ident, expr) => write!(f, "LET {} = {}", ident, expr),
            List => write!(f, "LIST"),
            Print(items) => {
                write!(f, "PRINT")?;
                for (index, item) in items.iter().enumerate() {
                    let sep = if index == 0 { " " } else { ", " };
                    write!(f, "{}{}", sep, item)?;
                }
                Ok(())
            }
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
        }
    }
}

impl std::fmt::Display for Printable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Printable::String(s) => write!(f, "\"{}\"", s),
            Printable::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl std::fmt::Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relop::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Var(ident) => write!(f, "{}", ident),
            Negation(expr) => write!(f, "-{}", expr),
            Multiply(lhs, rhs) => write!(f, "{} * {}", lhs, rhs),
            Divide(lhs, rhs) => write!(f, "{} / {}", lhs, rhs),
            Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
            Subtract(lhs, rhs) => write!(f, "{} - {}", lhs, rhs),
            Grouping(expr) => write!(f, "({})", expr),
        }
    }
}

/// Walks a tree children-first, the same order the interpreter evaluates it.
pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_printable(&mut self, _: &Printable) {}
    fn visit_boolean(&mut self, _: &BooleanExpr) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Clear | End | Input(_) | List | Return | Run => {}
            Gosub(expr) | Goto(expr) | Let(_, expr) => {
                expr.accept(visitor);
            }
            If(cond, then) => {
                cond.accept(visitor);
                then.accept(visitor);
            }
            Print(items) => {
                for item in items {
                    item.accept(visitor);
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Printable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if let Printable::Expression(expr) = self {
            expr.accept(visitor);
        }
        visitor.visit_printable(self)
    }
}

impl AcceptVisitor for BooleanExpr {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        self.lhs.accept(visitor);
        self.rhs.accept(visitor);
        visitor.visit_boolean(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Integer(_) | Var(_) => {}
            Negation(expr) | Grouping(expr) => expr.accept(visitor),
            Multiply(expr1, expr2)
            | Divide(expr1, expr2)
            | Add(expr1, expr2)
            | Subtract(expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_if_then() {
        let stmt = Statement::If(
            BooleanExpr {
                op: Relop::LessEqual,
                lhs: Expression::Var("X".into()),
                rhs: Expression::Negation(Box::new(Expression::Integer(3))),
            },
            Box::new(Statement::Goto(Expression::Integer(20))),
        );
        assert_eq!(stmt.to_string(), "IF X <= -3 THEN GOTO 20");
    }

    #[test]
    fn test_display_print() {
        let stmt = Statement::Print(vec![
            Printable::String("A is".to_string()),
            Printable::Expression(Expression::Multiply(
                Box::new(Expression::Grouping(Box::new(Expression::Add(
                    Box::new(Expression::Var("A".into())),
                    Box::new(Expression::Integer(1)),
                )))),
                Box::new(Expression::Integer(2)),
            )),
        ]);
        assert_eq!(stmt.to_string(), "PRINT \"A is\", (A + 1) * 2");
        assert_eq!(Statement::Print(vec![]).to_string(), "PRINT");
    }

    #[test]
    fn test_visitor_order() {
        struct Counter(Vec<String>);
        impl Visitor for Counter {
            fn visit_expression(&mut self, expr: &Expression) {
                self.0.push(expr.to_string());
            }
        }
        let stmt = Statement::Let(
            "X".into(),
            Expression::Add(
                Box::new(Expression::Integer(1)),
                Box::new(Expression::Var("Y".into())),
            ),
        );
        let mut counter = Counter(vec![]);
        stmt.accept(&mut counter);
        assert_eq!(counter.0, vec!["1", "Y", "1 + Y"]);
    }
}
