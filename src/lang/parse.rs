use super::{ast::*, token::*, Error, LineNumber, Program};

type Result<T> = std::result::Result<T, Error>;

/// Build a `Program` from the output of `lex`.
///
/// The first error ends parsing; no partial program is returned.
pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    line_number: Option<LineNumber>,
    eof: Token,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Program> {
        let mut parse = Parser {
            tokens,
            pos: 0,
            line_number: None,
            eof: Token::new(Kind::Eof, "", 1, 0..0),
        };
        let mut program = Program::default();
        loop {
            let token = parse.peek().clone();
            if token.kind == Kind::Eof {
                return Ok(program);
            }
            let (line_number, statement) = parse.line()?;
            if program.insert(line_number, statement).is_some() {
                return Err(error!(DuplicateLine, line_number).at(token.line, &token.column));
            }
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expected(&self, token: &Token, what: &str) -> Error {
        let error = error!(SyntaxError, @token.line, ..&token.column;
            format!("EXPECTED {}, FOUND {}", what, token.describe()));
        match self.line_number {
            Some(line_number) => error.in_line_number(line_number),
            None => error,
        }
    }

    fn expect(&mut self, kind: Kind, what: &str) -> Result<Token> {
        let token = self.next();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.expected(&token, what))
        }
    }

    fn line(&mut self) -> Result<(LineNumber, Statement)> {
        self.line_number = None;
        let token = self.next();
        let line_number = match token.kind {
            Kind::Literal(Literal::Integer(n)) => match LineNumber::try_from(n) {
                Ok(ln) if ln > 0 => ln,
                _ => {
                    return Err(error!(InvalidLineNumber, @token.line, ..&token.column;
                        token.describe()))
                }
            },
            _ => return Err(self.expected(&token, "LINE NUMBER")),
        };
        self.line_number = Some(line_number);
        let statement = self.statement()?;
        self.expect(Kind::Newline, "END OF LINE")?;
        Ok((line_number, statement))
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = self.next();
        match &token.kind {
            Kind::Ident(ident) => Statement::r#let(self, ident.clone()),
            Kind::Word(word) => Statement::for_word(self, word, &token),
            _ => Err(self.expected(&token, "STATEMENT")),
        }
    }

    fn ident(&mut self) -> Result<Ident> {
        let token = self.next();
        match token.kind {
            Kind::Ident(ident) => Ok(ident),
            _ => Err(self.expected(&token, "VARIABLE")),
        }
    }

    fn boolean_expression(&mut self) -> Result<BooleanExpr> {
        let lhs = self.expression()?;
        let token = self.next();
        let op = match &token.kind {
            Kind::Operator(op) if op.is_relational() => Relop::for_operator(op),
            _ => return Err(self.expected(&token, "RELATIONAL OPERATOR")),
        };
        let rhs = self.expression()?;
        Ok(BooleanExpr { op, lhs, rhs })
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let build: fn(Box<Expression>, Box<Expression>) -> Expression = match self.peek().kind {
                Kind::Operator(Operator::Plus) => Expression::Add,
                Kind::Operator(Operator::Minus) => Expression::Subtract,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.term()?;
            lhs = build(Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let build: fn(Box<Expression>, Box<Expression>) -> Expression = match self.peek().kind {
                Kind::Operator(Operator::Multiply) => Expression::Multiply,
                Kind::Operator(Operator::Divide) => Expression::Divide,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.factor()?;
            lhs = build(Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        let token = self.next();
        match token.kind {
            Kind::Operator(Operator::Minus) => Ok(Expression::Negation(Box::new(self.factor()?))),
            Kind::Ident(ident) => Ok(Expression::Var(ident)),
            Kind::Literal(Literal::Integer(n)) => Ok(Expression::Integer(n)),
            Kind::LParen => {
                let expr = self.expression()?;
                self.expect(Kind::RParen, "RIGHT PARENTHESIS")?;
                Ok(Expression::Grouping(Box::new(expr)))
            }
            _ => Err(self.expected(&token, "EXPRESSION")),
        }
    }

    fn printer_list(&mut self) -> Result<Vec<Printable>> {
        let mut v: Vec<Printable> = vec![];
        if self.peek().kind == Kind::Newline {
            return Ok(v);
        }
        loop {
            if let Kind::Literal(Literal::String(s)) = &self.peek().kind {
                v.push(Printable::String(s.clone()));
                self.next();
            } else {
                v.push(Printable::Expression(self.expression()?));
            }
            if self.peek().kind != Kind::Comma {
                return Ok(v);
            }
            self.next();
        }
    }
}

impl Relop {
    fn for_operator(op: &Operator) -> Relop {
        use Operator::*;
        match op {
            Equal => Relop::Equal,
            NotEqual | GreaterLess => Relop::NotEqual,
            Less => Relop::Less,
            LessEqual => Relop::LessEqual,
            Greater => Relop::Greater,
            GreaterEqual => Relop::GreaterEqual,
            Multiply | Divide | Plus | Minus => unreachable!("not a relational operator"),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word, token: &Token) -> Result<Statement> {
        use Word::*;
        match word {
            Clear => Ok(Statement::Clear),
            End => Ok(Statement::End),
            Gosub => Ok(Statement::Gosub(parse.expression()?)),
            Goto => Ok(Statement::Goto(parse.expression()?)),
            If => Self::r#if(parse),
            Input => Ok(Statement::Input(parse.ident()?)),
            Let => {
                let ident = parse.ident()?;
                Self::r#let(parse, ident)
            }
            List => Ok(Statement::List),
            Print => Ok(Statement::Print(parse.printer_list()?)),
            Return => Ok(Statement::Return),
            Run => Ok(Statement::Run),
            Then => Err(parse.expected(token, "STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, ident: Ident) -> Result<Statement> {
        parse.expect(Kind::Operator(Operator::Equal), "=")?;
        Ok(Statement::Let(ident, parse.expression()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let cond = parse.boolean_expression()?;
        parse.expect(Kind::Word(Word::Then), "THEN")?;
        let then = parse.statement()?;
        Ok(Statement::If(cond, Box::new(then)))
    }
}
