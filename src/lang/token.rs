use super::ast::Ident;
use super::Column;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_KIND: HashMap<String, Kind> = Word::ALL
        .iter()
        .cloned()
        .map(Kind::Word)
        .chain(Operator::ALL.iter().cloned().map(Kind::Operator))
        .chain(vec![Kind::LParen, Kind::RParen, Kind::Comma])
        .map(|k| (k.to_string(), k))
        .collect();
);

/// A classified piece of source text.
///
/// `text` is the exact slice of the source line the token was read from,
/// so a string literal keeps its quotes. `line` is 1-based and `column`
/// counts characters from the start of that line.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub line: usize,
    pub column: Column,
}

impl Token {
    pub fn new<S: Into<String>>(kind: Kind, text: S, line: usize, column: Column) -> Token {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// How the token is named in a syntax error.
    pub fn describe(&self) -> String {
        match self.kind {
            Kind::Newline => "END OF LINE".to_string(),
            Kind::Eof => "END OF INPUT".to_string(),
            _ => format!("\"{}\"", self.text),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Newline,
    Eof,
}

impl Kind {
    /// Keywords, operators and punctuation by their spelling.
    pub fn from_string(s: &str) -> Option<Kind> {
        STRING_TO_KIND.with(|stk| stk.get(s).cloned())
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Newline => writeln!(f),
            Eof => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Clear,
    End,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Print,
    Return,
    Run,
    Then,
}

impl Word {
    pub const ALL: [Word; 12] = [
        Word::Clear,
        Word::End,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::Print,
        Word::Return,
        Word::Run,
        Word::Then,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    GreaterLess,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterLess,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
    ];

    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Multiply | Divide | Plus | Minus => false,
            Equal | NotEqual | GreaterLess | Less | LessEqual | Greater | GreaterEqual => true,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            GreaterLess => write!(f, "><"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let k = Kind::from_string("GOSUB");
        assert_eq!(k, Some(Kind::Word(Word::Gosub)));
        let k = Kind::from_string("<>");
        assert_eq!(k, Some(Kind::Operator(Operator::NotEqual)));
        let k = Kind::from_string("gosub");
        assert_eq!(k, None);
        let k = Kind::from_string("PICKLES");
        assert_eq!(k, None);
    }
}
