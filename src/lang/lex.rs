use super::token::*;
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Split source text into tokens.
///
/// Each statement line ends with a `Newline` token and the whole sequence
/// ends with `Eof`. Blank lines and `REM` lines produce nothing at all.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = vec![];
    let mut line_count = 0;
    for (index, line) in s.lines().enumerate() {
        line_count = index + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        if is_remark(line) || line.trim().is_empty() {
            continue;
        }
        let mut lexer = BasicLexer {
            chars: line.chars().peekable(),
            line: line_count,
            col: 0,
        };
        for token in lexer.by_ref() {
            tokens.push(token?);
        }
        let end = lexer.col;
        tokens.push(Token::new(Kind::Newline, "", line_count, end..end));
    }
    tokens.push(Token::new(Kind::Eof, "", line_count.max(1), 0..0));
    Ok(tokens)
}

/// A comment line: `REM ...`, with or without a leading line number.
/// `REMAINDER = 1` is an assignment, not a remark.
fn is_remark(line: &str) -> bool {
    let rest = line
        .trim_start()
        .trim_start_matches(is_basic_digit)
        .trim_start();
    match rest.strip_prefix("REM") {
        Some(after) => !after.starts_with(is_basic_alphabetic),
        None => false,
    }
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        if is_basic_digit(pk) {
            return Some(self.number());
        }
        if is_basic_alphabetic(pk) {
            return Some(Ok(self.alphabetic()));
        }
        if pk == '"' {
            return Some(self.string());
        }
        Some(self.minutia())
    }
}

impl<'a> BasicLexer<'a> {
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) -> String {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !f(pk) {
                break;
            }
            self.bump();
            s.push(pk);
        }
        s
    }

    fn column_from(&self, start: usize) -> Column {
        start..self.col
    }

    fn whitespace(&mut self) {
        self.take_while(is_basic_whitespace);
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col;
        let s = self.take_while(is_basic_digit);
        let col = self.column_from(start);
        match s.parse::<i64>() {
            Ok(n) => Ok(Token::new(
                Kind::Literal(Literal::Integer(n)),
                s,
                self.line,
                col,
            )),
            Err(_) => Err(error!(LiteralOverflow, @self.line, ..&col; format!("\"{}\"", s))),
        }
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col;
        self.bump();
        let mut s = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some(ch) => s.push(ch),
                None => {
                    let col = self.column_from(start);
                    return Err(error!(UnterminatedString, @self.line, ..&col));
                }
            }
        }
        let text = format!("\"{}\"", s);
        Ok(Token::new(
            Kind::Literal(Literal::String(s)),
            text,
            self.line,
            self.column_from(start),
        ))
    }

    fn alphabetic(&mut self) -> Token {
        let start = self.col;
        let s = self.take_while(is_basic_alphabetic);
        let col = self.column_from(start);
        let kind = match Kind::from_string(&s) {
            Some(word @ Kind::Word(_)) => word,
            _ => Kind::Ident(s.as_str().into()),
        };
        Token::new(kind, s, self.line, col)
    }

    fn minutia(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        if let Some(ch) = self.bump() {
            s.push(ch);
        }
        if let Some(&pk) = self.chars.peek() {
            let mut two = s.clone();
            two.push(pk);
            if Kind::from_string(&two).is_some() {
                self.bump();
                s = two;
            }
        }
        let col = self.column_from(start);
        match Kind::from_string(&s) {
            Some(kind) => Ok(Token::new(kind, s, self.line, col)),
            None => Err(error!(UnrecognizedCharacter, @self.line, ..&col; format!("\"{}\"", s))),
        }
    }
}
