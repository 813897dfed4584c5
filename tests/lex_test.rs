use nanobasic::lang::{lex, token::*, ErrorCode, ErrorKind};

fn kinds(s: &str) -> Vec<Kind> {
    lex(s).unwrap().into_iter().map(|t| t.kind).collect()
}

/// Lay each token's text back down at its column, one string per source line.
fn rebuild(source: &str) -> Vec<String> {
    let tokens = lex(source).unwrap();
    let mut lines: Vec<String> = source.lines().map(|_| String::new()).collect();
    for token in tokens.iter() {
        if token.kind == Kind::Newline || token.kind == Kind::Eof {
            continue;
        }
        let line = &mut lines[token.line - 1];
        while line.chars().count() < token.column.start {
            line.push(' ');
        }
        line.push_str(&token.text);
        assert_eq!(line.chars().count(), token.column.end);
    }
    lines
}

#[test]
fn test_rebuild_from_columns() {
    let source = "REM squares\n10 LET X = 1\n\n20 PRINT \"X*X\",\tX * X\n30 X = X+1\n40 IF X<=9 THEN GOTO 20\n";
    let rebuilt = rebuild(source);
    for (original, rebuilt) in source.lines().zip(rebuilt.iter()) {
        if original.trim().is_empty() || original.starts_with("REM") {
            assert_eq!(rebuilt, "");
        } else {
            assert_eq!(rebuilt.as_str(), original.replace('\t', " ").trim_end());
        }
    }
}

#[test]
fn test_keywords_and_idents() {
    assert_eq!(
        kinds("10 PRINT print Print_x"),
        vec![
            Kind::Literal(Literal::Integer(10)),
            Kind::Word(Word::Print),
            Kind::Ident("print".into()),
            Kind::Ident("Print_x".into()),
            Kind::Newline,
            Kind::Eof,
        ]
    );
}

#[test]
fn test_every_keyword() {
    let words = "CLEAR END GOSUB GOTO IF INPUT LET LIST PRINT RETURN RUN THEN";
    let found: Vec<Kind> = kinds(words).into_iter().take(12).collect();
    assert_eq!(found, Word::ALL.iter().cloned().map(Kind::Word).collect::<Vec<_>>());
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("(1+2)*-3/4,\"S\""),
        vec![
            Kind::LParen,
            Kind::Literal(Literal::Integer(1)),
            Kind::Operator(Operator::Plus),
            Kind::Literal(Literal::Integer(2)),
            Kind::RParen,
            Kind::Operator(Operator::Multiply),
            Kind::Operator(Operator::Minus),
            Kind::Literal(Literal::Integer(3)),
            Kind::Operator(Operator::Divide),
            Kind::Literal(Literal::Integer(4)),
            Kind::Comma,
            Kind::Literal(Literal::String("S".to_string())),
            Kind::Newline,
            Kind::Eof,
        ]
    );
}

#[test]
fn test_line_endings() {
    assert_eq!(kinds("10 END\r\n20 END"), kinds("10 END\n20 END\n"));
    let tokens = lex("10 END\r\n20 END").unwrap();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_trailing_carriage_return() {
    assert_eq!(kinds("10 END\r"), kinds("10 END"));
    let tokens = lex("10 END\r").unwrap();
    assert_eq!(tokens[2].column, 6..6);
}

#[test]
fn test_string_keeps_spaces() {
    let tokens = lex("10 PRINT \"  A  B \"").unwrap();
    assert_eq!(tokens[2].kind, Kind::Literal(Literal::String("  A  B ".to_string())));
    assert_eq!(tokens[2].column, 9..18);
}

#[test]
fn test_unterminated_string() {
    let error = lex("10 PRINT \"hello\n").unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnterminatedString);
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.source_line(), Some(1));
    assert_eq!(error.column(), 9..15);
}

#[test]
fn test_unrecognized_character() {
    let error = lex("10 PRINT 1\n20 PRINT 2 ^ 3\n").unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnrecognizedCharacter);
    assert_eq!(error.to_string(), "UNRECOGNIZED CHARACTER AT 2:12; \"^\"");
}

#[test]
fn test_literal_overflow() {
    assert!(lex("10 PRINT 9223372036854775807").is_ok());
    let error = lex("10 PRINT 9223372036854775808").unwrap_err();
    assert_eq!(error.code(), ErrorCode::LiteralOverflow);
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.to_string(), "OVERFLOW AT 1:10; \"9223372036854775808\"");
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![Kind::Eof]);
    assert_eq!(kinds("\n   \n\t\n"), vec![Kind::Eof]);
}
