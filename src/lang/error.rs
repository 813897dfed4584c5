use super::{Column, LineNumber};

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    source_line: Option<usize>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, @$src:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($src, $col)
    };
    ($err:ident, @$src:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($src, $col)
            .message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            source_line: None,
            column: 0..0,
            message: String::new(),
        }
    }

    /// Attach the NanoBASIC line number the error belongs to.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    /// Attach a 1-based source line and the column range within it.
    pub fn at(self, source_line: usize, column: &Column) -> Error {
        debug_assert!(self.source_line.is_none());
        Error {
            source_line: Some(source_line),
            column: column.clone(),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }
}

/// Which stage of the pipeline produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnrecognizedCharacter,
    UnterminatedString,
    LiteralOverflow,
    SyntaxError,
    DuplicateLine,
    InvalidLineNumber,
    UndefinedLine,
    ReturnWithoutGosub,
    DivisionByZero,
    Overflow,
    InvalidInput,
    InputPastEnd,
    OutOfMemory,
    IoError,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnrecognizedCharacter | UnterminatedString | LiteralOverflow => ErrorKind::Lexical,
            SyntaxError | DuplicateLine | InvalidLineNumber => ErrorKind::Syntax,
            UndefinedLine | ReturnWithoutGosub | DivisionByZero | Overflow | InvalidInput
            | InputPastEnd | OutOfMemory | IoError => ErrorKind::Runtime,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            UnrecognizedCharacter => "UNRECOGNIZED CHARACTER",
            UnterminatedString => "UNTERMINATED STRING",
            LiteralOverflow | Overflow => "OVERFLOW",
            SyntaxError => "SYNTAX ERROR",
            DuplicateLine => "DUPLICATE LINE",
            InvalidLineNumber => "INVALID LINE NUMBER",
            UndefinedLine => "UNDEFINED LINE",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            DivisionByZero => "DIVISION BY ZERO",
            InvalidInput => "INVALID INPUT",
            InputPastEnd => "INPUT PAST END",
            OutOfMemory => "OUT OF MEMORY",
            IoError => "I/O ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if let Some(source_line) = self.source_line {
            write!(f, " AT {}:{}", source_line, self.column.start + 1)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(DivisionByZero, 10).to_string(), "DIVISION BY ZERO IN 10");
        assert_eq!(
            error!(SyntaxError, @3, ..&(4..8); "EXPECTED THEN").to_string(),
            "SYNTAX ERROR AT 3:5; EXPECTED THEN"
        );
        assert_eq!(error!(ReturnWithoutGosub).to_string(), "RETURN WITHOUT GOSUB");
    }

    #[test]
    fn test_kind() {
        assert_eq!(error!(UnterminatedString).kind(), ErrorKind::Lexical);
        assert_eq!(error!(DuplicateLine).kind(), ErrorKind::Syntax);
        assert_eq!(error!(UndefinedLine, 20).kind(), ErrorKind::Runtime);
        assert_eq!(error!(LiteralOverflow).to_string(), "OVERFLOW");
    }
}
