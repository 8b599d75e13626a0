use std::fmt;

/// A position in the input stream.
///
/// All fields are zero-based. `byte` counts raw input bytes, `column` counts
/// code points since the start of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Offset {
    pub byte: usize,
    pub column: usize,
    pub line: usize,
}

impl Offset {
    pub fn new(byte: usize, column: usize, line: usize) -> Self {
        Self { byte, column, line }
    }

    pub(crate) fn advance(&mut self, code_point: char, byte_length: usize) {
        self.byte += byte_length;
        if code_point == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (byte {})", self.line + 1, self.column + 1, self.byte)
    }
}

/// Errors that abort tokenization.
///
/// Once one of these has been reported the tokenizer only produces
/// <EOF-token>s.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("invalid UTF-8 sequence at byte {offset}")]
    Decode { offset: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("lookahead buffer exceeded its capacity of {capacity} code points")]
    LookaheadOverflow { capacity: usize },
}

/// https://www.w3.org/TR/css-syntax-3/#parse-errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("EOF in string token")]
    EofInString,
    #[error("newline in string token")]
    NewlineInString,
    #[error("EOF in escape sequence")]
    EofInEscape,
    #[error("invalid escape")]
    InvalidEscape,
    #[error("EOF in url token")]
    EofInUrl,
    #[error("invalid code point in url token")]
    InvalidUrlCodePoint,
    #[error("unterminated simple block")]
    UnterminatedBlock,
    #[error("unterminated function")]
    UnterminatedFunction,
}

/// A recoverable parse error. Tokenizing and parsing continue after these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: Offset,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: Offset) -> Self {
        Self { kind, offset }
    }
}
