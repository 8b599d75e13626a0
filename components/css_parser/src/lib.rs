use css_tokenizer::{FatalError, ParseError, ParseErrorKind, Token, Tokenizer};

pub use token_streams::{TokenSource, TokenStream};
pub use types::{BlockKind, ComponentValue, Function, SimpleBlock};

pub mod parser_algorithms;
pub mod parser_entry_points;
pub mod token_streams;
pub mod types;

macro_rules! log_parse_error {
    ($error:expr) => {
        tracing::debug!(target: "css_parser", "parse error: {}", $error);
    };
}

/// Errors returned by the parser entry points.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error(transparent)]
    Fatal(#[from] FatalError),

    /// The input held no component value.
    #[error("expected a component value, found end of input")]
    Empty,

    /// More than one component value was found where one was expected.
    #[error("unexpected input after the component value")]
    TrailingInput,
}

/// Builds component values from a [`TokenSource`].
///
/// Parse errors of the source and of the parser itself are collected in the
/// order they occur and can be inspected with [`Parser::parse_errors`].
pub struct Parser<S> {
    input: S,
    next_token: Option<Token>,
    parse_errors: Vec<ParseError>,
}

impl<'a> Parser<Tokenizer<&'a [u8]>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::new(Tokenizer::from_str(input))
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(input: S) -> Self {
        Self {
            input,
            next_token: None,
            parse_errors: vec![],
        }
    }

    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    pub fn take_parse_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.parse_errors)
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-next-token
    pub(crate) fn peek_token(&mut self) -> Result<&Token, FatalError> {
        let token = match self.next_token.take() {
            Some(token) => token,
            None => self.pull_token()?,
        };
        Ok(self.next_token.insert(token))
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-consume-a-token
    pub(crate) fn consume_a_token(&mut self) -> Result<Token, FatalError> {
        match self.next_token.take() {
            Some(token) => Ok(token),
            None => self.pull_token(),
        }
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-discard-whitespace
    pub(crate) fn discard_whitespace(&mut self) -> Result<(), FatalError> {
        // While the next token is a <whitespace-token>, discard a token.
        while self.peek_token()? == &Token::Whitespace {
            self.consume_a_token()?;
        }
        Ok(())
    }

    pub(crate) fn parse_error(&mut self, kind: ParseErrorKind) {
        let error = ParseError::new(kind, self.input.offset());
        log_parse_error!(error);
        self.parse_errors.push(error);
    }

    fn pull_token(&mut self) -> Result<Token, FatalError> {
        let token = self.input.next_token();
        self.parse_errors.extend(self.input.drain_parse_errors());
        token
    }
}
