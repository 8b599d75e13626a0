use std::io::Read;

use css_tokenizer::{FatalError, Offset, ParseError, Token, Tokenizer};

/// Anything the parser can pull tokens from.
pub trait TokenSource {
    /// Returns the next token, or an <EOF-token> once the source is exhausted.
    fn next_token(&mut self) -> Result<Token, FatalError>;

    /// Hands over the parse errors the source has recorded since the last call.
    fn drain_parse_errors(&mut self) -> Vec<ParseError> {
        vec![]
    }

    /// The current position, used for the parser's own parse errors.
    fn offset(&self) -> Offset;
}

impl<R: Read> TokenSource for Tokenizer<R> {
    fn next_token(&mut self) -> Result<Token, FatalError> {
        Tokenizer::next_token(self)
    }

    fn drain_parse_errors(&mut self) -> Vec<ParseError> {
        self.take_parse_errors()
    }

    fn offset(&self) -> Offset {
        Tokenizer::offset(self)
    }
}

/// 5.3. Token Streams
///
/// A list of already consumed tokens.
///
/// https://drafts.csswg.org/css-syntax-3/#parser-definitions
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,

    /// An index into the tokens, representing the progress of parsing. It starts at 0 initially.
    ///
    /// https://drafts.csswg.org/css-syntax-3/#token-stream-index
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        TokenStream { tokens, index: 0 }
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-next-token
    pub fn next_token(&self) -> &Token {
        // The item of tokens at index.
        self.tokens
            .get(self.index)
            // If that index would be out-of-bounds past the end of the list, it’s instead an <eof-token>.
            .unwrap_or(&Token::EndOfFile)
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-empty
    pub fn empty(&self) -> bool {
        // A token stream is empty if the next token is an <eof-token>.
        self.next_token().is_eof()
    }

    /// https://drafts.csswg.org/css-syntax-3/#token-stream-consume-a-token
    pub fn consume_a_token(&mut self) -> Token {
        // Let token be the next token.
        let token = TokenStream::next_token(self).clone();
        // Increment index,
        if !self.empty() {
            self.index += 1;
        }
        // then return token.
        token
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, FatalError> {
        Ok(self.consume_a_token())
    }

    /// Tokens carry no position, so every parse error over a token stream
    /// is reported at the start of the input.
    fn offset(&self) -> Offset {
        Offset::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_stream_yields_eof_past_the_end() {
        let mut stream = TokenStream::new(vec![Token::Comma, Token::EndOfFile, Token::Colon]);
        assert!(!stream.empty());
        assert_eq!(stream.consume_a_token(), Token::Comma);
        assert!(stream.empty());
        assert_eq!(stream.consume_a_token(), Token::EndOfFile);
        assert_eq!(stream.consume_a_token(), Token::EndOfFile);

        let mut empty = TokenStream::new(vec![]);
        assert_eq!(TokenSource::next_token(&mut empty).unwrap(), Token::EndOfFile);
    }

    #[test]
    fn tokenizer_source_hands_over_parse_errors() {
        let mut tokenizer = Tokenizer::from_str("'abc");
        assert_eq!(
            TokenSource::next_token(&mut tokenizer).unwrap(),
            Token::String {
                value: "abc".to_string()
            }
        );
        assert_eq!(tokenizer.drain_parse_errors().len(), 1);
        assert!(tokenizer.drain_parse_errors().is_empty());
    }
}
