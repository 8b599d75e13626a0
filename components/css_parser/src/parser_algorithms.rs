//! 5.5. Parser Algorithms
//!
//! https://drafts.csswg.org/css-syntax-3/#parser-algorithms

use css_tokenizer::{FatalError, ParseErrorKind, Token};

use crate::token_streams::TokenSource;
use crate::types::{BlockKind, ComponentValue, Function, SimpleBlock};
use crate::Parser;

impl<S: TokenSource> Parser<S> {
    /// 5.5.7. Consume a list of component values
    ///
    /// Consumes component values until the <EOF-token>, which is not part of
    /// the result.
    ///
    /// https://drafts.csswg.org/css-syntax-3/#consume-list-of-components
    pub fn consume_a_list_of_component_values(
        &mut self,
        stop_token: Option<&Token>,
    ) -> Result<Vec<ComponentValue>, FatalError> {
        let mut values = vec![];

        loop {
            // <eof-token>, stop token: Return values.
            let token = self.peek_token()?;
            if token.is_eof() || Some(token) == stop_token {
                return Ok(values);
            }

            // Consume a component value from input, and append the result to values.
            values.push(self.consume_a_component_value()?);
        }
    }

    /// 5.5.8. Consume a component value
    ///
    /// https://drafts.csswg.org/css-syntax-3/#consume-component-value
    pub fn consume_a_component_value(&mut self) -> Result<ComponentValue, FatalError> {
        let token = self.consume_a_token()?;
        self.consume_a_component_value_starting_with(token)
    }

    fn consume_a_component_value_starting_with(
        &mut self,
        token: Token,
    ) -> Result<ComponentValue, FatalError> {
        if let Some(kind) = BlockKind::opened_by(&token) {
            // Consume a simple block from input and return the result.
            return Ok(ComponentValue::SimpleBlock(self.consume_a_simple_block(kind)?));
        }

        match token {
            Token::Function { value } => {
                // Consume a function from input and return the result.
                Ok(ComponentValue::Function(self.consume_a_function(value)?))
            }
            // Consume a token from input and return the result.
            token => Ok(ComponentValue::PreservedToken(token)),
        }
    }

    /// 5.5.9. Consume a simple block
    ///
    /// The opening token has already been consumed.
    ///
    /// https://drafts.csswg.org/css-syntax-3/#consume-simple-block
    fn consume_a_simple_block(&mut self, kind: BlockKind) -> Result<SimpleBlock, FatalError> {
        // Let ending token be the mirror variant of the next token.
        // (E.g. if it was called with <[-token>, the ending token is <]-token>.)
        let ending_token = kind.ending_token();

        // Let block be a new simple block with its associated token set
        // to the next token and with its value initially set to an empty list.
        let mut block = SimpleBlock {
            kind,
            values: vec![],
        };

        loop {
            match self.consume_a_token()? {
                // ending token: Return block.
                token if token == ending_token => return Ok(block),
                Token::EndOfFile => {
                    // This is a parse error. Return block.
                    self.parse_error(ParseErrorKind::UnterminatedBlock);
                    return Ok(block);
                }
                token => {
                    // Consume a component value from input and append the result to block’s value.
                    let value = self.consume_a_component_value_starting_with(token)?;
                    block.values.push(value);
                }
            }
        }
    }

    /// 5.5.10. Consume a function
    ///
    /// The <function-token> has already been consumed.
    ///
    /// https://drafts.csswg.org/css-syntax-3/#consume-function
    fn consume_a_function(&mut self, name: String) -> Result<Function, FatalError> {
        // Let function be a new function with its name equal the returned token’s value,
        // and a value set to an empty list.
        let mut function = Function {
            name,
            value: vec![],
        };

        loop {
            match self.consume_a_token()? {
                // <)-token>: Return function.
                Token::RightParenthesis => return Ok(function),
                Token::EndOfFile => {
                    // This is a parse error. Return function.
                    self.parse_error(ParseErrorKind::UnterminatedFunction);
                    return Ok(function);
                }
                token => {
                    // Consume a component value from input and append the result to function’s value.
                    let value = self.consume_a_component_value_starting_with(token)?;
                    function.value.push(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use css_tokenizer::{NumberType, Offset, ParseError};

    use super::*;
    use crate::TokenStream;

    fn number(representation: &str) -> ComponentValue {
        ComponentValue::PreservedToken(Token::number(representation))
    }

    fn preserved(token: Token) -> ComponentValue {
        ComponentValue::PreservedToken(token)
    }

    #[test]
    fn consume_a_function() {
        let mut parser = Parser::from_str("rgb(128, 64, 64)");
        let value = parser.consume_a_component_value().unwrap();

        assert_eq!(
            value,
            ComponentValue::Function(Function {
                name: "rgb".to_string(),
                value: vec![
                    number("128"),
                    preserved(Token::Comma),
                    preserved(Token::Whitespace),
                    number("64"),
                    preserved(Token::Comma),
                    preserved(Token::Whitespace),
                    number("64"),
                ],
            })
        );
        assert!(parser.parse_errors().is_empty());
        assert_eq!(
            parser.consume_a_component_value().unwrap(),
            preserved(Token::EndOfFile)
        );
    }

    #[test]
    fn consume_nested_blocks() {
        let mut parser = Parser::from_str("{a [b (c)]}d");
        let value = parser.consume_a_component_value().unwrap();

        assert_eq!(
            value,
            ComponentValue::SimpleBlock(SimpleBlock {
                kind: BlockKind::CurlyBracket,
                values: vec![
                    preserved(Token::ident("a")),
                    preserved(Token::Whitespace),
                    ComponentValue::SimpleBlock(SimpleBlock {
                        kind: BlockKind::SquareBracket,
                        values: vec![
                            preserved(Token::ident("b")),
                            preserved(Token::Whitespace),
                            ComponentValue::SimpleBlock(SimpleBlock {
                                kind: BlockKind::Parenthesis,
                                values: vec![preserved(Token::ident("c"))],
                            }),
                        ],
                    }),
                ],
            })
        );
        assert_eq!(
            parser.consume_a_component_value().unwrap(),
            preserved(Token::ident("d"))
        );
    }

    #[test]
    fn mismatched_closing_tokens_are_preserved() {
        let mut parser = Parser::from_str("[)]");
        assert_eq!(
            parser.consume_a_component_value().unwrap(),
            ComponentValue::SimpleBlock(SimpleBlock {
                kind: BlockKind::SquareBracket,
                values: vec![preserved(Token::RightParenthesis)],
            })
        );
    }

    #[test]
    fn unterminated_block_is_returned_partially() {
        let mut parser = Parser::from_str("(1");
        assert_eq!(
            parser.consume_a_component_value().unwrap(),
            ComponentValue::SimpleBlock(SimpleBlock {
                kind: BlockKind::Parenthesis,
                values: vec![number("1")],
            })
        );
        assert_eq!(
            parser.parse_errors(),
            &[ParseError::new(
                ParseErrorKind::UnterminatedBlock,
                Offset::new(2, 2, 0)
            )]
        );
    }

    #[test]
    fn unterminated_function_collects_errors_in_order() {
        let mut parser = Parser::from_str("f('a");
        assert_eq!(
            parser.consume_a_component_value().unwrap(),
            ComponentValue::Function(Function {
                name: "f".to_string(),
                value: vec![preserved(Token::String {
                    value: "a".to_string()
                })],
            })
        );

        let kinds: Vec<_> = parser.parse_errors().iter().map(|error| error.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ParseErrorKind::EofInString,
                ParseErrorKind::UnterminatedFunction
            ]
        );
    }

    #[test]
    fn list_of_component_values_from_a_token_stream() {
        let mut parser = Parser::new(TokenStream::new(vec![
            Token::Function {
                value: "calc".to_string(),
            },
            Token::Dimension {
                value: 1.0,
                number_type: NumberType::Integer,
                representation: "1".to_string(),
                unit: "px".to_string(),
            },
            Token::RightParenthesis,
            Token::Semicolon,
            Token::ident("x"),
        ]));

        let values = parser.consume_a_list_of_component_values(None).unwrap();
        assert_eq!(values.len(), 3);
        assert!(matches!(&values[0], ComponentValue::Function(function) if function.value.len() == 1));

        let mut parser = Parser::from_str("a;b");
        let values = parser
            .consume_a_list_of_component_values(Some(&Token::Semicolon))
            .unwrap();
        assert_eq!(values, vec![preserved(Token::ident("a"))]);
    }

    #[test]
    fn token_stream_errors_are_reported_at_the_start() {
        let mut parser = Parser::new(TokenStream::new(vec![
            Token::Whitespace,
            Token::LeftCurlyBracket,
            Token::ident("a"),
        ]));
        parser.consume_a_list_of_component_values(None).unwrap();
        assert_eq!(
            parser.parse_errors(),
            &[ParseError::new(
                ParseErrorKind::UnterminatedBlock,
                Offset::default()
            )]
        );
    }

    #[test]
    fn deep_nesting() {
        let depth = 200;
        let input = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        let mut parser = Parser::from_str(&input);

        let mut value = parser.consume_a_component_value().unwrap();
        let mut levels = 1;
        while let ComponentValue::SimpleBlock(SimpleBlock { mut values, .. }) = value {
            match values.pop() {
                Some(inner) => {
                    levels += 1;
                    value = inner;
                }
                None => break,
            }
        }
        assert_eq!(levels, depth);
        assert!(parser.parse_errors().is_empty());
    }
}
