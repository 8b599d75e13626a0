use css_tokenizer::Token;

use crate::token_streams::TokenSource;
use crate::types::ComponentValue;
use crate::{Parser, ParserError};

/// 5.4. Parser Entry Points
///
/// https://www.w3.org/TR/css-syntax-3/#parser-entry-points
impl<S: TokenSource> Parser<S> {
    /// 5.4.9. Parse a component value
    ///
    /// https://www.w3.org/TR/css-syntax-3/#parse-component-value
    pub fn parse_a_component_value(&mut self) -> Result<ComponentValue, ParserError> {
        // 2. Discard whitespace from input.
        self.discard_whitespace()?;

        // 3. If input is empty, return a syntax error.
        if self.peek_token()?.is_eof() {
            return Err(ParserError::Empty);
        }

        // 4. Consume a component value from input and let value be the return value.
        let value = self.consume_a_component_value()?;

        // 5. Discard whitespace from input.
        self.discard_whitespace()?;

        // 6. If input is empty, return value. Otherwise, return a syntax error.
        if self.peek_token()?.is_eof() {
            Ok(value)
        } else {
            Err(ParserError::TrailingInput)
        }
    }

    /// 5.4.10. Parse a list of component values
    ///
    /// https://www.w3.org/TR/css-syntax-3/#parse-list-of-component-values
    pub fn parse_a_list_of_component_values(
        &mut self,
    ) -> Result<Vec<ComponentValue>, ParserError> {
        // 2. Consume a list of component values from input, and return the result.
        Ok(self.consume_a_list_of_component_values(None)?)
    }

    /// 5.4.11. Parse a comma-separated list of component values
    ///
    /// https://www.w3.org/TR/css-syntax-3/#parse-comma-separated-list-of-component-values
    pub fn parse_a_comma_separated_list_of_component_values(
        &mut self,
    ) -> Result<Vec<Vec<ComponentValue>>, ParserError> {
        // 2. Let groups be an empty list.
        let mut groups = vec![];

        // 3. While input is not empty:
        while !self.peek_token()?.is_eof() {
            // 1. Consume a list of component values from input, with <comma-token> as the stop token,
            // and append the result to groups.
            groups.push(self.consume_a_list_of_component_values(Some(&Token::Comma))?);

            // 2. Discard a token from input.
            self.consume_a_token()?;
        }

        // 4. Return groups.
        Ok(groups)
    }
}
