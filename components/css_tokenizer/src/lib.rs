#![allow(clippy::manual_is_ascii_check)]

use std::io::Read;

pub use error::{FatalError, Offset, ParseError, ParseErrorKind};
pub use number::CssNumber;
pub use reader::CodePointReader;
pub use token::{HashType, NumberType, Token};

pub mod error;
pub mod number;
pub mod preprocess;
pub mod reader;
pub mod token;

macro_rules! definition {
    (digit) => {
        '0'..='9'
    };
    (hex_digit) => {
        definition!(digit) | 'A'..='F' | 'a'..='f'
    };
    (uppercase_letter) => {
        'A'..='Z'
    };
    (lowercase_letter) => {
        'a'..='z'
    };
    (letter) => {
        definition!(uppercase_letter) | definition!(lowercase_letter)
    };
    (non_ascii_code_point) => {
        '\u{0080}'..='\u{10FFFF}'
    };
    (ident_start_code_point) => {
        definition!(letter) | definition!(non_ascii_code_point) | '_'
    };
    (ident_code_point) => {
        definition!(ident_start_code_point) | definition!(digit) | '-'
    };
    (non_printable_code_point) => {
        '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000E}'..='\u{001F}' | '\u{007F}'
    };
    (newline) => {
        '\n'
    };
    (whitespace) => {
        '\n' | '\t' | ' '
    };
}

macro_rules! log_current_token {
    ($token:expr) => {
        tracing::trace!(target: "css_tokenizer", "{}", $token);
    };
}

macro_rules! log_parse_error {
    ($error:expr) => {
        tracing::debug!(target: "css_tokenizer", "parse error: {}", $error);
    };
}

/// The largest value a hexadecimal escape may name.
const MAXIMUM_ALLOWED_CODE_POINT: u32 = 0x10FFFF;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

fn is_digit(code_point: Option<char>) -> bool {
    matches!(code_point, Some(definition!(digit)))
}

fn is_whitespace(code_point: Option<char>) -> bool {
    matches!(code_point, Some(definition!(whitespace)))
}

/// https://www.w3.org/TR/css-syntax-3/#check-if-two-code-points-are-a-valid-escape
fn two_code_points_are_a_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    // If the first code point is not U+005C REVERSE SOLIDUS (\), return false.
    // Otherwise, if the second code point is a newline, return false.
    // Otherwise, return true.
    first == Some('\\') && second != Some('\n')
}

/// https://www.w3.org/TR/css-syntax-3/#check-if-three-code-points-would-start-an-ident-sequence
fn three_code_points_would_start_an_ident_sequence(
    first: Option<char>,
    second: Option<char>,
    third: Option<char>,
) -> bool {
    // Look at the first code point:
    match first {
        Some('-') => {
            // If the second code point is an ident-start code point or a U+002D HYPHEN-MINUS,
            // or the second and third code points are a valid escape, return true.
            // Otherwise, return false.
            matches!(second, Some(definition!(ident_start_code_point) | '-'))
                || two_code_points_are_a_valid_escape(second, third)
        }
        // Return true.
        Some(definition!(ident_start_code_point)) => true,
        // If the first and second code points are a valid escape, return true.
        // Otherwise, return false.
        Some('\\') => two_code_points_are_a_valid_escape(first, second),
        _ => false,
    }
}

/// https://www.w3.org/TR/css-syntax-3/#starts-with-a-number
fn three_code_points_would_start_a_number(
    first: Option<char>,
    second: Option<char>,
    third: Option<char>,
) -> bool {
    // Look at the first code point:
    match first {
        Some('+' | '-') => {
            // If the second code point is a digit, return true.
            // Otherwise, if the second code point is a U+002E FULL STOP (.)
            // and the third code point is a digit, return true.
            is_digit(second) || (second == Some('.') && is_digit(third))
        }
        // If the second code point is a digit, return true.
        // Otherwise, return false.
        Some('.') => is_digit(second),
        Some(definition!(digit)) => true,
        _ => false,
    }
}

/// https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms
///
/// Produces one token per call to [`Tokenizer::next_token`], pulling code
/// points from the underlying reader only as far as needed.
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: CodePointReader<R>,
    current_input_code_point: Option<char>,
    parse_errors: Vec<ParseError>,
    finished: bool,
}

impl<'a> Tokenizer<&'a [u8]> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }
}

impl<R: Read> Tokenizer<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: CodePointReader::new(source),
            current_input_code_point: None,
            parse_errors: vec![],
            finished: false,
        }
    }

    /// Consumes tokens up to and including the <EOF-token>.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, FatalError> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;
            match token {
                Token::EndOfFile => {
                    tokens.push(token);
                    break;
                }
                _ => tokens.push(token),
            }
        }

        Ok(tokens)
    }

    /// Returns the next token.
    ///
    /// After the <EOF-token> has been returned, every further call returns
    /// an <EOF-token> again. A fatal error is returned once, after which the
    /// tokenizer behaves as if the input ended.
    pub fn next_token(&mut self) -> Result<Token, FatalError> {
        if self.finished {
            return Ok(Token::EndOfFile);
        }

        let token = self.consume_a_token();

        if let Some(error) = self.reader.take_fatal_error() {
            self.finished = true;
            return Err(error);
        }

        log_current_token!(token);
        if token.is_eof() {
            self.finished = true;
        }
        Ok(token)
    }

    /// The recoverable parse errors encountered so far, in order.
    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    pub fn take_parse_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.parse_errors)
    }

    pub fn offset(&self) -> Offset {
        self.reader.offset()
    }

    /// Records a parse error just past the last consumed code point.
    fn parse_error(&mut self, kind: ParseErrorKind) {
        let error = ParseError::new(kind, self.reader.position());
        log_parse_error!(error);
        self.parse_errors.push(error);
    }

    // https://www.w3.org/TR/css-syntax-3/#next-input-code-point
    fn next_input_code_point(&mut self) -> Option<char> {
        self.reader.peek()
    }

    fn next_two_input_code_points(&mut self) -> (Option<char>, Option<char>) {
        let [first, second] = self.reader.peek_n::<2>();
        (first, second)
    }

    fn next_three_input_code_points(&mut self) -> (Option<char>, Option<char>, Option<char>) {
        let [first, second, third] = self.reader.peek_n::<3>();
        (first, second, third)
    }

    fn consume_next_input_code_point(&mut self) -> Option<char> {
        self.current_input_code_point = self.reader.next();
        self.current_input_code_point
    }

    // https://www.w3.org/TR/css-syntax-3/#reconsume-the-current-input-code-point
    fn reconsume_current_input_code_point(&mut self) {
        // The EOF code point is served again by the reader on its own.
        if let Some(code_point) = self.current_input_code_point {
            self.reader.push(code_point);
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-token
    fn consume_a_token(&mut self) -> Token {
        // Consume comments.
        self.consume_comments();

        // Consume the next input code point.
        let Some(code_point) = self.consume_next_input_code_point() else {
            // EOF: Return an <EOF-token>.
            return Token::EndOfFile;
        };

        match code_point {
            definition!(whitespace) => {
                // Consume as much whitespace as possible.
                self.consume_as_much_whitespace_as_possible();

                // Return a <whitespace-token>.
                Token::Whitespace
            }
            '"' | '\'' => {
                // Consume a string token and return it.
                self.consume_a_string_token(code_point)
            }
            '#' => {
                // If the next input code point is an ident code point
                // or the next two input code points are a valid escape, then:
                let (first, second, third) = self.next_three_input_code_points();
                if matches!(first, Some(definition!(ident_code_point)))
                    || two_code_points_are_a_valid_escape(first, second)
                {
                    // 1. Create a <hash-token>.
                    // 2. If the next 3 input code points would start an ident sequence, set the <hash-token>’s type flag to "id".
                    let hash_type =
                        match three_code_points_would_start_an_ident_sequence(first, second, third)
                        {
                            true => HashType::Id,
                            false => HashType::Unrestricted,
                        };

                    // 3. Consume an ident sequence, and set the <hash-token>’s value to the returned string.
                    // 4. Return the <hash-token>.
                    return Token::Hash {
                        value: self.consume_an_ident_sequence(),
                        hash_type,
                    };
                }

                // Otherwise, return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            '+' | '.' => {
                // If the input stream starts with a number,
                if self.stream_starts_with_a_number() {
                    // reconsume the current input code point,
                    self.reconsume_current_input_code_point();
                    // consume a numeric token, and return it.
                    return self.consume_a_numeric_token();
                }

                // Otherwise, return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            ',' => Token::Comma,
            '-' => {
                // If the input stream starts with a number,
                if self.stream_starts_with_a_number() {
                    // reconsume the current input code point,
                    self.reconsume_current_input_code_point();
                    // consume a numeric token, and return it.
                    return self.consume_a_numeric_token();
                }

                // Otherwise, if the next 2 input code points are U+002D HYPHEN-MINUS U+003E GREATER-THAN SIGN (->),
                if self.next_two_input_code_points() == (Some('-'), Some('>')) {
                    // consume them and return a <CDC-token>.
                    self.reader.skip(2);
                    return Token::Cdc;
                }

                // Otherwise, if the input stream starts with an ident sequence,
                if self.stream_starts_with_an_ident_sequence() {
                    // reconsume the current input code point,
                    self.reconsume_current_input_code_point();
                    // consume an ident-like token, and return it.
                    return self.consume_an_ident_like_token();
                }

                // Otherwise, return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '<' => {
                // If the next 3 input code points are U+0021 EXCLAMATION MARK U+002D HYPHEN-MINUS U+002D HYPHEN-MINUS (!--),
                if self.next_three_input_code_points() == (Some('!'), Some('-'), Some('-')) {
                    // consume them and return a <CDO-token>.
                    self.reader.skip(3);
                    return Token::Cdo;
                }

                // Otherwise, return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            '@' => {
                // If the next 3 input code points would start an ident sequence,
                let (first, second, third) = self.next_three_input_code_points();
                if three_code_points_would_start_an_ident_sequence(first, second, third) {
                    // consume an ident sequence,
                    // create an <at-keyword-token> with its value set to the returned value, and return it.
                    return Token::AtKeyword {
                        value: self.consume_an_ident_sequence(),
                    };
                }

                // Otherwise, return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            '[' => Token::LeftSquareBracket,
            '\\' => {
                // If the input stream starts with a valid escape,
                if self.stream_starts_with_a_valid_escape() {
                    // reconsume the current input code point,
                    self.reconsume_current_input_code_point();
                    // consume an ident-like token, and return it.
                    return self.consume_an_ident_like_token();
                }

                // Otherwise, this is a parse error.
                self.parse_error(ParseErrorKind::InvalidEscape);
                // Return a <delim-token> with its value set to the current input code point.
                Token::Delim { value: code_point }
            }
            ']' => Token::RightSquareBracket,
            '{' => Token::LeftCurlyBracket,
            '}' => Token::RightCurlyBracket,
            definition!(digit) => {
                // Reconsume the current input code point,
                self.reconsume_current_input_code_point();
                // consume a numeric token, and return it.
                self.consume_a_numeric_token()
            }
            definition!(ident_start_code_point) => {
                // Reconsume the current input code point,
                self.reconsume_current_input_code_point();
                // consume an ident-like token, and return it.
                self.consume_an_ident_like_token()
            }
            _ => Token::Delim { value: code_point },
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-comment
    fn consume_comments(&mut self) {
        // If the next two input code point are U+002F SOLIDUS (/) followed by a U+002A ASTERISK (*),
        while self.next_two_input_code_points() == (Some('/'), Some('*')) {
            // consume them and all following code points
            self.reader.skip(2);

            loop {
                // up to and including the first U+002A ASTERISK (*) followed by a U+002F SOLIDUS (/),
                match self.next_two_input_code_points() {
                    (Some('*'), Some('/')) => {
                        self.reader.skip(2);
                        break;
                    }
                    // or up to an EOF code point.
                    (None, _) => {
                        // If the preceding paragraph ended by consuming an EOF code point, this is a parse error.
                        self.parse_error(ParseErrorKind::UnterminatedComment);
                        return;
                    }
                    _ => self.reader.skip(1),
                }
            }
            // Return to the start of this step.
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-numeric-token
    fn consume_a_numeric_token(&mut self) -> Token {
        // Consume a number and let number be the result.
        let number = self.consume_a_number();

        // If the next 3 input code points would start an ident sequence, then:
        let (first, second, third) = self.next_three_input_code_points();
        if three_code_points_would_start_an_ident_sequence(first, second, third) {
            // 1. Create a <dimension-token> with the same value and type flag as number, and a unit set initially to the empty string.
            // 2. Consume an ident sequence. Set the <dimension-token>’s unit to the returned value.
            // 3. Return the <dimension-token>.
            return Token::Dimension {
                value: number.value,
                number_type: number.number_type,
                representation: number.representation,
                unit: self.consume_an_ident_sequence(),
            };
        }

        // Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN (%),
        if first == Some('%') {
            // consume it.
            self.consume_next_input_code_point();
            // Create a <percentage-token> with the same value as number, and return it.
            return Token::Percentage {
                value: number.value,
                number_type: number.number_type,
                representation: number.representation,
            };
        }

        // Otherwise, create a <number-token> with the same value and type flag as number, and return it.
        Token::Number {
            value: number.value,
            number_type: number.number_type,
            representation: number.representation,
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token
    fn consume_an_ident_like_token(&mut self) -> Token {
        // Consume an ident sequence, and let string be the result.
        let string = self.consume_an_ident_sequence();

        // If string’s value is an ASCII case-insensitive match for "url",
        // and the next input code point is U+0028 LEFT PARENTHESIS ((),
        if string.eq_ignore_ascii_case("url") && self.next_input_code_point() == Some('(') {
            // consume it.
            self.consume_next_input_code_point();

            // While the next two input code points are whitespace,
            // consume the next input code point.
            loop {
                let (first, second) = self.next_two_input_code_points();
                if !(is_whitespace(first) && is_whitespace(second)) {
                    break;
                }
                self.consume_next_input_code_point();
            }

            // If the next one or two input code points are U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('),
            // or whitespace followed by U+0022 QUOTATION MARK (") or U+0027 APOSTROPHE ('),
            // then create a <function-token> with its value set to string and return it.
            let (first, second) = self.next_two_input_code_points();
            let is_quote = |code_point: Option<char>| matches!(code_point, Some('"' | '\''));
            if is_quote(first) || (is_whitespace(first) && is_quote(second)) {
                return Token::Function { value: string };
            }

            // Otherwise, consume a url token, and return it.
            return self.consume_a_url_token();
        }

        // Otherwise, if the next input code point is U+0028 LEFT PARENTHESIS ((),
        if self.next_input_code_point() == Some('(') {
            // consume it.
            self.consume_next_input_code_point();
            // Create a <function-token> with its value set to string and return it.
            return Token::Function { value: string };
        }

        // Otherwise, create an <ident-token> with its value set to string and return it.
        Token::Ident { value: string }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-string-token
    fn consume_a_string_token(&mut self, ending_code_point: char) -> Token {
        // Initially create a <string-token> with its value set to the empty string.
        let mut value = String::new();

        loop {
            // Consume the next input code point.
            match self.consume_next_input_code_point() {
                Some(code_point) if code_point == ending_code_point => {
                    // Return the <string-token>.
                    return Token::String { value };
                }
                None => {
                    // This is a parse error.
                    self.parse_error(ParseErrorKind::EofInString);
                    // Return the <string-token>.
                    return Token::String { value };
                }
                Some(definition!(newline)) => {
                    // This is a parse error.
                    self.parse_error(ParseErrorKind::NewlineInString);
                    // Reconsume the current input code point,
                    self.reconsume_current_input_code_point();
                    // create a <bad-string-token>, and return it.
                    return Token::BadString;
                }
                Some('\\') => match self.next_input_code_point() {
                    // If the next input code point is EOF, do nothing.
                    None => {}
                    // Otherwise, if the next input code point is a newline, consume it.
                    Some(definition!(newline)) => {
                        self.consume_next_input_code_point();
                    }
                    // Otherwise, (the stream starts with a valid escape) consume an escaped code point
                    // and append the returned code point to the <string-token>’s value.
                    Some(_) => {
                        let escaped = self.consume_an_escaped_code_point();
                        value.push(escaped);
                    }
                },
                Some(code_point) => {
                    // Append the current input code point to the <string-token>’s value.
                    value.push(code_point);
                }
            }
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-url-token
    fn consume_a_url_token(&mut self) -> Token {
        // 1. Initially create a <url-token> with its value set to the empty string.
        let mut value = String::new();

        // 2. Consume as much whitespace as possible.
        self.consume_as_much_whitespace_as_possible();

        // 3. Repeatedly consume the next input code point from the stream:
        loop {
            match self.consume_next_input_code_point() {
                Some(')') => {
                    // Return the <url-token>.
                    return Token::Url { value };
                }
                None => {
                    // This is a parse error. Return the <url-token>.
                    self.parse_error(ParseErrorKind::EofInUrl);
                    return Token::Url { value };
                }
                Some(definition!(whitespace)) => {
                    // Consume as much whitespace as possible.
                    self.consume_as_much_whitespace_as_possible();

                    // If the next input code point is U+0029 RIGHT PARENTHESIS ()) or EOF,
                    // consume it and return the <url-token>
                    // (if EOF was encountered, this is a parse error);
                    match self.consume_next_input_code_point() {
                        Some(')') => return Token::Url { value },
                        None => {
                            self.parse_error(ParseErrorKind::EofInUrl);
                            return Token::Url { value };
                        }
                        Some(_) => {
                            // otherwise, consume the remnants of a bad url,
                            // create a <bad-url-token>, and return it.
                            self.reconsume_current_input_code_point();
                            self.consume_the_remnants_of_a_bad_url();
                            return Token::BadUrl;
                        }
                    }
                }
                Some('"' | '\'' | '(' | definition!(non_printable_code_point)) => {
                    // This is a parse error.
                    self.parse_error(ParseErrorKind::InvalidUrlCodePoint);
                    // Consume the remnants of a bad url, create a <bad-url-token>, and return it.
                    self.consume_the_remnants_of_a_bad_url();
                    return Token::BadUrl;
                }
                Some('\\') => {
                    // If the stream starts with a valid escape,
                    if self.stream_starts_with_a_valid_escape() {
                        // consume an escaped code point and append the returned code point to the <url-token>’s value.
                        let escaped = self.consume_an_escaped_code_point();
                        value.push(escaped);
                    } else {
                        // Otherwise, this is a parse error.
                        self.parse_error(ParseErrorKind::InvalidEscape);
                        // Consume the remnants of a bad url, create a <bad-url-token>, and return it.
                        self.consume_the_remnants_of_a_bad_url();
                        return Token::BadUrl;
                    }
                }
                Some(code_point) => {
                    // Append the current input code point to the <url-token>’s value.
                    value.push(code_point);
                }
            }
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url
    fn consume_the_remnants_of_a_bad_url(&mut self) {
        // Repeatedly consume the next input code point from the stream:
        loop {
            match self.consume_next_input_code_point() {
                // U+0029 RIGHT PARENTHESIS ()), EOF: Return.
                Some(')') | None => return,
                _ => {
                    // If the input stream starts with a valid escape, consume an escaped code point.
                    // This allows an escaped right parenthesis ("\)") to be encountered without ending the <bad-url-token>.
                    if self.stream_starts_with_a_valid_escape() {
                        self.consume_an_escaped_code_point();
                    }
                    // Otherwise, do nothing.
                }
            }
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point
    fn consume_an_escaped_code_point(&mut self) -> char {
        // Consume the next input code point.
        match self.consume_next_input_code_point() {
            Some(code_point @ definition!(hex_digit)) => {
                // Consume as many hex digits as possible, but no more than 5.
                // Note that this means 1-6 hex digits have been consumed in total.
                let mut hex_digits = String::from(code_point);
                while hex_digits.len() < 6 {
                    match self.next_input_code_point() {
                        Some(next @ definition!(hex_digit)) => {
                            hex_digits.push(next);
                            self.consume_next_input_code_point();
                        }
                        _ => break,
                    }
                }

                // If the next input code point is whitespace, consume it as well.
                if is_whitespace(self.next_input_code_point()) {
                    self.consume_next_input_code_point();
                }

                // Interpret the hex digits as a hexadecimal number.
                // If this number is zero, or is for a surrogate, or is greater than the maximum allowed code point,
                // return U+FFFD REPLACEMENT CHARACTER (�).
                // Otherwise, return the code point with that value.
                u32::from_str_radix(&hex_digits, 16)
                    .ok()
                    .filter(|&number| number != 0 && number <= MAXIMUM_ALLOWED_CODE_POINT)
                    .and_then(char::from_u32)
                    .unwrap_or(REPLACEMENT_CHARACTER)
            }
            None => {
                // This is a parse error. Return U+FFFD REPLACEMENT CHARACTER (�).
                self.parse_error(ParseErrorKind::EofInEscape);
                REPLACEMENT_CHARACTER
            }
            // Return the current input code point.
            Some(code_point) => code_point,
        }
    }

    fn stream_starts_with_a_valid_escape(&mut self) -> bool {
        // The two code points in question are the current input code point
        // and the next input code point, in that order.
        let next = self.next_input_code_point();
        two_code_points_are_a_valid_escape(self.current_input_code_point, next)
    }

    fn stream_starts_with_an_ident_sequence(&mut self) -> bool {
        // The three code points in question are the current input code point
        // and the next two input code points, in that order.
        let (second, third) = self.next_two_input_code_points();
        three_code_points_would_start_an_ident_sequence(
            self.current_input_code_point,
            second,
            third,
        )
    }

    fn stream_starts_with_a_number(&mut self) -> bool {
        // The three code points in question are the current input code point
        // and the next two input code points, in that order.
        let (second, third) = self.next_two_input_code_points();
        three_code_points_would_start_a_number(self.current_input_code_point, second, third)
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-name
    fn consume_an_ident_sequence(&mut self) -> String {
        // Let result initially be an empty string.
        let mut result = String::new();

        // Repeatedly consume the next input code point from the stream:
        loop {
            match self.consume_next_input_code_point() {
                Some(code_point @ definition!(ident_code_point)) => {
                    // Append the code point to result.
                    result.push(code_point);
                }
                Some('\\') if self.stream_starts_with_a_valid_escape() => {
                    // Consume an escaped code point. Append the returned code point to result.
                    let escaped = self.consume_an_escaped_code_point();
                    result.push(escaped);
                }
                _ => {
                    // Reconsume the current input code point.
                    self.reconsume_current_input_code_point();
                    // Return result.
                    return result;
                }
            }
        }
    }

    // https://www.w3.org/TR/css-syntax-3/#consume-number
    fn consume_a_number(&mut self) -> CssNumber {
        // 1. Initially set type to "integer". Let repr be the empty string.
        let mut repr = String::new();

        macro_rules! consume_and_append_to_repr {
            () => {
                if let Some(code_point) = self.consume_next_input_code_point() {
                    repr.push(code_point);
                }
            };
        }

        macro_rules! consume_digits_and_append_to_repr {
            () => {
                while is_digit(self.next_input_code_point()) {
                    consume_and_append_to_repr!();
                }
            };
        }

        // 2. If the next input code point is U+002B PLUS SIGN (+) or U+002D HYPHEN-MINUS (-), consume it and append it to repr.
        if matches!(self.next_input_code_point(), Some('+' | '-')) {
            consume_and_append_to_repr!();
        }

        // 3. While the next input code point is a digit, consume it and append it to repr.
        consume_digits_and_append_to_repr!();

        // 4. If the next 2 input code points are U+002E FULL STOP (.) followed by a digit, then:
        let (first, second) = self.next_two_input_code_points();
        if first == Some('.') && is_digit(second) {
            // 1. Consume them.
            // 2. Append them to repr.
            consume_and_append_to_repr!();
            consume_and_append_to_repr!();

            // 3. Set type to "number".
            // 4. While the next input code point is a digit, consume it and append it to repr.
            consume_digits_and_append_to_repr!();
        }

        // 5. If the next 2 or 3 input code points are U+0045 LATIN CAPITAL LETTER E (E) or U+0065 LATIN SMALL LETTER E (e),
        // optionally followed by U+002D HYPHEN-MINUS (-) or U+002B PLUS SIGN (+),
        // followed by a digit, then:
        let (first, second, third) = self.next_three_input_code_points();
        if matches!(first, Some('E' | 'e')) {
            let length = match second {
                Some('+' | '-') if is_digit(third) => 3,
                second if is_digit(second) => 2,
                _ => 0,
            };

            if length > 0 {
                // 1. Consume them.
                // 2. Append them to repr.
                for _ in 0..length {
                    consume_and_append_to_repr!();
                }

                // 3. Set type to "number".
                // 4. While the next input code point is a digit, consume it and append it to repr.
                consume_digits_and_append_to_repr!();
            }
        }

        // 6. Convert repr to a number, and set the value to the returned value.
        // 7. Return value and type.
        CssNumber::from_representation(&repr)
    }

    fn consume_as_much_whitespace_as_possible(&mut self) {
        while is_whitespace(self.next_input_code_point()) {
            self.consume_next_input_code_point();
        }
    }
}

/// Yields tokens until the <EOF-token>, which is not yielded itself.
impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token, FatalError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::EndOfFile) => None,
            result => Some(result),
        }
    }
}
