use std::fmt;

/// https://www.w3.org/TR/css-syntax-3/#tokenization
///
/// Numeric tokens keep the exact text they were consumed from, so two tokens
/// with the same value but a different spelling (`1e1` and `10`) are not equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    EndOfFile,

    Ident {
        value: String,
    },
    Function {
        value: String,
    },
    AtKeyword {
        value: String,
    },
    Hash {
        value: String,
        hash_type: HashType,
    },
    String {
        value: String,
    },
    BadString,
    Url {
        value: String,
    },
    BadUrl,
    Delim {
        value: char,
    },
    Number {
        value: f64,
        number_type: NumberType,
        representation: String,
    },
    Percentage {
        value: f64,
        number_type: NumberType,
        representation: String,
    },
    Dimension {
        value: f64,
        number_type: NumberType,
        representation: String,
        unit: String,
    },
    Whitespace,
    Cdo,
    Cdc,
    Colon,
    Semicolon,
    Comma,
    LeftSquareBracket,
    RightSquareBracket,
    LeftParenthesis,
    RightParenthesis,
    LeftCurlyBracket,
    RightCurlyBracket,
}

impl Token {
    /// Creates a <number-token> from its source text.
    pub fn number(representation: &str) -> Token {
        let number = crate::number::CssNumber::from_representation(representation);
        Token::Number {
            value: number.value,
            number_type: number.number_type,
            representation: number.representation,
        }
    }

    pub fn ident(value: &str) -> Token {
        Token::Ident {
            value: value.to_string(),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::EndOfFile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    Integer,
    Number,
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer => f.write_str("integer"),
            NumberType::Number => f.write_str("number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashType {
    Id,
    Unrestricted,
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashType::Id => f.write_str("id"),
            HashType::Unrestricted => f.write_str("unrestricted"),
        }
    }
}

/// Debug rendering used by diagnostics and test fixtures. This is not CSS
/// serialization.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfFile => f.write_str("<EOF>"),
            Token::Ident { value } => write!(f, "<ident {:?}>", value),
            Token::Function { value } => write!(f, "<function {:?}>", value),
            Token::AtKeyword { value } => write!(f, "<at-keyword {:?}>", value),
            Token::Hash { value, hash_type } => write!(f, "<hash {} {:?}>", hash_type, value),
            Token::String { value } => write!(f, "<string {:?}>", value),
            Token::BadString => f.write_str("<bad-string>"),
            Token::Url { value } => write!(f, "<url {:?}>", value),
            Token::BadUrl => f.write_str("<bad-url>"),
            Token::Delim { value } => write!(f, "<delim {:?}>", value),
            Token::Number {
                value,
                number_type,
                representation,
            } => write!(f, "<number {} {} {:?}>", number_type, value, representation),
            Token::Percentage {
                value,
                number_type,
                representation,
            } => write!(
                f,
                "<percentage {} {} {:?}>",
                number_type, value, representation
            ),
            Token::Dimension {
                value,
                number_type,
                representation,
                unit,
            } => write!(
                f,
                "<dimension {} {} {:?} unit {:?}>",
                number_type, value, representation, unit
            ),
            Token::Whitespace => f.write_str("<whitespace>"),
            Token::Cdo => f.write_str("<CDO>"),
            Token::Cdc => f.write_str("<CDC>"),
            Token::Colon => f.write_str("<colon>"),
            Token::Semicolon => f.write_str("<semicolon>"),
            Token::Comma => f.write_str("<comma>"),
            Token::LeftSquareBracket => f.write_str("<[>"),
            Token::RightSquareBracket => f.write_str("<]>"),
            Token::LeftParenthesis => f.write_str("<(>"),
            Token::RightParenthesis => f.write_str("<)>"),
            Token::LeftCurlyBracket => f.write_str("<{>"),
            Token::RightCurlyBracket => f.write_str("<}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_equality_depends_on_representation() {
        assert_ne!(Token::number("1e1"), Token::number("10"));
        assert_eq!(Token::number("10"), Token::number("10"));
        assert_ne!(Token::number("010"), Token::number("10"));
    }

    #[test]
    fn display() {
        assert_eq!(Token::ident("foo").to_string(), "<ident \"foo\">");
        assert_eq!(
            Token::number("1.5").to_string(),
            "<number number 1.5 \"1.5\">"
        );
        assert_eq!(
            Token::Dimension {
                value: 12.0,
                number_type: NumberType::Integer,
                representation: "12".to_string(),
                unit: "px".to_string(),
            }
            .to_string(),
            "<dimension integer 12 \"12\" unit \"px\">"
        );
        assert_eq!(
            Token::Hash {
                value: "a1".to_string(),
                hash_type: HashType::Id,
            }
            .to_string(),
            "<hash id \"a1\">"
        );
        assert_eq!(Token::Delim { value: '+' }.to_string(), "<delim '+'>");
    }
}
