use std::fmt;

use css_tokenizer::Token;

/// https://www.w3.org/TR/css-syntax-3/#component-value
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// https://www.w3.org/TR/css-syntax-3/#preserved-tokens
    PreservedToken(Token),
    /// https://www.w3.org/TR/css-syntax-3/#function
    Function(Function),
    SimpleBlock(SimpleBlock),
}

/// https://drafts.csswg.org/css-syntax-3/#function
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub value: Vec<ComponentValue>,
}

/// https://www.w3.org/TR/css-syntax-3/#simple-block
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBlock {
    pub kind: BlockKind,
    pub values: Vec<ComponentValue>,
}

/// The token that opened a simple block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    CurlyBracket,
    SquareBracket,
    Parenthesis,
}

impl BlockKind {
    /// Returns the block kind a token opens, if any.
    pub fn opened_by(token: &Token) -> Option<BlockKind> {
        match token {
            Token::LeftCurlyBracket => Some(BlockKind::CurlyBracket),
            Token::LeftSquareBracket => Some(BlockKind::SquareBracket),
            Token::LeftParenthesis => Some(BlockKind::Parenthesis),
            _ => None,
        }
    }

    pub fn associated_token(&self) -> Token {
        match self {
            BlockKind::CurlyBracket => Token::LeftCurlyBracket,
            BlockKind::SquareBracket => Token::LeftSquareBracket,
            BlockKind::Parenthesis => Token::LeftParenthesis,
        }
    }

    /// The mirror variant of the associated token.
    pub fn ending_token(&self) -> Token {
        match self {
            BlockKind::CurlyBracket => Token::RightCurlyBracket,
            BlockKind::SquareBracket => Token::RightSquareBracket,
            BlockKind::Parenthesis => Token::RightParenthesis,
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentValue::PreservedToken(token) => write!(f, "{}", token),
            ComponentValue::Function(function) => {
                write!(f, "<function {:?} [", function.name)?;
                write_list(f, &function.value)?;
                f.write_str("]>")
            }
            ComponentValue::SimpleBlock(block) => {
                write!(f, "<block {} [", block.kind.associated_token())?;
                write_list(f, &block.values)?;
                f.write_str("]>")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[ComponentValue]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}
