use crate::NumberType;

/// The result of consuming a number.
#[derive(Debug, Clone, PartialEq)]
pub struct CssNumber {
    pub value: f64,
    pub number_type: NumberType,
    pub representation: String,
}

impl CssNumber {
    /// Converts the text of a number into its value and type.
    ///
    /// The value is clamped to the range of a 32-bit signed integer, the
    /// representation is kept as it was written.
    pub fn from_representation(representation: &str) -> CssNumber {
        let parts = NumberParts::split(representation);
        CssNumber {
            value: parts.value(),
            number_type: parts.number_type(),
            representation: representation.to_string(),
        }
    }
}

/// https://www.w3.org/TR/css-syntax-3/#convert-string-to-number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberParts<'a> {
    negative: bool,
    integer: &'a str,
    fraction: Option<&'a str>,
    exponent: Option<(bool, &'a str)>,
}

impl<'a> NumberParts<'a> {
    fn split(repr: &'a str) -> Self {
        let mut rest = repr;

        // 1. A sign: a single U+002B PLUS SIGN (+) or U+002D HYPHEN-MINUS (-), or the empty string.
        let negative = rest.starts_with('-');
        rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);

        // 2. An integer part: zero or more digits.
        let (integer, after) = split_digits(rest);
        rest = after;

        // 3. A decimal point: a single U+002E FULL STOP (.), or the empty string.
        // 4. A fractional part: zero or more digits.
        let fraction = match rest.strip_prefix('.') {
            Some(after_point) => {
                let (digits, after) = split_digits(after_point);
                rest = after;
                Some(digits)
            }
            None => None,
        };

        // 5. An exponent indicator: a single U+0045 LATIN CAPITAL LETTER E (E) or U+0065 LATIN SMALL LETTER E (e), or the empty string.
        // 6. An exponent sign: a single U+002B PLUS SIGN (+) or U+002D HYPHEN-MINUS (-), or the empty string.
        // 7. An exponent: zero or more digits.
        let exponent = rest.strip_prefix(['e', 'E']).map(|after_indicator| {
            let exponent_negative = after_indicator.starts_with('-');
            let unsigned = after_indicator
                .strip_prefix(['+', '-'])
                .unwrap_or(after_indicator);
            (exponent_negative, split_digits(unsigned).0)
        });

        Self {
            negative,
            integer,
            fraction,
            exponent,
        }
    }

    fn number_type(&self) -> NumberType {
        match (self.fraction, self.exponent) {
            (None, None) => NumberType::Integer,
            _ => NumberType::Number,
        }
    }

    /// Returns `s·(i + f·10^-d)·10^(t·e)`, clamped to the i32 range.
    fn value(&self) -> f64 {
        let or_zero = |digits: &'a str| if digits.is_empty() { "0" } else { digits };

        // The decimal form of the formula above, rounded once by the float parser.
        let (exponent_negative, exponent) = self.exponent.unwrap_or((false, ""));
        let decimal = format!(
            "{}{}.{}e{}{}",
            if self.negative { "-" } else { "" },
            or_zero(self.integer),
            or_zero(self.fraction.unwrap_or("")),
            if exponent_negative { "-" } else { "" },
            or_zero(exponent),
        );

        let value = decimal.parse::<f64>().unwrap_or(0.0);
        value.clamp(i32::MIN as f64, i32::MAX as f64)
    }
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(repr: &str) -> f64 {
        CssNumber::from_representation(repr).value
    }

    fn number_type(repr: &str) -> NumberType {
        CssNumber::from_representation(repr).number_type
    }

    #[test]
    fn integers() {
        assert_eq!(value("0"), 0.0);
        assert_eq!(value("128"), 128.0);
        assert_eq!(value("+7"), 7.0);
        assert_eq!(value("-007"), -7.0);
        assert_eq!(number_type("-007"), NumberType::Integer);
    }

    #[test]
    fn fractions_and_exponents() {
        assert_eq!(value(".5"), 0.5);
        assert_eq!(value("-1.25"), -1.25);
        assert_eq!(value("1e1"), 10.0);
        assert_eq!(value("9e-3"), 0.009);
        assert_eq!(value(".009"), 0.009);
        assert_eq!(value("2.5E+2"), 250.0);
        assert_eq!(number_type(".5"), NumberType::Number);
        assert_eq!(number_type("1e1"), NumberType::Number);
        assert_eq!(number_type("1E-1"), NumberType::Number);
    }

    #[test]
    fn type_flag_follows_the_shape_of_the_text() {
        for repr in ["1", "+0", "12.0", "-.5e3", "4E2", "99999999999"] {
            let expected = if repr.contains(['.', 'e', 'E']) {
                NumberType::Number
            } else {
                NumberType::Integer
            };
            assert_eq!(number_type(repr), expected, "{}", repr);
        }
    }

    #[test]
    fn values_are_clamped() {
        let number = CssNumber::from_representation("99999999999999999999");
        assert_eq!(number.value, i32::MAX as f64);
        assert_eq!(number.representation, "99999999999999999999");

        assert_eq!(value("-99999999999999999999"), i32::MIN as f64);
        assert_eq!(value("1e999999999999"), i32::MAX as f64);
        assert_eq!(value("0e999999999999"), 0.0);
        assert_eq!(value("1e-999999999999"), 0.0);
    }
}
