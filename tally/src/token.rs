//! Keypad vocabulary.
//!
//! Each press of a button (or the matching keyboard key) becomes one
//! [`Token`]. Tokens parse from and print as the symbolic names used on
//! the keypad: `0`–`9`, `.`, `+`, `-`, `*`, `/`, `=`, `Del`, `Clr`, `Neg`.

use crate::error::CalcError;
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Plain IEEE-754 arithmetic. `x / 0.0` is ±infinity, `0.0 / 0.0` is NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit, always in `0..=9`.
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
    Delete,
    Clear,
    Negate,
}

impl Token {
    /// Token for a single typed character, if it is on the keypad.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Token::Digit(d as u8)),
            '.' => Some(Token::Point),
            '=' => Some(Token::Equals),
            _ => Operator::from_symbol(c).map(Token::Operator),
        }
    }

    /// The character this token appends to the display, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Token::Digit(d) => char::from_digit(u32::from(d), 10),
            Token::Point => Some('.'),
            _ => None,
        }
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Del" => Ok(Token::Delete),
            "Clr" => Ok(Token::Clear),
            "Neg" => Ok(Token::Negate),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Token::from_char(c),
                    _ => None,
                }
                .ok_or_else(|| CalcError::UnknownToken(s.to_string()))
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{d}"),
            Token::Point => f.write_str("."),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Equals => f.write_str("="),
            Token::Delete => f.write_str("Del"),
            Token::Clear => f.write_str("Clr"),
            Token::Negate => f.write_str("Neg"),
        }
    }
}

/// Split a whitespace-separated key sequence such as `"5 + 3 ="`.
pub fn parse_sequence(keys: &str) -> Result<Vec<Token>, CalcError> {
    keys.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keypad_name_parses_back_to_itself() {
        let names = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "Del",
            "Clr", "Neg",
        ];
        for name in names {
            let token: Token = name.parse().unwrap();
            assert_eq!(token.to_string(), name);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["", "10", "x", "del", "CLR", "%", "=="] {
            assert_eq!(
                name.parse::<Token>(),
                Err(CalcError::UnknownToken(name.to_string()))
            );
        }
    }

    #[test]
    fn sequence_splits_on_whitespace() {
        let tokens = parse_sequence(" 5 +\t3  = ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Digit(5),
                Token::Operator(Operator::Add),
                Token::Digit(3),
                Token::Equals,
            ]
        );
        assert!(parse_sequence("5 ^ 2").is_err());
    }

    #[test]
    fn operators_follow_ieee_754() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Sub.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Mul.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Div.apply(6.0, 3.0), 2.0);
        assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn digits_append_their_character() {
        assert_eq!(Token::Digit(7).as_char(), Some('7'));
        assert_eq!(Token::Point.as_char(), Some('.'));
        assert_eq!(Token::Equals.as_char(), None);
    }
}
