use thiserror::Error;

/// Everything that can go wrong while handling a key press.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The display text does not parse as a decimal number.
    #[error("not a number: {0:?}")]
    MalformedNumber(String),
    /// Division with a zero divisor. The IEEE-754 result is still shown.
    #[error("division by zero")]
    DivisionByZero,
    /// Delete pressed with nothing on the display.
    #[error("nothing to delete")]
    EmptyDeleteUnderflow,
    /// A key name outside the keypad vocabulary.
    #[error("unknown key {0:?}")]
    UnknownToken(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
