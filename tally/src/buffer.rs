//! The editable numeral on the display.

use crate::error::{CalcError, Result};
use crate::render::{parse, render};
use crate::token::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append the character for a digit or decimal point; other tokens are
    /// ignored. A second `.` is accepted here and rejected later by
    /// [`DisplayBuffer::parse`].
    pub fn append(&mut self, token: Token) {
        if let Some(c) = token.as_char() {
            self.text.push(c);
        }
    }

    /// Drop the last character.
    pub fn delete_last(&mut self) -> Result<()> {
        self.text
            .pop()
            .map(|_| ())
            .ok_or(CalcError::EmptyDeleteUnderflow)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Flip the sign and re-render, so "42" becomes "-42.0".
    pub fn negate(&mut self) -> Result<()> {
        let value = self.parse()?;
        self.text = render(-value);
        Ok(())
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn parse(&self) -> Result<f64> {
        parse(&self.text)
    }
}
