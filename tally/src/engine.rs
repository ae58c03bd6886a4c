//! Two-operand evaluator.
//!
//! An operator key captures the display as the first operand and clears
//! it; `=` applies the pending operator to the first operand and the
//! display, shows the result and keeps it as the next first operand.
//!
//! ```text
//! Idle --(+ - * /)--> OperatorPending --(=)--> Idle
//! ```
//!
//! A display that does not parse when an operand is needed puts the
//! calculator into a locked fault state showing [`ERROR_TEXT`]; only `Clr`
//! leaves it.

use crate::buffer::DisplayBuffer;
use crate::error::{CalcError, Result};
use crate::render::render;
use crate::token::{Operator, Token};
use tracing::{debug, warn};

/// Shown on the display while the calculator is faulted.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaluatorState {
    pub first_operand: f64,
    pub pending_operator: Option<Operator>,
    pub result: f64,
}

impl EvaluatorState {
    /// Apply the pending operator, chaining the result into `first_operand`.
    /// Returns `None` when no operator is pending.
    fn evaluate(&mut self, second_operand: f64) -> Option<f64> {
        let op = self.pending_operator.take()?;
        self.result = op.apply(self.first_operand, second_operand);
        self.first_operand = self.result;
        Some(self.result)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    buffer: DisplayBuffer,
    evaluator: EvaluatorState,
    fault: Option<CalcError>,
    notice: Option<CalcError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the read-only display.
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn evaluator(&self) -> &EvaluatorState {
        &self.evaluator
    }

    /// The error that locked the display, if any.
    pub fn fault(&self) -> Option<&CalcError> {
        self.fault.as_ref()
    }

    /// Non-fatal condition raised by the most recent press.
    pub fn notice(&self) -> Option<&CalcError> {
        self.notice.as_ref()
    }

    /// One-line summary for the status bar: the last notice, the fault
    /// hint, or the operation waiting for its second operand.
    pub fn status(&self) -> String {
        if let Some(notice) = &self.notice {
            notice.to_string()
        } else if self.fault.is_some() {
            "press Clr to continue".to_string()
        } else if let Some(op) = self.evaluator.pending_operator {
            format!("{} {}", render(self.evaluator.first_operand), op)
        } else {
            String::new()
        }
    }

    /// Handle one key press in place and return the new display text.
    pub fn press(&mut self, token: Token) -> &str {
        self.notice = None;

        if self.fault.is_some() && token != Token::Clear {
            debug!(%token, "ignored while faulted");
            return self.display();
        }

        match self.step(token) {
            Ok(()) => {}
            Err(err @ CalcError::MalformedNumber(_)) => {
                warn!(%token, error = %err, "display locked");
                self.buffer.set(ERROR_TEXT);
                self.fault = Some(err);
            }
            Err(err) => {
                debug!(%token, error = %err, "notice");
                self.notice = Some(err);
            }
        }

        debug!(%token, display = self.buffer.text(), "key");
        self.display()
    }

    fn step(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Digit(_) | Token::Point => {
                self.buffer.append(token);
                Ok(())
            }
            Token::Operator(op) => {
                self.evaluator.first_operand = self.buffer.parse()?;
                self.evaluator.pending_operator = Some(op);
                self.buffer.clear();
                Ok(())
            }
            Token::Equals => self.equals(),
            Token::Negate => self.buffer.negate(),
            Token::Clear => {
                self.buffer.clear();
                self.fault = None;
                Ok(())
            }
            Token::Delete => self.buffer.delete_last(),
        }
    }

    fn equals(&mut self) -> Result<()> {
        let Some(op) = self.evaluator.pending_operator else {
            debug!("= with nothing pending");
            return Ok(());
        };

        let second_operand = self.buffer.parse()?;
        if let Some(result) = self.evaluator.evaluate(second_operand) {
            self.buffer.set(render(result));
        }

        if op == Operator::Div && second_operand == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(())
    }
}

/// Pure form of [`Calculator::press`]: consume the state, return the next
/// state and the text to show.
pub fn handle(token: Token, state: Calculator) -> (Calculator, String) {
    let mut next = state;
    let display = next.press(token).to_string();
    (next, display)
}

/// Feed a whole key sequence through [`handle`], starting from a fresh
/// calculator.
pub fn run(tokens: impl IntoIterator<Item = Token>) -> Calculator {
    tokens
        .into_iter()
        .fold(Calculator::new(), |state, token| handle(token, state).0)
}
