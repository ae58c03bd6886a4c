//! tally — a two-operand desktop calculator
//!
//! The calculator logic is independent of any window: feed [`Token`]s to
//! [`handle`] (or [`Calculator::press`]) and show the returned text.
//!
//! ```
//! use tally::{run, token::parse_sequence};
//!
//! let calc = run(parse_sequence("5 + 3 = + 2 =").unwrap());
//! assert_eq!(calc.display(), "10.0");
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod token;

pub use buffer::DisplayBuffer;
pub use config::TallyConfig;
pub use engine::{handle, run, Calculator, EvaluatorState, ERROR_TEXT};
pub use error::CalcError;
pub use token::{Operator, Token};
