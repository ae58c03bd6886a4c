//! Number <-> display text.
//!
//! Integral results keep a trailing `.0` ("8.0", "-42.0") and the
//! non-finite values print as words, so everything [`render`] produces
//! can be read back by [`parse`] when the result is chained.

use crate::error::{CalcError, Result};

pub fn render(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // Debug is the shortest text that reads back to the same f64.
        format!("{value:?}")
    }
}

pub fn parse(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::MalformedNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integral_values_keep_a_fraction() {
        assert_eq!(render(8.0), "8.0");
        assert_eq!(render(-42.0), "-42.0");
        assert_eq!(render(0.0), "0.0");
        assert_eq!(render(0.5), "0.5");
    }

    #[test]
    fn non_finite_values_print_as_words() {
        assert_eq!(render(f64::INFINITY), "Infinity");
        assert_eq!(render(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(render(f64::NAN), "NaN");
    }

    #[test]
    fn rendered_words_parse_back() {
        assert_eq!(parse("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse("NaN").unwrap().is_nan());
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["", ".", "1.2.3", "-", "Error", "5-"] {
            assert_eq!(parse(text), Err(CalcError::MalformedNumber(text.to_string())));
        }
    }

    #[test]
    fn partial_decimals_are_accepted() {
        assert_eq!(parse("5.").unwrap(), 5.0);
        assert_eq!(parse(".5").unwrap(), 0.5);
        assert_eq!(parse("007").unwrap(), 7.0);
    }

    proptest! {
        #[test]
        fn render_round_trips_decimal_strings(s in "-?[0-9]{1,12}(\\.[0-9]{1,8})?") {
            let value = parse(&s).unwrap();
            prop_assert_eq!(parse(&render(value)).unwrap(), value);
        }

        #[test]
        fn render_round_trips_any_finite_value(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            prop_assert_eq!(parse(&render(value)).unwrap(), value);
        }
    }
}
