//! Key sequences driven through the public `handle` entry point.

use proptest::prelude::*;
use tally::token::parse_sequence;
use tally::{handle, run, CalcError, Calculator, Operator, Token, ERROR_TEXT};

fn display_after(keys: &str) -> String {
    run(parse_sequence(keys).unwrap()).display().to_string()
}

#[test]
fn result_chains_into_next_operation() {
    let mut state = Calculator::new();
    let mut shown = Vec::new();
    for token in parse_sequence("5 + 3 = + 2 =").unwrap() {
        let (next, display) = handle(token, state);
        shown.push(display);
        state = next;
    }
    assert_eq!(shown[3], "8.0");
    assert_eq!(shown.last().map(String::as_str), Some("10.0"));
    assert_eq!(state.evaluator().first_operand, 10.0);
}

#[test]
fn negate_round_trip() {
    assert_eq!(display_after("4 2 Neg"), "-42.0");
    assert_eq!(display_after("4 2 Neg Neg"), "42.0");
}

#[test]
fn negated_operand_feeds_arithmetic() {
    assert_eq!(display_after("6 Neg * 7 ="), "-42.0");
}

#[test]
fn delete_trims_and_tolerates_empty() {
    assert_eq!(display_after("1 2 3 Del"), "12");

    let (calc, display) = handle(Token::Delete, Calculator::new());
    assert_eq!(display, "");
    assert!(calc.fault().is_none());
    assert_eq!(calc.notice(), Some(&CalcError::EmptyDeleteUnderflow));
}

#[test]
fn clear_always_empties() {
    for keys in ["", "1 2", "1 . 5 Neg", "9 / 0 =", "+", "3 * 3 ="] {
        let calc = run(parse_sequence(keys).unwrap());
        let (_, display) = handle(Token::Clear, calc);
        assert_eq!(display, "", "after {keys:?}");
    }
}

#[test]
fn digits_after_result_extend_it() {
    assert_eq!(display_after("2 * 4 = 5"), "8.05");
}

#[test]
fn division_results_follow_ieee_754() {
    assert_eq!(display_after("7 / 0 ="), "Infinity");
    assert_eq!(display_after("7 Neg / 0 ="), "-Infinity");
    assert_eq!(display_after("0 / 0 ="), "NaN");
    // Infinity is a number and can be chained.
    assert_eq!(display_after("1 / 0 = - 1 ="), "Infinity");
}

#[test]
fn malformed_numbers_lock_the_display() {
    assert_eq!(display_after("* 2 ="), ERROR_TEXT);
    assert_eq!(display_after("Neg"), ERROR_TEXT);
    assert_eq!(display_after(". + 1 ="), ERROR_TEXT);
    assert_eq!(display_after("1 . . 2 + 4 5 6"), ERROR_TEXT);
    assert_eq!(display_after("* Clr 4"), "4");
}

#[test]
fn equals_alone_changes_nothing() {
    assert_eq!(display_after("="), "");
    assert_eq!(display_after("1 2 ="), "12");
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

proptest! {
    #[test]
    fn equals_applies_the_pending_operator(a in 0u32..100_000, b in 0u32..100_000, op in operator()) {
        let mut keys: Vec<Token> = a.to_string().chars().filter_map(Token::from_char).collect();
        keys.push(Token::Operator(op));
        keys.extend(b.to_string().chars().filter_map(Token::from_char));
        keys.push(Token::Equals);
        let calc = run(keys);

        let expected = op.apply(f64::from(a), f64::from(b));
        let shown: f64 = calc.display().parse().unwrap();
        if expected.is_nan() {
            prop_assert!(shown.is_nan());
            prop_assert!(calc.evaluator().result.is_nan());
        } else {
            prop_assert_eq!(shown, expected);
            prop_assert_eq!(calc.evaluator().result, expected);
        }
    }

    #[test]
    fn typed_digits_show_verbatim(digits in "[0-9]{1,15}") {
        let keys: Vec<Token> = digits.chars().filter_map(Token::from_char).collect();
        let calc = run(keys);
        prop_assert_eq!(calc.display(), digits.as_str());
    }
}
