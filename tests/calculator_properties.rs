// tests/calculator_properties.rs
// Property tests for the arithmetic evaluator.

use proptest::prelude::*;
use proptest::sample::select;

use quickcalc::calculator::{evaluate, CalcError};

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

fn unknown_operator() -> impl Strategy<Value = &'static str> {
    select(vec!["^", "%", "x", "**", "//", "pow", "", "add"])
}

proptest! {
    #[test]
    fn addition_commutes(a in finite(), b in finite()) {
        let ab = evaluate(&a.to_string(), &b.to_string(), "+").unwrap();
        let ba = evaluate(&b.to_string(), &a.to_string(), "+").unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn multiplication_commutes(a in finite(), b in finite()) {
        let ab = evaluate(&a.to_string(), &b.to_string(), "*").unwrap();
        let ba = evaluate(&b.to_string(), &a.to_string(), "*").unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn subtraction_matches_ieee(a in finite(), b in finite()) {
        // f64::to_string round-trips exactly, so the evaluator must agree
        // with plain IEEE-754 arithmetic on the parsed values.
        let diff = evaluate(&a.to_string(), &b.to_string(), "-").unwrap();
        prop_assert_eq!(diff, a - b);
    }

    #[test]
    fn division_by_zero_is_an_error(a in finite(), zero in select(vec!["0", "0.0", "-0", "0.00"])) {
        let outcome = evaluate(&a.to_string(), zero, "/");
        prop_assert_eq!(outcome, Err(CalcError::DivisionByZero));
    }

    #[test]
    fn unknown_operators_rejected(op in unknown_operator(), a in finite(), b in finite()) {
        let outcome = evaluate(&a.to_string(), &b.to_string(), op);
        prop_assert_eq!(outcome, Err(CalcError::UnsupportedOperator));
    }

    #[test]
    fn unknown_operators_win_over_bad_operands(op in unknown_operator(), junk in "[a-z]{1,8}") {
        let outcome = evaluate(&junk, "", op);
        prop_assert_eq!(outcome, Err(CalcError::UnsupportedOperator));
    }

    #[test]
    fn garbage_operands_never_reach_arithmetic(junk in "[a-z]{1,8}", b in finite()) {
        // Includes alphabetic strings that happen to spell "inf" or "nan";
        // non-finite parses are rejected too.
        let outcome = evaluate(&junk, &b.to_string(), "+");
        prop_assert_eq!(outcome, Err(CalcError::InvalidOperand));
    }
}
