use mathex::{
    error::{EvalError, EvaluationError, ParseError},
    evaluate_expression,
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "`{src}` evaluated to {value}, expected {expected}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_parse_error(src: &str) {
    match evaluate_expression(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail parsing"),
        Err(EvaluationError::Parse(_)) => {},
        Err(e) => panic!("`{src}` failed with {e:?}, expected a parse error"),
    }
}

fn assert_eval_error(src: &str, expected: EvalError) {
    match evaluate_expression(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(EvaluationError::Eval(e)) => {
            assert_eq!(e, expected, "`{src}` failed with the wrong kind");
        },
        Err(e) => panic!("`{src}` failed with {e:?}, expected {expected:?}"),
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("2 * 3 + 1", 7.0);
    assert_value("8 - 6 / 2", 5.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("24 / 4 / 2", 3.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 * (3 + 4) / 7", 2.0);
    assert_value("7 % 4", 3.0);
    assert_value("10 % 3 % 2", 1.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^10", 1024.0);
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("4^0.5", 2.0);
}

#[test]
fn unary_minus_binds_looser_than_exponent() {
    assert_value("-2^2", -4.0);
    assert_value("(-2)^2", 4.0);
    assert_value("2^-1", 0.5);
    assert_value("--5", 5.0);
    assert_value("-2 * 3", -6.0);
    assert_value("5 - -3", 8.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value("3.14 + 0.86", 4.0);
    assert_value(".5 * 4", 2.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5e-3", 0.0025);
    assert_value("1.5E2", 150.0);
}

#[test]
fn x_works_as_a_multiplication_sign() {
    assert_value("2x3", 6.0);
    assert_value("2 x 3", 6.0);
    assert_value("2X3", 6.0);
    assert_value("2x(1 + 2)", 6.0);
    assert_value("(1 + 1)x3", 6.0);
    assert_value("2 x 3 x 4", 24.0);
    // Any complete left operand counts, not only a bare number.
    assert_value("pi x 2", 2.0 * std::f64::consts::PI);
}

#[test]
fn x_never_splits_function_names() {
    // `exp` and `max` contain the letter but must lex as whole names.
    assert_value("exp(0)", 1.0);
    assert_value("max(1, 2)", 2.0);
    assert_value("2 x exp(0)", 2.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3 + 4)", 14.0);
    assert_value("(1 + 1)(2 + 2)", 8.0);
    assert_value("2pi", 2.0 * std::f64::consts::PI);
    assert_value("(1 + 1)pi", 2.0 * std::f64::consts::PI);
    assert_value("2sqrt(9)", 6.0);
}

#[test]
fn constants_resolve_case_insensitively() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("PI", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("2 * Pi", 2.0 * std::f64::consts::PI);
}

#[test]
fn degree_and_radian_trig_are_distinct() {
    assert_value("sind(90)", 1.0);
    assert_value("sin(90)", 90.0_f64.sin());
    assert_value("cosd(60)", 0.5);
    assert_value("tand(45)", 1.0);
    assert_value("sin(pi / 2)", 1.0);
}

#[test]
fn function_library() {
    assert_value("SIN(0)", 0.0);
    assert_value("atan2(1, 1)", std::f64::consts::FRAC_PI_4);
    assert_value("sinh(0)", 0.0);
    assert_value("tanh(0)", 0.0);
    assert_value("acosh(1)", 0.0);
    assert_value("log(1000)", 3.0);
    assert_value("ln(e)", 1.0);
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("pow(2, 10)", 1024.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("cbrt(27)", 3.0);
    assert_value("abs(-3.5)", 3.5);
    assert_value("floor(3.7)", 3.0);
    assert_value("ceil(3.2)", 4.0);
    assert_value("round(3.5)", 4.0);
    assert_value("trunc(-3.7)", -3.0);
}

#[test]
fn min_and_max_take_variable_arities() {
    assert_value("min(3, 1, 2)", 1.0);
    assert_value("max(3, 1, 2)", 3.0);
    assert_value("min(5)", 5.0);
    assert_value("max(1, 2, 3, 4, 5, 6)", 6.0);
    assert_parse_error("min()");
}

#[test]
fn min_and_max_propagate_nan_arguments() {
    assert_eval_error("min(sqrt(-1), 2)", EvalError::NotANumber);
    assert_eval_error("max(1, sqrt(-1))", EvalError::NotANumber);
    assert_eval_error("min(asin(2), 0, 5)", EvalError::NotANumber);
}

#[test]
fn random_stays_in_the_unit_interval() {
    for _ in 0..100 {
        let value = evaluate_expression("random()").unwrap();
        assert!((0.0..1.0).contains(&value), "random() produced {value}");
    }
    assert_value("floor(random())", 0.0);
    assert_parse_error("random(1)");
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(evaluate_expression(""),
               Err(EvaluationError::Parse(ParseError::EmptyInput)));
    assert_eq!(evaluate_expression("   "),
               Err(EvaluationError::Parse(ParseError::EmptyInput)));
    assert_eq!(evaluate_expression("\t\n"),
               Err(EvaluationError::Parse(ParseError::EmptyInput)));
}

#[test]
fn invalid_characters_are_rejected_with_position() {
    assert_eq!(evaluate_expression("2 $ 3"),
               Err(EvaluationError::Parse(ParseError::InvalidCharacter { character: '$',
                                                                         position:  2, })));
    assert_parse_error("2 + =");
    assert_parse_error("[1]");
}

#[test]
fn malformed_syntax_is_rejected() {
    assert_parse_error("(1 + 2");
    assert_parse_error("1 + 2)");
    assert_parse_error("1 +");
    assert_parse_error("* 2");
    assert_parse_error("1 2");
    assert_parse_error("1.2.3");
    assert_parse_error("2 x");
    assert_parse_error("sin(1,)");
}

#[test]
fn unknown_and_misused_identifiers_are_rejected() {
    assert_parse_error("foo(1)");
    assert_parse_error("2 + q");
    // A function name without an argument list is not a value.
    assert_parse_error("sin + 1");
    assert_parse_error("x");
}

#[test]
fn call_arity_is_checked_at_parse_time() {
    assert_parse_error("sin(1, 2)");
    assert_parse_error("sin()");
    assert_parse_error("pow(2)");
    assert_parse_error("pow(2, 3, 4)");
    assert_parse_error("atan2(1)");
}

#[test]
fn division_and_modulo_by_zero() {
    assert_eval_error("2 / 0", EvalError::DivisionByZero);
    assert_eval_error("2 % 0", EvalError::DivisionByZero);
    assert_eval_error("1 / (2 - 2)", EvalError::DivisionByZero);
    // A zero dividend is fine.
    assert_value("0 / 5", 0.0);
}

#[test]
fn non_finite_results_are_rejected() {
    assert_eval_error("sqrt(-1)", EvalError::NotANumber);
    assert_eval_error("asin(2)", EvalError::NotANumber);
    assert_eval_error("ln(-1)", EvalError::NotANumber);
    assert_eval_error("(-2)^0.5", EvalError::NotANumber);
    assert_eval_error("10^1000", EvalError::Infinite);
    assert_eval_error("exp(1000)", EvalError::Infinite);
}

#[test]
fn negative_and_zero_results_are_valid() {
    assert_value("1 - 2", -1.0);
    assert_value("0 * 5", 0.0);
    assert_value("ln(1)", 0.0);
}
