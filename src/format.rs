//! Result formatting for display.
//!
//! Renders an evaluation result as the text a calculator surface would show.
//! The core never calls into this module; it exists for the consumers of
//! [`crate::evaluate_expression`].

/// Formats a finite numeric result for display.
///
/// Rules, in order:
/// 1. Magnitudes at or above `1e15`, and nonzero magnitudes below `1e-6`,
///    render in exponential notation with six fractional digits.
/// 2. Whole numbers render without a fractional part.
/// 3. Everything else renders as a decimal rounded to ten fractional digits
///    with trailing zeros stripped, hiding floating-point artifacts like
///    `0.30000000000000004`.
///
/// The exponential check runs first so that very large whole numbers such as
/// `1e20` still render compactly.
///
/// # Parameters
/// - `value`: The finite value to render.
///
/// # Returns
/// The display string.
///
/// # Example
/// ```
/// use mathex::format::format_result;
///
/// assert_eq!(format_result(6.0), "6");
/// assert_eq!(format_result(2.5), "2.5");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1e20), "1.000000e20");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    // Normalize -0.0 so it renders as plain zero.
    let value = if value == 0.0 { 0.0 } else { value };

    if value.abs() >= 1e15 || (value != 0.0 && value.abs() < 1e-6) {
        return format!("{value:.6e}");
    }

    if value.fract() == 0.0 {
        return format!("{value}");
    }

    let text = format!("{value:.10}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::format_result;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_result(6.0), "6");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponential_notation() {
        assert_eq!(format_result(1e20), "1.000000e20");
        assert_eq!(format_result(1e15), "1.000000e15");
        assert_eq!(format_result(0.000_000_01), "1.000000e-8");
        assert_eq!(format_result(-2.5e16), "-2.500000e16");
    }

    #[test]
    fn decimals_round_to_ten_digits_and_strip_zeros() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn boundary_magnitudes_stay_decimal() {
        assert_eq!(format_result(0.000_001), "0.000001");
        assert_eq!(format_result(999_999_999_999_999.0), "999999999999999");
    }
}
