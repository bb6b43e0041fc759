use rust_decimal::Decimal;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Probability sums are compared to four decimal places.
pub fn assert_prob_sum(actual: Decimal, expected: Decimal) {
    assert_decimal_near(actual, expected, Decimal::new(1, 4));
}
