//! Assertion utilities for testing.
//!
//! Helpers for floating-point comparisons of temperature aggregates.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a value lies within `[min, max]`.
pub fn assert_in_range(actual: f64, min: f64, max: f64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

/// Assert `tmin <= tavg <= tmax` for a temperature summary body.
pub fn assert_ordered_summary(body: &serde_json::Value) {
    let tmin = body["tmin"].as_f64().expect("tmin should be a number");
    let tmax = body["tmax"].as_f64().expect("tmax should be a number");
    let tavg = body["tavg"].as_f64().expect("tavg should be a number");
    assert_in_range(tavg, tmin, tmax);
}

/// Assert that all three aggregates of a summary body are null.
pub fn assert_null_summary(body: &serde_json::Value) {
    for key in ["tmin", "tmax", "tavg"] {
        assert!(body[key].is_null(), "{} should be null, got {}", key, body[key]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5.0, 0.0, 10.0);
        assert_in_range(0.0, 0.0, 10.0);
        assert_in_range(10.0, 0.0, 10.0);
    }

    #[test]
    fn test_assert_ordered_summary() {
        assert_ordered_summary(&serde_json::json!({"tmin": 60.0, "tmax": 80.0, "tavg": 70.0}));
        assert_null_summary(&serde_json::json!({"tmin": null, "tmax": null, "tavg": null}));
    }
}
