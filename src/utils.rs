//! Rounding helpers shared by the aggregator and the probability computation.
//!
//! Every rounded number in an [`crate::AnalysisResult`] goes through these functions, and they
//! all round half to even (banker's rounding). `22.25` becomes `22.2`, `22.35` becomes `22.4`
//! (subject to the binary representation of the input), and a 12.5% probability becomes `12`.

/// Rounds a value to one decimal place, ties to even.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Expresses `count / total` as a whole percentage in `0..=100`, ties to even.
///
/// Returns `0` when `total` is zero.
pub(crate) fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (count as f64 / total as f64 * 100.0).round_ties_even();
    percent.clamp(0.0, 100.0) as u8
}

/// Arithmetic mean, `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal_ties_to_even() {
        assert_eq!(round_one_decimal(22.0), 22.0);
        assert_eq!(round_one_decimal(1.333333), 1.3);
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
        assert_eq!(round_one_decimal(-3.46), -3.5);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 12); // 12.5 rounds to even
        assert_eq!(percentage(3, 8), 38); // 37.5 rounds to even
        assert_eq!(percentage(10, 10), 100);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[15.0]), Some(15.0));
        assert_eq!(mean(&[20.0, 22.0, 24.0]), Some(22.0));
    }
}
