//! Daily percentage returns and their summary statistics.

use serde::{Deserialize, Serialize};

/// Percentage change from `previous` to `current`.
///
/// A zero `previous` yields an infinite or NaN result.
#[must_use]
pub fn pct_change(previous: f64, current: f64) -> f64 {
    (current / previous - 1.0) * 100.0
}

/// Computes close-over-close daily returns in percent.
///
/// The result has one fewer element than `closes`: the first close has no
/// predecessor and is dropped.
///
/// ```
/// use krxchart_analytics::daily_returns;
///
/// let returns = daily_returns(&[100.0, 110.0, 99.0]);
/// assert_eq!(returns.len(), 2);
/// assert!((returns[0] - 10.0).abs() < 1e-9);
/// assert!((returns[1] + 10.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| pct_change(w[0], w[1])).collect()
}

/// Summary statistics of a return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    /// Number of returns.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1), absent with fewer than two returns.
    pub std_dev: Option<f64>,
    /// Smallest return.
    pub min: f64,
    /// Largest return.
    pub max: f64,
}

impl ReturnStats {
    /// Computes statistics, or `None` for an empty series.
    #[must_use]
    pub fn from_returns(returns: &[f64]) -> Option<Self> {
        if returns.is_empty() {
            return None;
        }

        let count = returns.len();
        let mean = returns.iter().sum::<f64>() / count as f64;
        let std_dev = (count > 1).then(|| {
            let sum_sq: f64 = returns.iter().map(|r| (r - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        });
        let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }

    /// Returns `mean + k * std_dev`.
    #[must_use]
    pub fn upper_band(&self, k: f64) -> Option<f64> {
        self.std_dev.map(|sd| self.mean + k * sd)
    }

    /// Returns `mean - k * std_dev`.
    #[must_use]
    pub fn lower_band(&self, k: f64) -> Option<f64> {
        self.std_dev.map(|sd| self.mean - k * sd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_daily_returns_formula() {
        let closes = [79_600.0, 77_000.0, 76_600.0, 78_000.0, 78_000.0];
        let returns = daily_returns(&closes);

        assert_eq!(returns.len(), closes.len() - 1);
        for t in 1..closes.len() {
            let expected = (closes[t] / closes[t - 1] - 1.0) * 100.0;
            assert_relative_eq!(returns[t - 1], expected, epsilon = 1e-12);
        }
        assert_relative_eq!(returns[3], 0.0);
    }

    #[test]
    fn test_daily_returns_short_series() {
        assert!(daily_returns(&[]).is_empty());
        assert!(daily_returns(&[100.0]).is_empty());
    }

    #[test]
    fn test_zero_close_propagates_infinity() {
        let returns = daily_returns(&[0.0, 10.0]);
        assert!(returns[0].is_infinite());
    }

    #[test]
    fn test_stats_sample_std() {
        let stats = ReturnStats::from_returns(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(stats.count, 8);
        assert_relative_eq!(stats.mean, 5.0);
        // Population std is 2.0; sample std is sqrt(32 / 7).
        assert_relative_eq!(stats.std_dev.unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(stats.min, 2.0);
        assert_relative_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_stats_bands() {
        let stats = ReturnStats::from_returns(&[-1.0, 1.0]).unwrap();
        let sd = 2.0_f64.sqrt();

        assert_relative_eq!(stats.upper_band(3.0).unwrap(), 3.0 * sd, epsilon = 1e-12);
        assert_relative_eq!(stats.lower_band(3.0).unwrap(), -3.0 * sd, epsilon = 1e-12);
    }

    #[test]
    fn test_stats_single_and_empty() {
        let single = ReturnStats::from_returns(&[1.5]).unwrap();
        assert_relative_eq!(single.mean, 1.5);
        assert!(single.std_dev.is_none());
        assert!(single.upper_band(3.0).is_none());

        assert!(ReturnStats::from_returns(&[]).is_none());
    }
}
