//! Trailing simple moving average.

/// Computes the trailing simple moving average of `values`.
///
/// The output has the same length as the input. The first `window - 1`
/// entries are `None`; entry `i` after that is the arithmetic mean of
/// `values[i + 1 - window..=i]`. A zero window yields all `None`.
///
/// ```
/// use krxchart_analytics::moving_average;
///
/// let ma = moving_average(&[1.0, 2.0, 3.0, 4.0], 3);
/// assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0)]);
/// ```
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < window {
            out.push(None);
            continue;
        }
        let sum: f64 = values[i + 1 - window..=i].iter().sum();
        out.push(Some(sum / window as f64));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leading_undefined_count() {
        let closes: Vec<f64> = (1..=150).map(f64::from).collect();
        for window in [5, 20, 120] {
            let ma = moving_average(&closes, window);
            assert_eq!(ma.len(), closes.len());
            let leading = ma.iter().take_while(|v| v.is_none()).count();
            assert_eq!(leading, window - 1);
            assert!(ma[window - 1..].iter().all(Option::is_some));
        }
    }

    #[test]
    fn test_trailing_mean() {
        let closes = [10.0, 11.0, 12.5, 9.0, 14.0, 15.5, 13.0];
        let ma = moving_average(&closes, 5);

        for i in 4..closes.len() {
            let expected = closes[i - 4..=i].iter().sum::<f64>() / 5.0;
            assert_relative_eq!(ma[i].unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_window_longer_than_series() {
        let ma = moving_average(&[1.0, 2.0, 3.0], 120);
        assert!(ma.iter().all(Option::is_none));
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let closes = [3.0, 1.0, 2.0];
        let ma = moving_average(&closes, 1);
        assert_eq!(ma, vec![Some(3.0), Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_zero_window() {
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![None, None]);
    }
}
