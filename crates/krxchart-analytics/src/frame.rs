//! Price bars with their derived columns.

use chrono::NaiveDate;
use krxchart_types::PriceBar;

use crate::{Histogram, ReturnStats, moving_average, pct_change};

/// Moving-average windows shown on the price chart and exported.
pub const MA_WINDOWS: [usize; 3] = [5, 20, 120];

/// One row of a [`PriceFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    /// The underlying bar.
    pub bar: PriceBar,
    /// Moving averages, one per entry of [`MA_WINDOWS`].
    pub moving_averages: [Option<f64>; 3],
    /// Percentage change from the previous close, absent for the first row.
    pub daily_return: Option<f64>,
}

/// A daily bar series with moving averages and returns attached.
#[derive(Debug, Clone, Default)]
pub struct PriceFrame {
    bars: Vec<PriceBar>,
    moving_averages: [Vec<Option<f64>>; 3],
    returns: Vec<Option<f64>>,
}

impl PriceFrame {
    /// Derives all columns for `bars`, which must be sorted by date.
    #[must_use]
    pub fn new(bars: Vec<PriceBar>) -> Self {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let moving_averages = MA_WINDOWS.map(|window| moving_average(&closes, window));

        let mut returns = Vec::with_capacity(closes.len());
        if !closes.is_empty() {
            returns.push(None);
        }
        returns.extend(closes.windows(2).map(|w| Some(pct_change(w[0], w[1]))));

        Self {
            bars,
            moving_averages,
            returns,
        }
    }

    /// Returns the bars.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the date of the first bar.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    /// Returns the date of the last bar.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    /// Returns the moving-average column for `window`, if it is one of
    /// [`MA_WINDOWS`].
    #[must_use]
    pub fn moving_average(&self, window: usize) -> Option<&[Option<f64>]> {
        MA_WINDOWS
            .iter()
            .position(|&w| w == window)
            .map(|i| self.moving_averages[i].as_slice())
    }

    /// Returns the per-row return column (first entry `None`).
    #[must_use]
    pub fn return_column(&self) -> &[Option<f64>] {
        &self.returns
    }

    /// Returns the daily returns with the first bar dropped.
    #[must_use]
    pub fn daily_returns(&self) -> Vec<f64> {
        self.returns.iter().flatten().copied().collect()
    }

    /// Summary statistics of [`PriceFrame::daily_returns`].
    #[must_use]
    pub fn return_stats(&self) -> Option<ReturnStats> {
        ReturnStats::from_returns(&self.daily_returns())
    }

    /// Histogram of [`PriceFrame::daily_returns`].
    #[must_use]
    pub fn return_histogram(&self) -> Option<Histogram> {
        Histogram::of_returns(&self.daily_returns())
    }

    /// Returns row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<FrameRow> {
        let bar = *self.bars.get(index)?;
        Some(FrameRow {
            bar,
            moving_averages: [
                self.moving_averages[0][index],
                self.moving_averages[1][index],
                self.moving_averages[2][index],
            ],
            daily_return: self.returns[index],
        })
    }

    /// Iterates over all rows in date order.
    pub fn rows(&self) -> impl Iterator<Item = FrameRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    /// Iterates over the last `n` rows in date order.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = FrameRow> + '_ {
        (self.len().saturating_sub(n)..self.len()).filter_map(|i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Days;

    fn frame_with_closes(closes: &[f64]) -> PriceFrame {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let date = start + Days::new(i as u64);
                PriceBar::new(date, c, c + 1.0, c - 1.0, c, 1_000 + i as u64)
            })
            .collect();
        PriceFrame::new(bars)
    }

    #[test]
    fn test_columns_align_with_bars() {
        let closes: Vec<f64> = (0..130).map(|i| 100.0 + f64::from(i)).collect();
        let frame = frame_with_closes(&closes);

        assert_eq!(frame.len(), 130);
        for window in MA_WINDOWS {
            let column = frame.moving_average(window).unwrap();
            assert_eq!(column.len(), 130);
            assert_eq!(column.iter().filter(|v| v.is_none()).count(), window - 1);
        }
        assert!(frame.moving_average(60).is_none());

        let ma5 = frame.moving_average(5).unwrap();
        assert_relative_eq!(ma5[4].unwrap(), 102.0);
        let ma120 = frame.moving_average(120).unwrap();
        assert_relative_eq!(ma120[129].unwrap(), (110.0 + 229.0) / 2.0);
    }

    #[test]
    fn test_returns_drop_first_bar() {
        let frame = frame_with_closes(&[100.0, 105.0, 94.5]);

        assert_eq!(frame.return_column()[0], None);
        let returns = frame.daily_returns();
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -10.0, epsilon = 1e-12);

        let stats = frame.return_stats().unwrap();
        assert_eq!(stats.count, 2);
        assert_relative_eq!(stats.mean, -2.5, epsilon = 1e-12);
        assert_eq!(frame.return_histogram().unwrap().total(), 2);
    }

    #[test]
    fn test_tail() {
        let closes: Vec<f64> = (0..25).map(f64::from).collect();
        let frame = frame_with_closes(&closes);

        let tail: Vec<_> = frame.tail(10).collect();
        assert_eq!(tail.len(), 10);
        assert_relative_eq!(tail[0].bar.close, 15.0);
        assert_relative_eq!(tail[9].bar.close, 24.0);
        assert_relative_eq!(tail[9].moving_averages[1].unwrap(), 14.5);
        assert!(tail[9].moving_averages[2].is_none());

        assert_eq!(frame_with_closes(&[1.0, 2.0]).tail(10).count(), 2);
    }

    #[test]
    fn test_single_bar() {
        let frame = frame_with_closes(&[50_000.0]);
        assert_eq!(frame.len(), 1);
        assert!(frame.daily_returns().is_empty());
        assert!(frame.return_stats().is_none());
        assert!(frame.return_histogram().is_none());
    }

    #[test]
    fn test_empty() {
        let frame = PriceFrame::new(Vec::new());
        assert!(frame.is_empty());
        assert!(frame.return_column().is_empty());
        assert!(frame.first_date().is_none());
        assert_eq!(frame.rows().count(), 0);
    }
}
