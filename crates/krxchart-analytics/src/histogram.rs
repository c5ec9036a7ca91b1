//! Fixed-width histogram of returns.

use serde::{Deserialize, Serialize};

/// Bin width for daily-return histograms, in percentage points.
pub const RETURN_BIN_WIDTH: f64 = 0.5;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge (exclusive, except for the last bin).
    pub upper: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Histogram with fixed-width bins starting at the observed minimum.
///
/// Bins are `[start + k * width, start + (k + 1) * width)`; the last bin is
/// closed so the observed maximum is always counted. Non-finite values are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    start: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Builds a histogram, or `None` if there are no finite values or the
    /// width is not positive.
    #[must_use]
    pub fn new(values: &[f64], bin_width: f64) -> Option<Self> {
        if bin_width.is_nan() || bin_width <= 0.0 {
            return None;
        }

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_count = (((max - min) / bin_width).ceil() as usize).max(1);

        let mut counts = vec![0; bin_count];
        for v in finite {
            let idx = (((v - min) / bin_width).floor() as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        Some(Self {
            start: min,
            bin_width,
            counts,
        })
    }

    /// Builds a daily-return histogram with [`RETURN_BIN_WIDTH`] bins.
    #[must_use]
    pub fn of_returns(returns: &[f64]) -> Option<Self> {
        Self::new(returns, RETURN_BIN_WIDTH)
    }

    /// Lower edge of the first bin.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Upper edge of the last bin.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.counts.len() as f64
    }

    /// Width of every bin.
    #[must_use]
    pub const fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Per-bin counts.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of values counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns the bins with their edges.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(|(k, &count)| Bin {
            lower: self.start + self.bin_width * k as f64,
            upper: self.start + self.bin_width * (k + 1) as f64,
            count,
        })
    }
}
