//! Chart appearance.

use plotters::style::{RGBColor, WHITE};

/// Canvas sizes and colors.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Price chart width in pixels.
    pub width: u32,
    /// Price chart height in pixels.
    pub height: u32,
    /// Histogram width in pixels.
    pub histogram_width: u32,
    /// Histogram height in pixels.
    pub histogram_height: u32,
    /// Background color.
    pub background: RGBColor,
    /// Candle color when the close is at or above the open.
    pub rising: RGBColor,
    /// Candle color when the close is below the open.
    pub falling: RGBColor,
    /// Volume bar color.
    pub volume: RGBColor,
    /// Moving-average line colors, in window order.
    pub moving_averages: [RGBColor; 3],
    /// Histogram bar color.
    pub histogram: RGBColor,
    /// Mean marker color.
    pub mean: RGBColor,
    /// Standard-deviation band marker color.
    pub band: RGBColor,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            histogram_width: 900,
            histogram_height: 600,
            background: WHITE,
            rising: RGBColor(220, 20, 20),
            falling: RGBColor(20, 60, 220),
            volume: RGBColor(99, 110, 250),
            moving_averages: [
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
                RGBColor(148, 103, 189),
            ],
            histogram: RGBColor(135, 206, 235),
            mean: RGBColor(255, 0, 0),
            band: RGBColor(0, 128, 0),
        }
    }
}

/// Renders frames and histograms to SVG text.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    pub(crate) config: ChartConfig,
}

impl ChartRenderer {
    /// Creates a renderer with the default appearance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom appearance.
    #[must_use]
    pub const fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Returns the appearance settings.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }
}
