//! Two-panel candlestick and volume chart.
//!
//! Bars are placed at their index on an f64 axis so non-trading days leave
//! no gaps; tick labels map the index back to the bar's date.

use krxchart_analytics::{MA_WINDOWS, PriceFrame};
use krxchart_types::PriceBar;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

use crate::{ChartError, ChartRenderer, FONT};

/// Half the candle body width, in bar-index units.
const CANDLE_HALF_WIDTH: f64 = 0.35;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

impl ChartRenderer {
    /// Renders candlesticks with moving-average overlays above a volume
    /// panel sharing the same x-axis.
    ///
    /// Each moving average starts at the first bar where its window is
    /// full. The candle panel takes 70% of the height and the volume panel
    /// 20%, with the rest split between margins.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Empty`] for an empty frame, or
    /// [`ChartError::Draw`] if the backend fails.
    pub fn price_chart(&self, frame: &PriceFrame, title: &str) -> Result<String, ChartError> {
        if frame.is_empty() {
            return Err(ChartError::Empty);
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.config.width, self.config.height))
                .into_drawing_area();
            root.fill(&self.config.background)?;

            let (upper, lower) = root.split_vertically(self.config.height * 7 / 9);
            self.draw_candles(&upper, frame, title)?;
            self.draw_volume(&lower, frame.bars())?;

            root.present()?;
        }
        Ok(svg)
    }

    fn candle_color(&self, bar: &PriceBar) -> RGBColor {
        if bar.is_rising() {
            self.config.rising
        } else {
            self.config.falling
        }
    }

    fn draw_candles(
        &self,
        area: &Area<'_>,
        frame: &PriceFrame,
        title: &str,
    ) -> Result<(), ChartError> {
        let bars = frame.bars();
        let mut chart = ChartBuilder::on(area)
            .caption(title, (FONT, 20).into_font())
            .margin(10)
            .x_label_area_size(0)
            .y_label_area_size(70)
            .build_cartesian_2d(index_range(bars.len()), price_range(bars))?;

        chart
            .configure_mesh()
            .x_labels(0)
            .y_labels(8)
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            PathElement::new(
                vec![(x, bar.low), (x, bar.high)],
                self.candle_color(bar).stroke_width(1),
            )
        }))?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new(
                [
                    (x - CANDLE_HALF_WIDTH, bar.open.min(bar.close)),
                    (x + CANDLE_HALF_WIDTH, bar.open.max(bar.close)),
                ],
                self.candle_color(bar).filled(),
            )
        }))?;

        let mut labelled = false;
        for (window, color) in MA_WINDOWS.into_iter().zip(self.config.moving_averages) {
            let Some(column) = frame.moving_average(window) else {
                continue;
            };
            let points: Vec<(f64, f64)> = column
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.filter(|v| v.is_finite()).map(|v| (i as f64, v)))
                .collect();
            if points.is_empty() {
                continue;
            }

            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(format!("MA{window}"))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            labelled = true;
        }

        if labelled {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        Ok(())
    }

    fn draw_volume(&self, area: &Area<'_>, bars: &[PriceBar]) -> Result<(), ChartError> {
        let max_volume = bars.iter().map(|b| b.volume).max().unwrap_or(0).max(1) as f64;

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(index_range(bars.len()), 0.0..max_volume * 1.1)?;

        chart
            .configure_mesh()
            .x_labels(8)
            .y_labels(3)
            .x_label_formatter(&|x| date_label(bars, *x))
            .y_label_formatter(&|v| format_volume(*v))
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new(
                [
                    (x - CANDLE_HALF_WIDTH, 0.0),
                    (x + CANDLE_HALF_WIDTH, bar.volume as f64),
                ],
                self.config.volume.filled(),
            )
        }))?;

        Ok(())
    }
}

fn index_range(len: usize) -> Range<f64> {
    -0.5..(len as f64 - 0.5)
}

fn price_range(bars: &[PriceBar]) -> Range<f64> {
    let prices = bars
        .iter()
        .flat_map(|b| [b.low, b.high])
        .filter(|p| p.is_finite());
    let (lo, hi) = prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });
    if lo > hi {
        return 0.0..1.0;
    }

    let margin = if hi - lo > f64::EPSILON {
        (hi - lo) * 0.05
    } else {
        (hi.abs() * 0.05).max(1.0)
    };
    (lo - margin)..(hi + margin)
}

fn date_label(bars: &[PriceBar], x: f64) -> String {
    let i = x.round();
    if i < 0.0 {
        return String::new();
    }
    bars.get(i as usize)
        .map(|b| b.date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_volume(v: f64) -> String {
    if v >= 1_000_000_000.0 {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if v >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.0}K", v / 1_000.0)
    } else {
        format!("{v:.0}")
    }
}
