//! Daily-return distribution histogram.

use krxchart_analytics::{Histogram, ReturnStats};
use plotters::prelude::*;

use crate::{ChartError, ChartRenderer, FONT};

/// Histogram chart title.
pub const HISTOGRAM_TITLE: &str = "Daily Return Distribution Histogram";

/// X-axis description.
pub const RETURN_AXIS: &str = "Daily Return (%)";

/// Y-axis description.
pub const COUNT_AXIS: &str = "Frequency (Count)";

/// Number of standard deviations marked on each side of the mean.
pub const STD_BAND: f64 = 3.0;

/// Dashes per marker line.
const DASHES: usize = 24;

struct Marker {
    x: f64,
    label: String,
    color: RGBColor,
    width: u32,
}

impl ChartRenderer {
    /// Renders the return histogram with vertical markers at the mean and
    /// at `mean ± 3σ`.
    ///
    /// The bands are omitted when `stats` has no standard deviation, and
    /// any marker at a non-finite position is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Draw`] if the backend fails.
    pub fn return_histogram(
        &self,
        histogram: &Histogram,
        stats: &ReturnStats,
    ) -> Result<String, ChartError> {
        let markers = self.markers(stats);

        let (lo, hi) = markers
            .iter()
            .fold((histogram.start(), histogram.end()), |(lo, hi), m| {
                (lo.min(m.x), hi.max(m.x))
            });
        let pad = (hi - lo) * 0.05;
        let y_max = (histogram.max_count() as f64 * 1.15).max(1.0);
        let gap = histogram.bin_width() * 0.025;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(
                &mut svg,
                (self.config.histogram_width, self.config.histogram_height),
            )
            .into_drawing_area();
            root.fill(&self.config.background)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(HISTOGRAM_TITLE, (FONT, 22).into_font())
                .margin(15)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d((lo - pad)..(hi + pad), 0.0..y_max)?;

            chart
                .configure_mesh()
                .x_desc(RETURN_AXIS)
                .y_desc(COUNT_AXIS)
                .x_label_formatter(&|v| format!("{v:.1}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .draw()?;

            let fill = self.config.histogram.mix(0.75).filled();
            chart.draw_series(histogram.bins().map(|bin| {
                Rectangle::new(
                    [(bin.lower + gap, 0.0), (bin.upper - gap, bin.count as f64)],
                    fill,
                )
            }))?;

            let top = y_max * 0.92;
            for marker in &markers {
                let style = marker.color.stroke_width(marker.width);
                chart.draw_series(
                    dashes(marker.x, 0.0, top, DASHES)
                        .map(|segment| PathElement::new(segment, style)),
                )?;
                chart.draw_series(std::iter::once(Text::new(
                    marker.label.clone(),
                    (marker.x, y_max * 0.97),
                    (FONT, 14).into_font().color(&marker.color),
                )))?;
            }

            root.present()?;
        }
        Ok(svg)
    }

    fn markers(&self, stats: &ReturnStats) -> Vec<Marker> {
        let mut markers = vec![Marker {
            x: stats.mean,
            label: format!("Mean: {:.2}%", stats.mean),
            color: self.config.mean,
            width: 3,
        }];
        if let Some(upper) = stats.upper_band(STD_BAND) {
            markers.push(Marker {
                x: upper,
                label: "+3 Std".to_string(),
                color: self.config.band,
                width: 2,
            });
        }
        if let Some(lower) = stats.lower_band(STD_BAND) {
            markers.push(Marker {
                x: lower,
                label: "-3 Std".to_string(),
                color: self.config.band,
                width: 2,
            });
        }
        markers.retain(|m| m.x.is_finite());
        markers
    }
}

/// Splits the vertical line at `x` from `y0` to `y1` into `count` dashes.
fn dashes(x: f64, y0: f64, y1: f64, count: usize) -> impl Iterator<Item = Vec<(f64, f64)>> {
    let step = (y1 - y0) / (2 * count - 1) as f64;
    (0..count).map(move |k| {
        let from = y0 + step * (2 * k) as f64;
        vec![(x, from), (x, from + step)]
    })
}
