//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// There is nothing to draw.
    #[error("No price data to chart")]
    Empty,

    /// The drawing backend failed.
    #[error("Chart drawing failed: {0}")]
    Draw(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}
