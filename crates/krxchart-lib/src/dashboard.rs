//! One lookup cycle: resolve, fetch, derive, render, export.

use krxchart_analytics::{FrameRow, PriceFrame, ReturnStats};
use krxchart_chart::{ChartError, ChartRenderer};
use krxchart_fetch::{FetchError, ListingSource, PriceSource};
use krxchart_format::{
    Artifact, CsvFormatter, FormatError, Formatter, OutputFormat, XlsxFormatter,
};
use krxchart_listing::{Lookup, ResolveError, TickerResolver};
use krxchart_types::DateRange;
use thiserror::Error;

/// Warning shown when a cycle is triggered without an identifier.
pub const MISSING_IDENTIFIER: &str = "Enter a company name or ticker to look up.";

/// Notice shown when the range holds no trading days.
pub const NO_DATA: &str = "No price data for the selected period.";

/// Number of trailing rows in the tabular preview.
pub const PREVIEW_ROWS: usize = 10;

/// Where the interactive shell is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellState {
    /// Waiting for a trigger.
    Idle,
    /// Resolving and fetching.
    Loading,
    /// Results are ready.
    Success,
    /// The range held no data.
    Empty,
    /// The cycle failed.
    Error,
}

impl ShellState {
    /// Returns true for the states that end a cycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Empty | Self::Error)
    }
}

/// Inputs for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRequest {
    /// Company name or 6-digit ticker, exactly as typed.
    pub identifier: String,
    /// Inclusive date range.
    pub range: DateRange,
    /// Export format.
    pub format: OutputFormat,
}

impl CycleRequest {
    /// Creates a request exporting to the default spreadsheet format.
    #[must_use]
    pub fn new(identifier: impl Into<String>, range: DateRange) -> Self {
        Self {
            identifier: identifier.into(),
            range,
            format: OutputFormat::default(),
        }
    }

    /// Sets the export format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Errors that end a cycle.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The identifier could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The price series could not be retrieved.
    #[error("Failed to fetch prices: {0}")]
    Prices(#[from] FetchError),

    /// The export could not be built.
    #[error("Failed to build the export: {0}")]
    Export(#[from] FormatError),

    /// A chart could not be rendered.
    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl DashboardError {
    /// Returns true if no company carries the requested name.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Resolve(ResolveError::NotFound { .. }))
    }

    /// Returns true if the listed-company roster could not be loaded.
    #[must_use]
    pub const fn is_listing_failure(&self) -> bool {
        matches!(self, Self::Resolve(ResolveError::Listing(_)))
    }
}

/// Everything produced by a successful cycle.
#[derive(Debug, Clone)]
pub struct Report {
    /// The identifier as entered.
    pub identifier: String,
    /// How the identifier was resolved.
    pub lookup: Lookup,
    /// Requested range.
    pub range: DateRange,
    /// Bars with derived columns.
    pub frame: PriceFrame,
    /// Return statistics, absent for a single bar.
    pub stats: Option<ReturnStats>,
    /// Candlestick and volume chart.
    pub price_chart: Artifact,
    /// Return histogram, absent for a single bar.
    pub histogram: Option<Artifact>,
    /// Spreadsheet or CSV export.
    pub export: Artifact,
}

impl Report {
    /// Heading for the results.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("[{}] Price Data", self.identifier)
    }

    /// The last [`PREVIEW_ROWS`] rows.
    pub fn preview(&self) -> impl Iterator<Item = FrameRow> + '_ {
        self.frame.tail(PREVIEW_ROWS)
    }

    /// All artifacts in display order.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        [Some(&self.export), Some(&self.price_chart), self.histogram.as_ref()]
            .into_iter()
            .flatten()
    }
}

/// Result of a cycle that did not fail.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// The identifier was empty; nothing was fetched.
    MissingIdentifier,
    /// The ticker resolved but the range held no bars.
    Empty {
        /// How the identifier was resolved.
        lookup: Lookup,
    },
    /// Charts and export are ready.
    Success(Box<Report>),
}

impl CycleOutcome {
    /// The shell state this outcome leaves behind.
    #[must_use]
    pub const fn state(&self) -> ShellState {
        match self {
            Self::MissingIdentifier => ShellState::Idle,
            Self::Empty { .. } => ShellState::Empty,
            Self::Success(_) => ShellState::Success,
        }
    }
}

/// Runs lookup cycles against a roster source and a price source.
#[derive(Debug)]
pub struct Dashboard<L, P> {
    resolver: TickerResolver<L>,
    prices: P,
    renderer: ChartRenderer,
}

impl<L: ListingSource, P: PriceSource> Dashboard<L, P> {
    /// Creates a dashboard with the default chart appearance.
    #[must_use]
    pub fn new(listing: L, prices: P) -> Self {
        Self {
            resolver: TickerResolver::new(listing),
            prices,
            renderer: ChartRenderer::new(),
        }
    }

    /// Replaces the chart renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: ChartRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the ticker resolver.
    #[must_use]
    pub const fn resolver(&self) -> &TickerResolver<L> {
        &self.resolver
    }

    /// Runs one cycle, reporting state changes to `observe`.
    ///
    /// An empty identifier returns [`CycleOutcome::MissingIdentifier`]
    /// without any network access. Otherwise `observe` sees
    /// [`ShellState::Loading`] followed by exactly one terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution, the price fetch, rendering or the
    /// export fails. No partial results are returned.
    pub async fn trigger<F>(
        &self,
        request: &CycleRequest,
        mut observe: F,
    ) -> Result<CycleOutcome, DashboardError>
    where
        F: FnMut(ShellState),
    {
        if request.identifier.is_empty() {
            tracing::warn!("{MISSING_IDENTIFIER}");
            return Ok(CycleOutcome::MissingIdentifier);
        }

        observe(ShellState::Loading);
        let result = self.run(request).await;
        match &result {
            Ok(outcome) => observe(outcome.state()),
            Err(err) => {
                tracing::error!(identifier = %request.identifier, error = %err, "lookup failed");
                observe(ShellState::Error);
            }
        }
        result
    }

    async fn run(&self, request: &CycleRequest) -> Result<CycleOutcome, DashboardError> {
        let identifier = request.identifier.as_str();
        let lookup = self.resolver.lookup(identifier).await?;

        let bars = self.prices.fetch_prices(&lookup.ticker, request.range).await?;
        tracing::info!(
            ticker = %lookup.ticker,
            range = %request.range,
            bars = bars.len(),
            "fetched prices"
        );
        if bars.is_empty() {
            return Ok(CycleOutcome::Empty { lookup });
        }

        let frame = PriceFrame::new(bars);
        let title = lookup
            .matched
            .as_ref()
            .map_or_else(|| lookup.ticker.to_string(), ToString::to_string);

        let export = Artifact::price_export(
            identifier,
            request.format,
            export_bytes(&frame, request.format)?,
        );
        let chart_svg = self.renderer.price_chart(&frame, &title)?;
        let price_chart = Artifact::svg(identifier, "chart", chart_svg);

        let stats = frame.return_stats();
        let histogram = match (frame.return_histogram(), stats) {
            (Some(histogram), Some(stats)) => {
                let svg = self.renderer.return_histogram(&histogram, &stats)?;
                Some(Artifact::svg(identifier, "returns", svg))
            }
            _ => {
                tracing::info!(bars = frame.len(), "no finite daily returns to plot");
                None
            }
        };

        Ok(CycleOutcome::Success(Box::new(Report {
            identifier: identifier.to_string(),
            lookup,
            range: request.range,
            frame,
            stats,
            price_chart,
            histogram,
            export,
        })))
    }
}

fn export_bytes(frame: &PriceFrame, format: OutputFormat) -> Result<Vec<u8>, FormatError> {
    match format {
        OutputFormat::Xlsx => XlsxFormatter::new().to_bytes(frame),
        OutputFormat::Csv => CsvFormatter::new().to_bytes(frame),
    }
}
