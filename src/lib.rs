//! Chartify Plotting - chart helpers for time-indexed Polars data
//!
//! Three helpers render a line chart of a (resampled) time series, a grouped bar
//! chart of the top value counts in two datasets, and an overlay of two
//! forecasts. Aggregation is done by Polars; static images are drawn with
//! plotters and interactive charts with egui_plot.

pub mod charts;
pub mod data;
pub mod error;
pub mod gui;
pub mod options;
mod plotting;

pub use charts::{ChartKind, Figure, Series, StaticChartRenderer, XAxisKind};
pub use error::{PlotError, Result};
pub use gui::show_figure;
pub use options::{
    AggOperation, ComparisonLineOptions, CountComparisonOptions, DatetimeLineOptions, RenderMode,
};
pub use plotting::{
    comparison_line_figure, comparison_line_plot, count_comparison_bar_plot,
    count_comparison_figure, datetime_line_figure, datetime_line_plot,
};
