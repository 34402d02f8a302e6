//! Plotting facade
//! The three chart helpers. Each builds a [`Figure`] from the input frames and
//! hands it to the window selected by the options' render mode.
//!
//! The `*_figure` builders are the data half of each helper and need no display.

use crate::charts::{ChartKind, Figure, XAxisKind};
use crate::data::extract::{axis_values, float_values, hover_text, zip_points};
use crate::data::{
    forecast_comparison_frame, measure_column, rank_comparison_frame, resample, Frequency,
    FORECAST_COLUMN, HOVER_COLUMN, INDEX_COLUMN, RANK_COLUMN, SERIES_COLUMN,
};
use crate::error::Result;
use crate::gui::show_figure;
use crate::options::{ComparisonLineOptions, CountComparisonOptions, DatetimeLineOptions};
use polars::prelude::*;

/// Line chart of one column against the index, optionally resampled.
pub fn datetime_line_plot(
    data: &DataFrame,
    column_name: &str,
    options: &DatetimeLineOptions,
) -> Result<()> {
    let figure = datetime_line_figure(data, column_name, options)?;
    show_figure(figure, options.render_mode)
}

/// Grouped bar chart comparing the top value counts of `column_name` in two datasets.
pub fn count_comparison_bar_plot(
    df1: &DataFrame,
    df2: &DataFrame,
    options: &CountComparisonOptions,
) -> Result<()> {
    let figure = count_comparison_figure(df1, df2, options)?;
    show_figure(figure, options.render_mode)
}

/// Two overlaid `forecast` lines, one per dataset label.
pub fn comparison_line_plot(
    df1: &DataFrame,
    df2: &DataFrame,
    options: &ComparisonLineOptions,
) -> Result<()> {
    let figure = comparison_line_figure(df1, df2, options)?;
    show_figure(figure, options.render_mode)
}

/// Figure for [`datetime_line_plot`].
///
/// Without a frequency every row becomes a point, in index order. With a
/// frequency the column is resampled over `index_column`, one point per bucket.
/// Missing values become gaps in the line.
pub fn datetime_line_figure(
    data: &DataFrame,
    column_name: &str,
    options: &DatetimeLineOptions,
) -> PolarsResult<Figure> {
    data.column(column_name)?;
    let index_column = options.index_column.as_deref();
    if let Some(index) = index_column {
        data.column(index)?;
    }

    let resampled;
    let source = match options.freq.as_deref() {
        None => data,
        Some(freq) => {
            let Some(index) = index_column else {
                return Err(PolarsError::InvalidOperation(
                    "resampling requires a date or datetime index column".into(),
                ));
            };
            let freq: Frequency = freq.parse()?;
            resampled = resample(data, index, column_name, &freq, options.agg_operation)?;
            &resampled
        }
    };

    let ys = float_values(source.column(column_name)?)?;
    let (x_axis, xs) = match index_column {
        Some(index) => axis_values(source.column(index)?)?,
        None => (
            XAxisKind::Linear,
            (0..source.height()).map(|i| Some(i as f64)).collect(),
        ),
    };
    let (points, hover) = zip_points(&xs, &ys, &[]);

    let mut figure = Figure::new(ChartKind::Line, x_axis).with_labels(
        options.title.clone().unwrap_or_default(),
        options
            .x_label
            .clone()
            .unwrap_or_else(|| index_column.unwrap_or(INDEX_COLUMN).to_string()),
        options
            .y_label
            .clone()
            .unwrap_or_else(|| column_name.to_string()),
    );
    for (point, text) in points.into_iter().zip(hover) {
        figure.push_point(column_name, point, text);
    }

    log::debug!(
        "line figure for '{}': {} points from {} rows",
        column_name,
        figure.point_count(),
        data.height()
    );
    Ok(figure)
}

/// Figure for [`count_comparison_bar_plot`].
///
/// One bar per (label, rank), x = rank starting at 1, y = count or proportion,
/// bar text = the ranked value.
pub fn count_comparison_figure(
    df1: &DataFrame,
    df2: &DataFrame,
    options: &CountComparisonOptions,
) -> PolarsResult<Figure> {
    let column = options.column_name.as_str();
    let measure = measure_column(options.make_ratio);

    let frame = rank_comparison_frame(
        df1,
        df2,
        column,
        options.num_to_compare,
        options.make_ratio,
        &options.df1_name,
        &options.df2_name,
    )?;

    let ranks = float_values(frame.column(RANK_COLUMN)?)?;
    let values = float_values(frame.column(measure)?)?;
    let text = hover_text(frame.column(column)?)?;
    let labels = hover_text(frame.column(SERIES_COLUMN)?)?;

    let mut figure = Figure::new(ChartKind::GroupedBar, XAxisKind::Rank).with_labels(
        options.title.clone().unwrap_or_default(),
        options
            .x_label
            .clone()
            .unwrap_or_else(|| RANK_COLUMN.to_string()),
        options
            .y_label
            .clone()
            .unwrap_or_else(|| measure.to_string()),
    );
    for i in 0..frame.height() {
        if let (Some(rank), Some(value)) = (ranks[i], values[i]) {
            figure.push_point(&labels[i], [rank, value], text[i].clone());
        }
    }

    Ok(figure)
}

/// Figure for [`comparison_line_plot`].
///
/// One line per distinct label, `forecast` against each dataset's own index.
/// Hover text is `column_name=value`.
pub fn comparison_line_figure(
    df1: &DataFrame,
    df2: &DataFrame,
    options: &ComparisonLineOptions,
) -> PolarsResult<Figure> {
    let frame = forecast_comparison_frame(
        df1,
        df2,
        options.index_column.as_deref(),
        &options.column_name,
        &options.df1_name,
        &options.df2_name,
    )?;

    let (x_axis, xs) = axis_values(frame.column(INDEX_COLUMN)?)?;
    let ys = float_values(frame.column(FORECAST_COLUMN)?)?;
    let hover = hover_text(frame.column(HOVER_COLUMN)?)?;
    let labels = hover_text(frame.column(SERIES_COLUMN)?)?;

    let mut figure = Figure::new(ChartKind::Line, x_axis).with_labels(
        options.title.clone().unwrap_or_default(),
        options.x_label.clone().unwrap_or_else(|| {
            options
                .index_column
                .clone()
                .unwrap_or_else(|| INDEX_COLUMN.to_string())
        }),
        options
            .y_label
            .clone()
            .unwrap_or_else(|| FORECAST_COLUMN.to_string()),
    );
    for i in 0..frame.height() {
        let Some(x) = xs[i] else {
            continue;
        };
        // Missing forecasts stay in the series as gaps
        let y = ys[i].unwrap_or(f64::NAN);
        let text = format!("{}={}", options.column_name, hover[i]);
        figure.push_point(&labels[i], [x, y], text);
    }

    Ok(figure)
}
