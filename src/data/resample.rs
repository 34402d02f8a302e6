//! Time-series resampling
//! Groups a time-indexed column into fixed-width buckets with polars' dynamic group-by.

use crate::data::extract::is_temporal;
use crate::data::Frequency;
use crate::options::AggOperation;
use polars::prelude::*;

/// Resample `column` over `index_column` at `freq`, aggregating each bucket with `op`.
///
/// Output columns: [index_column, column], one row per bucket between the first
/// and last observation, in time order. Buckets are left-closed and labeled by
/// their left edge. Empty buckets hold 0 for `sum` and `count` and null for every
/// other operator. The input frame is left untouched.
pub fn resample(
    df: &DataFrame,
    index_column: &str,
    column: &str,
    freq: &Frequency,
    op: AggOperation,
) -> PolarsResult<DataFrame> {
    let index = df.column(index_column)?;
    if !is_temporal(index.dtype()) {
        return Err(PolarsError::InvalidOperation(
            format!(
                "cannot resample: index column '{}' has dtype {}, expected a date or datetime",
                index_column,
                index.dtype()
            )
            .into(),
        ));
    }

    let target = df.column(column)?;
    op.check_dtype(column, target.dtype())?;

    let every = freq.to_duration();
    let options = DynamicGroupOptions {
        every,
        period: every,
        offset: Duration::parse("0ns"),
        closed_window: ClosedWindow::Left,
        label: Label::Left,
        ..Default::default()
    };
    let no_keys: [Expr; 0] = [];

    let grouped = df
        .clone()
        .lazy()
        .select([col(index_column), col(column)])
        .sort_by_exprs([col(index_column)], SortMultipleOptions::default())
        .group_by_dynamic(col(index_column), no_keys, options)
        .agg([op.expr(column)])
        .collect()?;

    let resampled = fill_empty_buckets(grouped, index_column, column, every, op)?;

    log::debug!(
        "resampled '{}' at {} with {}: {} rows -> {} buckets",
        column,
        freq,
        op,
        df.height(),
        resampled.height()
    );

    Ok(resampled)
}

/// Insert a row for every bucket the dynamic group-by skipped.
fn fill_empty_buckets(
    grouped: DataFrame,
    index_column: &str,
    column: &str,
    every: Duration,
    op: AggOperation,
) -> PolarsResult<DataFrame> {
    if grouped.height() < 2 {
        return Ok(grouped);
    }

    // Sorting sets the flag upsample checks for
    let sorted = grouped.sort([index_column], SortMultipleOptions::default())?;
    let full = sorted.upsample(Vec::<PlSmallStr>::new(), index_column, every)?;

    match op {
        AggOperation::Sum | AggOperation::Count => full
            .lazy()
            .with_column(col(column).fill_null(lit(0)))
            .collect(),
        _ => Ok(full),
    }
}
