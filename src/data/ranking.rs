//! Value ranking
//! Top-N value counts per dataset, tagged and stacked into one comparison table.

use crate::data::{stack, SERIES_COLUMN};
use polars::prelude::*;

pub const RANK_COLUMN: &str = "rank";
pub const COUNT_COLUMN: &str = "count";
pub const PROPORTION_COLUMN: &str = "proportion";

/// Name of the measure column for the chosen mode.
pub fn measure_column(make_ratio: bool) -> &'static str {
    if make_ratio {
        PROPORTION_COLUMN
    } else {
        COUNT_COLUMN
    }
}

/// Rank the values of `column` by frequency and keep the top `n`.
///
/// Nulls are dropped. Ties keep first-occurrence order. With `make_ratio`
/// each count is divided by the number of non-null rows in `df`.
///
/// Output columns: ["rank", column, "count" | "proportion"], rank starting at 1.
pub fn top_value_counts(
    df: &DataFrame,
    column: &str,
    n: usize,
    make_ratio: bool,
) -> PolarsResult<DataFrame> {
    if n == 0 {
        return Err(PolarsError::InvalidOperation(
            "number of values to compare must be positive".into(),
        ));
    }
    df.column(column)?;

    let counted = df
        .clone()
        .lazy()
        .select([col(column)])
        .filter(col(column).is_not_null())
        .group_by_stable([col(column)])
        .agg([len().alias(COUNT_COLUMN)])
        .sort_by_exprs(
            [col(COUNT_COLUMN)],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        );

    let measured = if make_ratio {
        counted.select([
            col(column),
            (col(COUNT_COLUMN).cast(DataType::Float64)
                / col(COUNT_COLUMN).sum().cast(DataType::Float64))
            .alias(PROPORTION_COLUMN),
        ])
    } else {
        counted
    };

    // Counts past the index width mean "everything"
    let limit = IdxSize::try_from(n).unwrap_or(IdxSize::MAX);
    measured
        .limit(limit)
        .with_row_index(RANK_COLUMN, Some(1))
        .collect()
}

/// Rank both datasets independently, tag each with its label and stack them.
/// The ranked value column takes the supertype of both datasets' dtypes.
///
/// Output columns: ["rank", column, "count" | "proportion", "series"].
pub fn rank_comparison_frame(
    df1: &DataFrame,
    df2: &DataFrame,
    column: &str,
    n: usize,
    make_ratio: bool,
    df1_name: &str,
    df2_name: &str,
) -> PolarsResult<DataFrame> {
    let first = top_value_counts(df1, column, n, make_ratio)?;
    let second = top_value_counts(df2, column, n, make_ratio)?;

    log::debug!(
        "ranked '{}': {} rows for '{}', {} rows for '{}'",
        column,
        first.height(),
        df1_name,
        second.height(),
        df2_name
    );

    let first = tag(first, df1_name);
    let second = tag(second, df2_name);
    stack([first, second])
}

fn tag(df: DataFrame, label: &str) -> LazyFrame {
    df.lazy().with_column(lit(label).alias(SERIES_COLUMN))
}
