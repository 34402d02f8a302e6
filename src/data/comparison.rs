//! Forecast comparison frame
//! Stacks two forecast frames, each tagged with its series label.

use crate::data::{stack, SERIES_COLUMN};
use polars::prelude::*;

pub const FORECAST_COLUMN: &str = "forecast";
pub const INDEX_COLUMN: &str = "index";
pub const HOVER_COLUMN: &str = "hover";

const ROW_POSITION: &str = "__row_position";

/// Build the comparison frame for two forecast datasets.
///
/// Each dataset keeps its own index: the named `index_column`, or row positions
/// starting at 0. Index dtypes that differ between the datasets, such as `Date`
/// against `Datetime`, are cast to their supertype. `hover_column` is carried as
/// display text only.
///
/// Output columns: ["index", "forecast", "hover", "series"].
pub fn forecast_comparison_frame(
    df1: &DataFrame,
    df2: &DataFrame,
    index_column: Option<&str>,
    hover_column: &str,
    df1_name: &str,
    df2_name: &str,
) -> PolarsResult<DataFrame> {
    let first = tagged_forecast(df1, index_column, hover_column, df1_name)?;
    let second = tagged_forecast(df2, index_column, hover_column, df2_name)?;
    stack([first, second])
}

fn tagged_forecast(
    df: &DataFrame,
    index_column: Option<&str>,
    hover_column: &str,
    label: &str,
) -> PolarsResult<LazyFrame> {
    df.column(FORECAST_COLUMN)?;
    df.column(hover_column)?;
    if let Some(name) = index_column {
        df.column(name)?;
    }

    let lf = df.clone().lazy();
    let (lf, index) = match index_column {
        Some(name) => (lf, col(name)),
        None => (
            lf.with_row_index(ROW_POSITION, None),
            col(ROW_POSITION).cast(DataType::Int64),
        ),
    };

    Ok(lf.select([
        index.alias(INDEX_COLUMN),
        col(FORECAST_COLUMN).strict_cast(DataType::Float64),
        col(hover_column).cast(DataType::String).alias(HOVER_COLUMN),
        lit(label).alias(SERIES_COLUMN),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_with_independent_row_indices() {
        let df1 = df!("forecast" => &[1.0, 2.0], "store" => &["s1", "s1"]).unwrap();
        let df2 = df!("forecast" => &[5.0, 6.0, 7.0], "store" => &["s2", "s2", "s2"]).unwrap();
        let frame = forecast_comparison_frame(&df1, &df2, None, "store", "A", "B").unwrap();

        assert_eq!(frame.height(), 5);
        let index: Vec<i64> = frame
            .column(INDEX_COLUMN)
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(index, vec![0, 1, 0, 1, 2]);
        let labels: Vec<&str> = frame
            .column(SERIES_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(labels, vec!["A", "A", "B", "B", "B"]);
    }

    #[test]
    fn missing_forecast_column_surfaces_lookup_error() {
        let df1 = df!("prediction" => &[1.0], "store" => &["s1"]).unwrap();
        let df2 = df!("forecast" => &[1.0], "store" => &["s1"]).unwrap();
        let err = forecast_comparison_frame(&df1, &df2, None, "store", "A", "B").unwrap_err();
        assert!(matches!(err, PolarsError::ColumnNotFound(_)));
    }

    #[test]
    fn date_and_datetime_indices_stack_as_datetime() {
        let day = Column::new("when".into(), vec![0i32, 1])
            .cast(&DataType::Date)
            .unwrap();
        let ts = Column::new("when".into(), vec![172_800_000i64])
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
            .unwrap();
        let df1 = DataFrame::new(vec![
            day,
            Column::new("forecast".into(), vec![1i32, 2]),
            Column::new("store".into(), vec!["s", "s"]),
        ])
        .unwrap();
        let df2 = DataFrame::new(vec![
            ts,
            Column::new("forecast".into(), vec![3.5]),
            Column::new("store".into(), vec!["s"]),
        ])
        .unwrap();

        let frame =
            forecast_comparison_frame(&df1, &df2, Some("when"), "store", "A", "B").unwrap();
        assert_eq!(frame.height(), 3);
        assert_eq!(
            frame.column(INDEX_COLUMN).unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        let millis: Vec<i64> = frame
            .column(INDEX_COLUMN)
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(millis, vec![0, 86_400_000, 172_800_000]);
    }

    #[test]
    fn numeric_hover_column_becomes_text() {
        let df1 = df!("forecast" => &[1.0], "units" => &[3i64]).unwrap();
        let frame = forecast_comparison_frame(&df1, &df1, None, "units", "A", "B").unwrap();
        let hover: Vec<&str> = frame
            .column(HOVER_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(hover, vec!["3", "3"]);
    }
}
