//! Plot options
//! Named configuration for each plotting function, with documented defaults.
//!
//! Display text fields are `Option<String>`: `Some` replaces the default text,
//! `None` keeps it.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which backend displays the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Render an image with plotters and show it until the window is closed
    #[default]
    Static,
    /// Pan/zoom/hover figure drawn with egui_plot
    Interactive,
}

/// Aggregation applied to each resampling bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggOperation {
    #[default]
    Mean,
    Sum,
    Min,
    Max,
    Median,
    Count,
    First,
    Last,
    Std,
    Var,
}

impl AggOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggOperation::Mean => "mean",
            AggOperation::Sum => "sum",
            AggOperation::Min => "min",
            AggOperation::Max => "max",
            AggOperation::Median => "median",
            AggOperation::Count => "count",
            AggOperation::First => "first",
            AggOperation::Last => "last",
            AggOperation::Std => "std",
            AggOperation::Var => "var",
        }
    }

    /// Whether the operator is only defined for numeric columns.
    pub fn requires_numeric(&self) -> bool {
        matches!(
            self,
            AggOperation::Mean
                | AggOperation::Sum
                | AggOperation::Median
                | AggOperation::Std
                | AggOperation::Var
        )
    }

    /// Fail with `InvalidOperation` if the operator cannot aggregate `dtype`.
    pub fn check_dtype(&self, column: &str, dtype: &DataType) -> PolarsResult<()> {
        if self.requires_numeric() && !is_numeric(dtype) {
            return Err(PolarsError::InvalidOperation(
                format!(
                    "aggregation '{}' is not supported for column '{}' of dtype {}",
                    self, column, dtype
                )
                .into(),
            ));
        }
        Ok(())
    }

    /// Aggregation expression over `column`, keeping the column name.
    pub fn expr(&self, column: &str) -> Expr {
        let c = col(column);
        let agg = match self {
            AggOperation::Mean => c.mean(),
            AggOperation::Sum => c.sum(),
            AggOperation::Min => c.min(),
            AggOperation::Max => c.max(),
            AggOperation::Median => c.median(),
            AggOperation::Count => c.count(),
            AggOperation::First => c.first(),
            AggOperation::Last => c.last(),
            AggOperation::Std => c.std(1),
            AggOperation::Var => c.var(1),
        };
        agg.alias(column)
    }
}

impl fmt::Display for AggOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggOperation {
    type Err = PolarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "mean" | "average" => AggOperation::Mean,
            "sum" => AggOperation::Sum,
            "min" => AggOperation::Min,
            "max" => AggOperation::Max,
            "median" => AggOperation::Median,
            "count" => AggOperation::Count,
            "first" => AggOperation::First,
            "last" => AggOperation::Last,
            "std" => AggOperation::Std,
            "var" => AggOperation::Var,
            _ => {
                return Err(PolarsError::InvalidOperation(
                    format!("unknown aggregation operation '{}'", s).into(),
                ))
            }
        };
        Ok(op)
    }
}

/// Numeric dtypes that can be plotted on a value axis.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Boolean
    )
}

/// Options for [`crate::datetime_line_plot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatetimeLineOptions {
    /// Column used as the time axis; row position when `None`
    pub index_column: Option<String>,
    /// Resampling frequency such as `"D"`, `"15min"` or `"W"`
    pub freq: Option<String>,
    pub agg_operation: AggOperation,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub render_mode: RenderMode,
}

/// Options for [`crate::count_comparison_bar_plot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountComparisonOptions {
    /// Column whose values are counted in both datasets
    pub column_name: String,
    /// Report proportions instead of raw counts
    pub make_ratio: bool,
    /// How many top values to keep per dataset
    pub num_to_compare: usize,
    pub df1_name: String,
    pub df2_name: String,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub render_mode: RenderMode,
}

impl Default for CountComparisonOptions {
    fn default() -> Self {
        Self {
            column_name: String::new(),
            make_ratio: false,
            num_to_compare: 10,
            df1_name: String::new(),
            df2_name: String::new(),
            title: None,
            x_label: None,
            y_label: None,
            render_mode: RenderMode::Interactive,
        }
    }
}

/// Options for [`crate::comparison_line_plot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonLineOptions {
    /// Column shown as hover text next to each forecast point
    pub column_name: String,
    /// Column used as the x axis; row position when `None`
    pub index_column: Option<String>,
    pub df1_name: String,
    pub df2_name: String,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub render_mode: RenderMode,
}

impl Default for ComparisonLineOptions {
    fn default() -> Self {
        Self {
            column_name: String::new(),
            index_column: None,
            df1_name: String::new(),
            df2_name: String::new(),
            title: None,
            x_label: None,
            y_label: None,
            render_mode: RenderMode::Interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operator_names() {
        assert_eq!("mean".parse::<AggOperation>().unwrap(), AggOperation::Mean);
        assert_eq!(" SUM ".parse::<AggOperation>().unwrap(), AggOperation::Sum);
        assert_eq!("std".parse::<AggOperation>().unwrap(), AggOperation::Std);
        assert!(matches!(
            "mode".parse::<AggOperation>(),
            Err(PolarsError::InvalidOperation(_))
        ));
    }

    #[test]
    fn numeric_operator_rejects_strings() {
        let err = AggOperation::Mean
            .check_dtype("city", &DataType::String)
            .unwrap_err();
        assert!(matches!(err, PolarsError::InvalidOperation(_)));
        assert!(AggOperation::Count.check_dtype("city", &DataType::String).is_ok());
        assert!(AggOperation::Sum.check_dtype("sales", &DataType::Float64).is_ok());
    }

    #[test]
    fn options_fill_defaults_from_json() {
        let opts: CountComparisonOptions =
            serde_json::from_str(r#"{"column_name": "city", "make_ratio": true}"#).unwrap();
        assert_eq!(opts.column_name, "city");
        assert!(opts.make_ratio);
        assert_eq!(opts.num_to_compare, 10);
        assert_eq!(opts.render_mode, RenderMode::Interactive);

        let line: DatetimeLineOptions =
            serde_json::from_str(r#"{"freq": "D", "agg_operation": "sum"}"#).unwrap();
        assert_eq!(line.freq.as_deref(), Some("D"));
        assert_eq!(line.agg_operation, AggOperation::Sum);
        assert_eq!(line.render_mode, RenderMode::Static);
    }
}
