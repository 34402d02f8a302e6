//! Plot coordinate extraction
//! Turns frame columns into `f64` axis values and hover strings.

use crate::charts::XAxisKind;
use crate::options::is_numeric;
use polars::prelude::*;

const MS_PER_DAY: f64 = 86_400_000.0;

/// `Date` and `Datetime` columns can be resampled and are drawn on a time axis.
pub fn is_temporal(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Date | DataType::Datetime(_, _))
}

/// Numeric column as `f64`, nulls preserved.
pub fn float_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    if !is_numeric(column.dtype()) {
        return Err(PolarsError::InvalidOperation(
            format!(
                "column '{}' of dtype {} has no numeric data to plot",
                column.name(),
                column.dtype()
            )
            .into(),
        ));
    }
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?.into_iter().collect();
    Ok(values)
}

/// X-axis values: epoch milliseconds for temporal columns, plain numbers otherwise.
pub fn axis_values(column: &Column) -> PolarsResult<(XAxisKind, Vec<Option<f64>>)> {
    match column.dtype() {
        DataType::Datetime(unit, _) => {
            let per_ms = match unit {
                TimeUnit::Nanoseconds => 1e6,
                TimeUnit::Microseconds => 1e3,
                TimeUnit::Milliseconds => 1.0,
            };
            let raw = column.cast(&DataType::Int64)?;
            let values = raw
                .i64()?
                .into_iter()
                .map(|v| v.map(|v| v as f64 / per_ms))
                .collect();
            Ok((XAxisKind::Datetime, values))
        }
        DataType::Date => {
            let raw = column.cast(&DataType::Int32)?;
            let values = raw
                .i32()?
                .into_iter()
                .map(|v| v.map(|days| days as f64 * MS_PER_DAY))
                .collect();
            Ok((XAxisKind::Datetime, values))
        }
        _ => Ok((XAxisKind::Linear, float_values(column)?)),
    }
}

/// Display strings for hover labels; nulls become `"null"`.
pub fn hover_text(column: &Column) -> PolarsResult<Vec<String>> {
    let cast = column.cast(&DataType::String)?;
    let text = cast
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or("null").to_string())
        .collect();
    Ok(text)
}

/// Zip coordinates with hover text.
///
/// Rows without an x position are dropped. A missing y becomes a `NaN` point,
/// which renderers treat as a break in the line.
pub fn zip_points(
    xs: &[Option<f64>],
    ys: &[Option<f64>],
    hover: &[String],
) -> (Vec<[f64; 2]>, Vec<String>) {
    let mut points = Vec::with_capacity(xs.len());
    let mut labels = Vec::with_capacity(xs.len());

    for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
        let Some(x) = x.filter(|x| !x.is_nan()) else {
            continue;
        };
        points.push([x, y.unwrap_or(f64::NAN)]);
        labels.push(hover.get(i).cloned().unwrap_or_default());
    }

    (points, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_axis_is_epoch_millis() {
        let ts = Column::new("ts".into(), vec![0i64, 86_400_000_000])
            .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
            .unwrap();
        let (kind, values) = axis_values(&ts).unwrap();
        assert_eq!(kind, XAxisKind::Datetime);
        assert_eq!(values, vec![Some(0.0), Some(86_400_000.0)]);
    }

    #[test]
    fn date_axis_converts_days() {
        let days = Column::new("day".into(), vec![1i32, 2])
            .cast(&DataType::Date)
            .unwrap();
        let (kind, values) = axis_values(&days).unwrap();
        assert_eq!(kind, XAxisKind::Datetime);
        assert_eq!(values, vec![Some(MS_PER_DAY), Some(2.0 * MS_PER_DAY)]);
    }

    #[test]
    fn string_values_are_not_plottable() {
        let names = Column::new("name".into(), vec!["a", "b"]);
        assert!(matches!(
            float_values(&names),
            Err(PolarsError::InvalidOperation(_))
        ));
    }

    #[test]
    fn missing_x_drops_row_and_missing_y_leaves_gap() {
        let xs = [Some(0.0), Some(1.0), None, Some(3.0)];
        let ys = [Some(5.0), None, Some(7.0), Some(8.0)];
        let hover = vec!["a".to_string(), "b".into(), "c".into(), "d".into()];
        let (points, labels) = zip_points(&xs, &ys, &hover);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], [0.0, 5.0]);
        assert_eq!(points[1][0], 1.0);
        assert!(points[1][1].is_nan());
        assert_eq!(points[2], [3.0, 8.0]);
        assert_eq!(labels, vec!["a", "b", "d"]);
    }
}
