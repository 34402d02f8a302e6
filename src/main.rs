//! Chartify Plotting demo
//!
//! Builds a few synthetic frames and opens each chart helper in turn.
//! Set `RUST_LOG=debug` to see frame shapes and bucket counts.

use anyhow::Result;
use chartify_plotting::{
    comparison_line_plot, count_comparison_bar_plot, datetime_line_plot, AggOperation,
    ComparisonLineOptions, CountComparisonOptions, DatetimeLineOptions, RenderMode,
};
use polars::prelude::*;

const HOUR_MS: i64 = 3_600_000;
const START_MS: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z

/// Hourly readings over one week with a daily cycle.
fn hourly_readings() -> Result<DataFrame> {
    let hours = 24 * 7;
    let ts: Vec<i64> = (0..hours).map(|h| START_MS + h * HOUR_MS).collect();
    let load: Vec<f64> = (0..hours)
        .map(|h| 50.0 + 20.0 * ((h % 24) as f64 / 24.0 * std::f64::consts::TAU).sin())
        .collect();

    let ts = Column::new("timestamp".into(), ts)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    Ok(DataFrame::new(vec![ts, Column::new("load".into(), load)])?)
}

fn visits(cities: &[&str]) -> Result<DataFrame> {
    Ok(df!("city" => cities)?)
}

fn forecast(values: &[f64], store: &str) -> Result<DataFrame> {
    let stores = vec![store; values.len()];
    Ok(df!("forecast" => values, "store" => stores)?)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let readings = hourly_readings()?;
    datetime_line_plot(
        &readings,
        "load",
        &DatetimeLineOptions {
            index_column: Some("timestamp".into()),
            freq: Some("D".into()),
            agg_operation: AggOperation::Mean,
            title: Some("Mean daily load".into()),
            x_label: Some("Day".into()),
            y_label: Some("Load".into()),
            render_mode: RenderMode::Static,
        },
    )?;

    let monday = visits(&["Oslo", "Lima", "Oslo", "Pune", "Oslo", "Lima", "Kyiv"])?;
    let tuesday = visits(&["Lima", "Lima", "Pune", "Oslo", "Pune", "Lima"])?;
    count_comparison_bar_plot(
        &monday,
        &tuesday,
        &CountComparisonOptions {
            column_name: "city".into(),
            make_ratio: true,
            num_to_compare: 3,
            df1_name: "Monday".into(),
            df2_name: "Tuesday".into(),
            title: Some("Top cities".into()),
            ..Default::default()
        },
    )?;

    let baseline = forecast(&[10.0, 12.0, 11.5, 13.0, 14.2], "north")?;
    let tuned = forecast(&[10.4, 11.8, 12.1, 13.6, 14.0], "north")?;
    comparison_line_plot(
        &baseline,
        &tuned,
        &ComparisonLineOptions {
            column_name: "store".into(),
            df1_name: "baseline".into(),
            df2_name: "tuned".into(),
            title: Some("Forecast comparison".into()),
            ..Default::default()
        },
    )?;

    Ok(())
}
