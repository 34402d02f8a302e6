//! Static Chart Renderer
//! Draws a [`Figure`] into a bitmap with plotters.
//!
//! Layout:
//! 1. Title centered above the plot area (omitted when empty)
//! 2. Axis descriptions on both axes, x ticks formatted per axis kind
//! 3. Line series or grouped bars, one palette color per series
//! 4. Legend in the upper right when there is more than one series
//!
//! Text uses an embedded DejaVu Sans, so rendering works without system fonts.

use crate::charts::figure::{bar_slot, format_x_value, series_color, ChartKind, Figure};
use crate::error::{PlotError, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use std::path::Path;
use std::sync::Once;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 640;

const FONT: &str = "sans-serif";

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

static REGISTER_FONT: Once = Once::new();

fn ensure_font_registered() {
    REGISTER_FONT.call_once(|| {
        let registered = plotters::style::register_font(
            FONT,
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
        if registered.is_err() {
            log::warn!("embedded chart font could not be loaded");
        }
    });
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render into a packed RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(figure: &Figure, width: u32, height: u32) -> Result<Vec<u8>> {
        ensure_font_registered();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(PlotError::draw)?;

            match figure.kind {
                ChartKind::Line => Self::draw_lines(&root, figure)?,
                ChartKind::GroupedBar => Self::draw_bars(&root, figure)?,
            }

            root.present().map_err(PlotError::draw)?;
        }
        Ok(buffer)
    }

    /// Render and encode as PNG.
    pub fn render_png(figure: &Figure, width: u32, height: u32) -> Result<Vec<u8>> {
        let rgb = Self::render_rgb(figure, width, height)?;
        let image = RgbImage::from_raw(width, height, rgb)
            .ok_or_else(|| PlotError::Draw("bitmap size does not match dimensions".into()))?;

        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;
        Ok(png.into_inner())
    }

    /// Render and write a PNG file.
    pub fn save_png(
        figure: &Figure,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let png = Self::render_png(figure, width, height)?;
        std::fs::write(path.as_ref(), png)?;
        log::debug!("saved chart to {}", path.as_ref().display());
        Ok(())
    }

    fn chart_builder<'a, 'b>(
        root: &'a Canvas<'b>,
        figure: &Figure,
    ) -> ChartBuilder<'a, 'b, BitMapBackend<'b>> {
        let mut builder = ChartBuilder::on(root);
        builder
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70);
        if !figure.title.is_empty() {
            builder.caption(&figure.title, (FONT, 24));
        }
        builder
    }

    fn draw_lines(root: &Canvas<'_>, figure: &Figure) -> Result<()> {
        let (x_min, x_max) = figure.x_bounds();
        let (y_min, y_max) = figure.y_bounds();
        let x_axis = figure.x_axis;
        let span = x_max - x_min;

        let mut chart = Self::chart_builder(root, figure)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(PlotError::draw)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .x_label_formatter(&|x| format_x_value(x_axis, *x, span))
            .draw()
            .map_err(PlotError::draw)?;

        for (i, series) in figure.series.iter().enumerate() {
            let (r, g, b) = series_color(i);
            let color = RGBColor(r, g, b);

            // The first run carries the legend entry, even when empty
            let mut segments = series.segments();
            let first = segments.next().unwrap_or(&[]);
            chart
                .draw_series(LineSeries::new(
                    first.iter().map(|p| (p[0], p[1])),
                    color.stroke_width(2),
                ))
                .map_err(PlotError::draw)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            for segment in segments {
                chart
                    .draw_series(LineSeries::new(
                        segment.iter().map(|p| (p[0], p[1])),
                        color.stroke_width(2),
                    ))
                    .map_err(PlotError::draw)?;
            }
        }

        if figure.series.len() > 1 {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(PlotError::draw)?;
        }

        Ok(())
    }

    fn draw_bars(root: &Canvas<'_>, figure: &Figure) -> Result<()> {
        let (x_min, x_max) = figure.x_bounds();
        let (y_min, y_max) = figure.y_bounds();
        let x_axis = figure.x_axis;
        let span = x_max - x_min;
        let series_count = figure.series.len();

        let mut chart = Self::chart_builder(root, figure)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(PlotError::draw)?;

        // One candidate tick per rank, the formatter blanks the in-between values
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(figure.max_rank() + 2)
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .x_label_formatter(&|x| format_x_value(x_axis, *x, span))
            .draw()
            .map_err(PlotError::draw)?;

        let text_style = TextStyle::from((FONT, 12).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for (i, series) in figure.series.iter().enumerate() {
            let (r, g, b) = series_color(i);
            let color = RGBColor(r, g, b);
            let (offset, width) = bar_slot(i, series_count);

            chart
                .draw_series(series.points.iter().map(|p| {
                    let left = p[0] + offset - width / 2.0;
                    Rectangle::new([(left, 0.0), (left + width, p[1])], color.filled())
                }))
                .map_err(PlotError::draw)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });

            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .zip(series.hover.iter())
                        .filter(|(_, text)| !text.is_empty())
                        .map(|(p, text)| {
                            Text::new(text.clone(), (p[0] + offset, p[1]), text_style.clone())
                        }),
                )
                .map_err(PlotError::draw)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(PlotError::draw)?;

        Ok(())
    }
}
