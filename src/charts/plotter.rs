//! Chart Plotter Module
//! Draws a [`Figure`] as an interactive egui_plot chart (pan, zoom, hover).

use crate::charts::figure::{
    bar_slot, format_x_value, series_color, ChartKind, Figure, Series, XAxisKind,
};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

/// Creates interactive charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a series.
    pub fn get_series_color(series_index: usize) -> Color32 {
        let (r, g, b) = series_color(series_index);
        Color32::from_rgb(r, g, b)
    }

    /// Draw the title and the chart filling the remaining space.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        if !figure.title.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&figure.title).size(18.0).strong());
            });
            ui.add_space(8.0);
        }

        match figure.kind {
            ChartKind::Line => Self::draw_line_chart(ui, figure),
            ChartKind::GroupedBar => Self::draw_bar_chart(ui, figure),
        }
    }

    /// Draw one line per series, broken at missing values.
    /// X-axis: index (numbers or dates), Y-axis: values
    pub fn draw_line_chart(ui: &mut egui::Ui, figure: &Figure) {
        let x_axis = figure.x_axis;
        let hover_series = figure.series.clone();

        Plot::new("line_chart")
            .legend(Legend::default())
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .x_axis_formatter(move |mark, range| {
                format_x_value(x_axis, mark.value, range.end() - range.start())
            })
            .label_formatter(move |name, value| {
                Self::hover_label(&hover_series, x_axis, name, value.x, value.y)
            })
            .show(ui, |plot_ui| {
                // Runs share a name and color, so the legend shows one entry per series
                for (i, series) in figure.series.iter().enumerate() {
                    for segment in series.segments() {
                        let points: PlotPoints = segment.iter().copied().collect();
                        plot_ui.line(
                            Line::new(points)
                                .color(Self::get_series_color(i))
                                .width(2.0)
                                .name(&series.name),
                        );
                    }
                }
            });
    }

    /// Draw grouped bars, one bar per series at each rank.
    /// X-axis: rank with a tick at every integer, Y-axis: count or proportion
    pub fn draw_bar_chart(ui: &mut egui::Ui, figure: &Figure) {
        let max_rank = figure.max_rank();
        let series_count = figure.series.len();

        Plot::new("bar_chart")
            .legend(Legend::default())
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .include_y(0.0)
            .include_x(0.5)
            .include_x(max_rank as f64 + 0.5)
            // Force a tick on every rank regardless of zoom
            .x_grid_spacer(move |_input| {
                (1..=max_rank)
                    .map(|rank| GridMark {
                        value: rank as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| format_x_value(XAxisKind::Rank, mark.value, 0.0))
            .show(ui, |plot_ui| {
                for (i, series) in figure.series.iter().enumerate() {
                    let (offset, width) = bar_slot(i, series_count);
                    let bars: Vec<Bar> = series
                        .points
                        .iter()
                        .zip(series.hover.iter())
                        .map(|(p, text)| Bar::new(p[0] + offset, p[1]).width(width).name(text))
                        .collect();

                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .color(Self::get_series_color(i))
                            .name(&series.name),
                    );
                }
            });
    }

    /// Hover text: series name, the point's hover metadata, then coordinates.
    fn hover_label(series: &[Series], x_axis: XAxisKind, name: &str, x: f64, y: f64) -> String {
        let x_text = match x_axis {
            XAxisKind::Datetime => format_x_value(XAxisKind::Datetime, x, 0.0),
            _ => format!("{:.2}", x),
        };
        let coords = format!("x = {}\ny = {:.3}", x_text, y);

        let extra = series
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.hover_near(x))
            .filter(|h| !h.is_empty());

        match (name.is_empty(), extra) {
            (true, _) => coords,
            (false, Some(extra)) => format!("{}\n{}\n{}", name, extra, coords),
            (false, None) => format!("{}\n{}", name, coords),
        }
    }
}
